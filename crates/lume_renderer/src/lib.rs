//! Lume Renderer - progressive CPU path tracing.
//!
//! An interactive path tracer for sphere scenes that renders one full frame
//! per call and accumulates successive frames into a running average:
//!
//! - Per-pixel bounce loop with fixed per-bounce energy falloff
//! - Directional lights with jittered soft shadows
//! - Accumulation buffer with pause/reset/resize lifecycle
//! - Frame-limited render pipelines that auto-pause on completion
//!
//! The host shell owns the window, input, and presentation; this crate only
//! produces the packed RGBA image and exposes the frame-lifecycle controls.

mod buffer;
mod camera;
mod export;
mod intersect;
mod renderer;
mod sampling;
mod settings;
mod shading;

pub use buffer::{pack_rgba, FrameBuffers};
pub use camera::Camera;
pub use export::ExportError;
pub use intersect::{in_shadow, trace_ray, HitPayload};
pub use renderer::Renderer;
pub use settings::{RenderMode, RenderPipeline, Settings};
pub use shading::ray_gen;

/// Re-export common math types from lume_math
pub use lume_math::{Ray, Vec3, Vec4};
