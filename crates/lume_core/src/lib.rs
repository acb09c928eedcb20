//! Lume Core - scene model for the progressive path tracer.
//!
//! This crate provides the renderer-agnostic scene description:
//!
//! - **Geometry**: `Sphere` with a reference into the material table
//! - **Shading inputs**: `Material`, `DirectionalLight`, `Sky`
//! - **Container**: `Scene` with index-returning builder helpers
//!
//! # Example
//!
//! ```
//! use lume_core::{Material, Scene};
//! use lume_math::Vec3;
//!
//! let mut scene = Scene::new();
//! let gray = scene.add_material(Material::new(Vec3::splat(0.5), 0.2));
//! scene.add_sphere(Vec3::ZERO, 1.0, gray);
//! scene.add_light(Vec3::new(-0.5, 1.0, 0.3), Vec3::ONE);
//! assert_eq!(scene.sphere_count(), 1);
//! ```

pub mod scene;

// Re-export commonly used types
pub use scene::{DirectionalLight, Material, Scene, Sky, Sphere};
