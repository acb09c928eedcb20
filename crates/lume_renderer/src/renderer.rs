//! Frame lifecycle orchestration.
//!
//! `Renderer` owns the frame buffers, the frame index, and the editor
//! settings, and drives the parallel per-pixel shading loop. Scene and
//! camera are plain references for the duration of one call; nothing is
//! bound outside the call's own stack frame.

use std::path::Path;

use glam::Vec4;
use lume_core::Scene;
use rayon::prelude::*;

use crate::buffer::{pack_rgba, FrameBuffers};
use crate::camera::Camera;
use crate::export::{self, ExportError};
use crate::settings::{RenderMode, RenderPipeline, Settings};
use crate::shading::ray_gen;

/// Progressive path-tracing renderer.
///
/// Renders one frame per [`Renderer::render`] call and accumulates
/// successive frames into a running average while
/// [`Settings::accumulate`] is on. The output image is packed RGBA,
/// row-major, ready for display by the host shell.
pub struct Renderer {
    buffers: FrameBuffers,
    frame_index: u32,
    editor_settings: Settings,
    mode: RenderMode,
}

impl Renderer {
    /// Create a renderer with default editor settings and no buffers.
    ///
    /// [`Renderer::resize`] must be called before the first render.
    pub fn new() -> Self {
        Self {
            buffers: FrameBuffers::new(),
            frame_index: 1,
            editor_settings: Settings::default(),
            mode: RenderMode::Editor,
        }
    }

    /// Allocate or reallocate the frame buffers.
    ///
    /// Resizing to the current dimensions is a no-op that preserves
    /// accumulated data and the frame index; an actual reallocation
    /// restarts accumulation.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.buffers.resize(width, height) {
            self.frame_index = 1;
        }
    }

    /// Render one frame with the currently active settings.
    ///
    /// A paused renderer skips the call entirely: no buffer writes, no
    /// frame index change. Otherwise every pixel is shaded in parallel,
    /// added into the accumulation buffer, and the averaged result is
    /// packed into the output image.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) {
        let settings = self.active_settings();
        if settings.pause {
            return;
        }

        assert!(
            self.buffers.is_allocated(),
            "render called before the first resize"
        );
        assert!(
            camera.width() == self.buffers.width() && camera.height() == self.buffers.height(),
            "camera ray-direction table is {}x{} but the frame buffers are {}x{}",
            camera.width(),
            camera.height(),
            self.buffers.width(),
            self.buffers.height()
        );

        if self.frame_index == 1 {
            self.buffers.clear_accumulation();
        }

        let width = self.buffers.width() as usize;
        let frame_index = self.frame_index;
        let (accumulation, output) = self.buffers.split_mut();

        // Row chunks give every task a disjoint slice of both buffers, so
        // the pixel writes need no synchronization.
        accumulation
            .par_chunks_mut(width)
            .zip(output.par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (accumulation_row, output_row))| {
                for x in 0..width {
                    let sample = ray_gen(scene, camera, &settings, x as u32, y as u32);
                    accumulation_row[x] += sample;

                    let averaged = (accumulation_row[x] / frame_index as f32)
                        .clamp(Vec4::ZERO, Vec4::ONE);
                    output_row[x] = pack_rgba(averaged);
                }
            });

        log::trace!("rendered frame {}", self.frame_index);

        if settings.accumulate {
            self.frame_index += 1;
        } else {
            self.frame_index = 1;
        }
    }

    /// Render under a pipeline's settings until its frame limit is reached.
    ///
    /// When the frame index reaches the limit, control reverts to the
    /// editor settings, which are forced to paused, and accumulation
    /// restarts; the triggering call itself is a no-op render. The
    /// pipeline's last accumulated frame is therefore the one immediately
    /// preceding the limit.
    pub fn render_with_pipeline(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        pipeline: &RenderPipeline,
    ) {
        if self.frame_index >= pipeline.frame_limit {
            log::debug!(
                "pipeline reached frame limit {}, reverting to paused editor settings",
                pipeline.frame_limit
            );
            self.mode = RenderMode::Editor;
            self.editor_settings.pause = true;
            self.reset_frame_accumulation();
        } else {
            self.mode = RenderMode::Pipeline {
                settings: pipeline.settings,
                frame_limit: pipeline.frame_limit,
            };
        }

        self.render(scene, camera);
    }

    /// Restart accumulation on the next render without reallocating.
    ///
    /// The accumulation buffer is cleared lazily when the next frame
    /// starts.
    pub fn reset_frame_accumulation(&mut self) {
        self.frame_index = 1;
    }

    /// Write the current output image to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        if !self.buffers.is_allocated() {
            return Err(ExportError::NoImage);
        }

        export::write_png(
            path.as_ref(),
            self.buffers.width(),
            self.buffers.height(),
            self.buffers.output_bytes(),
        )
    }

    fn active_settings(&self) -> Settings {
        match self.mode {
            RenderMode::Editor => self.editor_settings,
            RenderMode::Pipeline { settings, .. } => settings,
        }
    }

    /// Get the editor settings.
    pub fn settings(&self) -> &Settings {
        &self.editor_settings
    }

    /// Get mutable editor settings.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.editor_settings
    }

    /// Get the active render mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Get the current frame index (1-based).
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Get the image width.
    pub fn width(&self) -> u32 {
        self.buffers.width()
    }

    /// Get the image height.
    pub fn height(&self) -> u32 {
        self.buffers.height()
    }

    /// Get the packed RGBA output image, row-major.
    pub fn image(&self) -> &[u32] {
        self.buffers.output()
    }

    /// Get the output image as RGBA bytes.
    pub fn image_bytes(&self) -> &[u8] {
        self.buffers.output_bytes()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
