//! Camera for primary ray generation.
//!
//! The camera precomputes one normalized ray direction per pixel; the
//! renderer only reads the position and that table. Movement and input
//! belong to the host shell, which mutates the camera and calls
//! [`Camera::resize`] to rebuild the table. Keeping the table in sync with
//! the renderer's own resize is the caller's responsibility; the renderer
//! asserts the dimensions match.

use lume_math::Vec3;

/// Camera with a precomputed per-pixel ray-direction table.
#[derive(Clone)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vertical_fov: f32, // degrees

    width: u32,
    height: u32,
    ray_directions: Vec<Vec3>,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vertical_fov: 45.0,
            width: 0,
            height: 0,
            ray_directions: Vec::new(),
        }
    }

    /// Set the camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the look-at target.
    pub fn with_look_at(mut self, look_at: Vec3) -> Self {
        self.look_at = look_at;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vertical_fov(mut self, degrees: f32) -> Self {
        self.vertical_fov = degrees;
        self
    }

    /// Rebuild the ray-direction table for new image dimensions.
    ///
    /// A resize to the current dimensions keeps the existing table.
    pub fn resize(&mut self, width: u32, height: u32) {
        assert!(width > 0 && height > 0, "camera requires nonzero dimensions");
        if width == self.width && height == self.height && !self.ray_directions.is_empty() {
            return;
        }

        self.width = width;
        self.height = height;
        self.recompute_ray_directions();
    }

    fn recompute_ray_directions(&mut self) {
        let width = self.width as f32;
        let height = self.height as f32;
        let aspect = width / height;
        let tan_half_fov = (self.vertical_fov.to_radians() * 0.5).tan();

        let forward = (self.look_at - self.position).normalize();
        let right = forward.cross(self.vup).normalize();
        let up = right.cross(forward);

        self.ray_directions.clear();
        self.ray_directions
            .reserve((self.width * self.height) as usize);

        for y in 0..self.height {
            for x in 0..self.width {
                // Pixel center in [-1, 1], row 0 at the top of the image
                let u = ((x as f32 + 0.5) / width * 2.0 - 1.0) * tan_half_fov * aspect;
                let v = (1.0 - (y as f32 + 0.5) / height * 2.0) * tan_half_fov;

                let direction = (forward + right * u + up * v).normalize();
                self.ray_directions.push(direction);
            }
        }
    }

    /// Get the camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the per-pixel ray directions, row-major.
    #[inline]
    pub fn ray_directions(&self) -> &[Vec3] {
        &self.ray_directions
    }

    /// Get the image width the table was built for.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height the table was built for.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
