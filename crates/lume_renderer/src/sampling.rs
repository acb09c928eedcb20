//! Random sampling helpers.
//!
//! All jitter goes through rand's thread-local generator, so parallel pixel
//! tasks sample independently without any shared state.

use lume_math::Vec3;
use rand::Rng;

/// Uniform random vector with each component in [min, max].
pub(crate) fn random_vec3(min: f32, max: f32) -> Vec3 {
    let mut rng = rand::thread_rng();
    Vec3::new(
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_vec3_in_range() {
        for _ in 0..100 {
            let v = random_vec3(-0.5, 0.5);
            assert!(v.x >= -0.5 && v.x <= 0.5);
            assert!(v.y >= -0.5 && v.y <= 0.5);
            assert!(v.z >= -0.5 && v.z <= 0.5);
        }
    }
}
