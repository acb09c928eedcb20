//! Per-pixel path tracing.
//!
//! One [`ray_gen`] call produces a single radiance sample for a pixel: the
//! primary ray walks up to `bounces` reflections, summing direct light from
//! every directional light at each hit and terminating early on the sky.

use lume_core::Scene;
use lume_math::{Ray, Vec3, Vec4};

use crate::camera::Camera;
use crate::intersect::{in_shadow, trace_ray};
use crate::sampling::random_vec3;
use crate::settings::Settings;

/// Offset along the normal when respawning a bounced ray, to avoid
/// self-intersection.
const SURFACE_OFFSET: f32 = 1e-4;

/// Per-bounce energy falloff. Fixed, not physically derived.
const BOUNCE_FALLOFF: f32 = 0.5;

/// Half-range of the antialiasing jitter added to primary ray directions.
const AA_JITTER: f32 = 0.001;

/// Compute one radiance sample for pixel (x, y). Alpha is always 1.
pub fn ray_gen(scene: &Scene, camera: &Camera, settings: &Settings, x: u32, y: u32) -> Vec4 {
    let index = (x + y * camera.width()) as usize;
    let mut ray = Ray::new(camera.position(), camera.ray_directions()[index]);
    if settings.antialiasing {
        ray.direction += random_vec3(-AA_JITTER, AA_JITTER);
    }

    let mut color = Vec3::ZERO;
    let mut throughput = 1.0_f32;

    for _ in 0..settings.bounces {
        let payload = trace_ray(scene, &ray);

        // The sky gradient follows the current bounce direction, not the
        // primary ray.
        let t = (ray.direction.y * 0.5 + 0.5).clamp(0.0, 1.0);
        let sky = scene.sky.base_color * t + scene.sky.secondary_color * (1.0 - t);

        if payload.is_miss() {
            color += sky * throughput;
            break;
        }

        let sphere = &scene.spheres[payload.sphere_index];
        let material = &scene.materials[sphere.material_index];

        let mut bounce_color = Vec3::ZERO;
        for light in &scene.directional_lights {
            if settings.cast_shadows && in_shadow(scene, payload.world_position, light) {
                continue;
            }

            let light_direction = light.direction.normalize();
            let light_factor = payload.world_normal.dot(light_direction).max(0.0);
            bounce_color += material.albedo * light.color * light_factor * throughput;
        }

        color += bounce_color;
        throughput *= BOUNCE_FALLOFF;

        ray.origin = payload.world_position + payload.world_normal * SURFACE_OFFSET;
        ray.direction = reflect(
            ray.direction,
            payload.world_normal + material.roughness * random_vec3(-0.5, 0.5),
        );
    }

    color.extend(1.0)
}

/// Reflect `v` about `n` (glm convention; `n` need not be unit length).
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
