//! Ray-sphere intersection and shadow occlusion queries.

use lume_core::{DirectionalLight, Scene};
use lume_math::{Ray, Vec3};

use crate::sampling::random_vec3;

/// Half-range of the jitter applied to shadow ray directions.
const SHADOW_JITTER: f32 = 0.1;

/// Result of an intersection query.
///
/// `hit_distance` is negative on a miss. On a hit the payload carries the
/// world-space position, the unit outward normal, and the index of the hit
/// sphere. Payloads are stack-local per query and never stored.
#[derive(Debug, Clone, Copy)]
pub struct HitPayload {
    /// Ray parameter t of the nearest hit, or -1.0 on a miss
    pub hit_distance: f32,
    /// World-space intersection point
    pub world_position: Vec3,
    /// Unit normal pointing out of the sphere
    pub world_normal: Vec3,
    /// Index of the hit sphere in `Scene::spheres`
    pub sphere_index: usize,
}

impl HitPayload {
    /// Sentinel payload for a ray that hit nothing.
    pub const MISS: HitPayload = HitPayload {
        hit_distance: -1.0,
        world_position: Vec3::ZERO,
        world_normal: Vec3::ZERO,
        sphere_index: 0,
    };

    /// Whether this payload represents a miss.
    #[inline]
    pub fn is_miss(&self) -> bool {
        self.hit_distance < 0.0
    }
}

/// Find the nearest sphere hit along `ray`.
///
/// Every sphere is tested with the quadratic formula and the smallest near
/// root strictly greater than zero wins; ties keep the first sphere
/// encountered. Returns [`HitPayload::MISS`] when no sphere qualifies.
pub fn trace_ray(scene: &Scene, ray: &Ray) -> HitPayload {
    let mut closest_index = None;
    let mut closest_t = f32::MAX;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let origin = ray.origin - sphere.position;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * origin.dot(ray.direction);
        let c = origin.dot(origin) - sphere.radius * sphere.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }

        let near_t = (-b - discriminant.sqrt()) / (2.0 * a);
        if near_t > 0.0 && near_t < closest_t {
            closest_t = near_t;
            closest_index = Some(index);
        }
    }

    match closest_index {
        Some(index) => closest_hit(scene, ray, closest_t, index),
        None => HitPayload::MISS,
    }
}

/// Build the payload for a confirmed nearest hit.
///
/// The position is computed in sphere-local space, where the outward normal
/// is just the normalized local position, then translated back to world
/// space.
fn closest_hit(scene: &Scene, ray: &Ray, hit_distance: f32, sphere_index: usize) -> HitPayload {
    let sphere = &scene.spheres[sphere_index];

    let origin = ray.origin - sphere.position;
    let local_position = origin + ray.direction * hit_distance;

    HitPayload {
        hit_distance,
        world_position: local_position + sphere.position,
        world_normal: local_position.normalize(),
        sphere_index,
    }
}

/// Whether any sphere blocks `light` as seen from `position`.
///
/// The shadow ray direction is jittered for soft edges. Directional lights
/// are infinitely far away, so any sphere with a positive near root
/// occludes, regardless of distance.
pub fn in_shadow(scene: &Scene, position: Vec3, light: &DirectionalLight) -> bool {
    let ray = Ray::new(
        position,
        light.direction + random_vec3(-SHADOW_JITTER, SHADOW_JITTER),
    );

    for sphere in &scene.spheres {
        let origin = ray.origin - sphere.position;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * origin.dot(ray.direction);
        let c = origin.dot(origin) - sphere.radius * sphere.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }

        let near_t = (-b - discriminant.sqrt()) / (2.0 * a);
        if near_t > 0.0 {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_core::Material;

    fn single_sphere_scene(position: Vec3, radius: f32) -> Scene {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new(Vec3::splat(0.5), 0.0));
        scene.add_sphere(position, radius, mat);
        scene
    }

    #[test]
    fn test_head_on_hit_distance() {
        // Sphere at origin, radius 1, ray from z = 5 straight at the center:
        // the near surface is at distance 4.
        let scene = single_sphere_scene(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let payload = trace_ray(&scene, &ray);
        assert!(!payload.is_miss());
        assert!((payload.hit_distance - 4.0).abs() < 1e-4);
        assert!((payload.world_position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4);
        assert!((payload.world_normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4);
        assert_eq!(payload.sphere_index, 0);
    }

    #[test]
    fn test_miss_is_sentinel() {
        let scene = single_sphere_scene(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let payload = trace_ray(&scene, &ray);
        assert_eq!(payload.hit_distance, -1.0);
        assert!(payload.is_miss());
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(trace_ray(&scene, &ray).is_miss());
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        // Both roots negative: the sphere sits behind the ray origin.
        let scene = single_sphere_scene(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(trace_ray(&scene, &ray).is_miss());
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new(Vec3::splat(0.5), 0.0));
        scene.add_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, mat);
        scene.add_sphere(Vec3::new(0.0, 0.0, -4.0), 1.0, mat);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let payload = trace_ray(&scene, &ray);

        assert_eq!(payload.sphere_index, 1);
        assert!((payload.hit_distance - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_shadow_fully_occluded() {
        // A large blocker directly between the surface point and the light:
        // the jittered shadow ray cannot escape around it.
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new(Vec3::splat(0.5), 0.0));
        scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 1.5, mat);

        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE);
        for _ in 0..50 {
            assert!(in_shadow(&scene, Vec3::ZERO, &light));
        }
    }

    #[test]
    fn test_shadow_clear_path() {
        // Blocker on the opposite side of the light direction.
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new(Vec3::splat(0.5), 0.0));
        scene.add_sphere(Vec3::new(0.0, -3.0, 0.0), 1.0, mat);

        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE);
        for _ in 0..50 {
            assert!(!in_shadow(&scene, Vec3::ZERO, &light));
        }
    }

    #[test]
    fn test_shadow_empty_scene() {
        let scene = Scene::new();
        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE);

        assert!(!in_shadow(&scene, Vec3::ZERO, &light));
    }
}
