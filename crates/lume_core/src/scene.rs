//! Scene types for lume.
//!
//! A scene is an immutable-per-frame collection of spheres, materials,
//! directional lights, and a two-color sky gradient. All types serialize
//! with serde so a host editor can persist them; the persistence itself
//! lives outside this workspace.

use lume_math::Vec3;
use serde::{Deserialize, Serialize};

/// Surface shading parameters, referenced by spheres through an index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base surface color (RGB, 0-1)
    pub albedo: Vec3,

    /// Strength of the stochastic perturbation applied to reflected
    /// bounce directions (0 = mirror)
    pub roughness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::splat(0.5), // Grey default
            roughness: 0.5,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(albedo: Vec3, roughness: f32) -> Self {
        Self { albedo, roughness }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center position in world space
    pub position: Vec3,

    /// Radius in world units
    pub radius: f32,

    /// Index into `Scene::materials`. Must resolve; the renderer indexes
    /// the table directly and a stale index is a caller bug.
    pub material_index: usize,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Vec3, radius: f32, material_index: usize) -> Self {
        Self {
            position,
            radius,
            material_index,
        }
    }
}

/// A light infinitely far away, shining from a fixed direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Direction from a surface toward the light. Not required to be
    /// normalized; shading normalizes before use.
    pub direction: Vec3,

    /// Light color (RGB, 0-1)
    pub color: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self { direction, color }
    }
}

/// Two-color gradient returned when a ray escapes the scene.
///
/// The gradient runs from `secondary_color` at the bottom of the sky
/// (ray pointing down) to `base_color` at the top.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sky {
    pub base_color: Vec3,
    pub secondary_color: Vec3,
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            base_color: Vec3::new(0.5, 0.7, 1.0),
            secondary_color: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// A complete scene: spheres, their materials, lights, and the sky.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Sphere primitives
    pub spheres: Vec<Sphere>,

    /// Material table indexed by `Sphere::material_index`
    pub materials: Vec<Material>,

    /// Directional lights, evaluated in order during shading
    pub directional_lights: Vec<DirectionalLight>,

    /// Sky gradient colors
    pub sky: Sky,
}

impl Scene {
    /// Create an empty scene with the default sky.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let index = self.materials.len();
        self.materials.push(material);
        index
    }

    /// Add a sphere referencing a previously added material.
    pub fn add_sphere(&mut self, position: Vec3, radius: f32, material_index: usize) {
        assert!(
            material_index < self.materials.len(),
            "sphere references material {material_index} but only {} exist",
            self.materials.len()
        );
        self.spheres.push(Sphere::new(position, radius, material_index));
    }

    /// Add a directional light.
    pub fn add_light(&mut self, direction: Vec3, color: Vec3) {
        self.directional_lights
            .push(DirectionalLight::new(direction, color));
    }

    /// Get a material by index.
    pub fn get_material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get material count.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get directional light count.
    pub fn light_count(&self) -> usize {
        self.directional_lights.len()
    }
}
