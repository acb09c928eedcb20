//! Progressive render demo.
//!
//! Builds a small sphere scene, accumulates a number of frames the way an
//! interactive host would, and writes the averaged result to a PNG.

use anyhow::Result;
use lume_core::{Material, Scene};
use lume_renderer::{Camera, Renderer, Vec3};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let (width, height) = (800, 450);
    let frames = 64;

    let scene = build_scene();
    println!("Scene: {} spheres, {} lights", scene.sphere_count(), scene.light_count());

    let mut camera = Camera::new()
        .with_position(Vec3::new(0.0, 1.0, 6.0))
        .with_look_at(Vec3::new(0.0, 0.0, 0.0))
        .with_vertical_fov(45.0);
    camera.resize(width, height);

    let mut renderer = Renderer::new();
    renderer.resize(width, height);

    let settings = renderer.settings_mut();
    settings.accumulate = true;
    settings.antialiasing = true;
    settings.cast_shadows = true;
    settings.bounces = 4;

    println!("Rendering {}x{} over {} frames...", width, height, frames);

    let start = std::time::Instant::now();
    for _ in 0..frames {
        renderer.render(&scene, &camera);
    }
    println!("Rendered in {:?}", start.elapsed());

    let filename = "progressive.png";
    renderer.save_png(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::new(Vec3::new(0.4, 0.45, 0.5), 0.6));
    let coral = scene.add_material(Material::new(Vec3::new(1.0, 0.45, 0.3), 0.05));
    let mint = scene.add_material(Material::new(Vec3::new(0.3, 0.9, 0.6), 0.3));

    scene.add_sphere(Vec3::new(0.0, -101.0, 0.0), 100.0, ground);
    scene.add_sphere(Vec3::new(-1.1, 0.0, 0.0), 1.0, coral);
    scene.add_sphere(Vec3::new(1.3, -0.4, 1.0), 0.6, mint);

    scene.add_light(Vec3::new(-0.6, 1.0, 0.4), Vec3::new(1.0, 0.97, 0.9));
    scene.add_light(Vec3::new(0.8, 0.3, 0.2), Vec3::new(0.25, 0.3, 0.45));

    scene
}
