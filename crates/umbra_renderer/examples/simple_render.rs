//! Simple ray casting example.
//!
//! Builds a small scene in code, renders it and saves to PPM format.

use umbra_renderer::{render, Color, Entity, Light, RenderConfig, Scene, Vec3};

fn main() {
    println!("Umbra Ray Caster - Simple Example");
    println!("=================================");

    let scene = build_scene();
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} with {} entities...",
        scene.width,
        scene.height,
        scene.entity_count()
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &config).expect("Failed to render scene");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save_ppm(filename, true).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let light = Light::new(Vec3::new(-0.25, -1.0, -1.0), 15.0, Color::ONE);
    let mut scene = Scene::new(800, 600, light).with_fov(70.0);

    // Ground
    scene.add_entity(Entity::plane(
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::Y,
        0.18,
        Color::new(0.2, 0.2, 0.2),
    ));

    // Three spheres, the red one partly shadowing the floor
    let spheres = [
        (Vec3::new(0.0, 0.0, -5.0), 1.0, 0.18, Color::new(0.4, 1.0, 0.4)),
        (Vec3::new(-3.0, 1.0, -6.0), 2.0, 0.58, Color::new(1.0, 0.2, 0.2)),
        (Vec3::new(2.0, 1.0, -4.0), 1.5, 0.18, Color::new(0.2, 0.2, 1.0)),
    ];
    for (center, radius, albedo, color) in spheres {
        scene.add_entity(Entity::sphere(center, radius, albedo, color));
    }

    scene
}
