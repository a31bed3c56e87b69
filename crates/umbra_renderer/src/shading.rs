//! Lambertian shading with a single hard shadow ray.

use std::f32::consts::PI;

use umbra_core::Scene;
use umbra_math::{Ray, Vec3};

use crate::intersection::{trace, Intersection};
use crate::renderer::{Color, RenderConfig};

/// Compute the color of a traced hit.
///
/// One shadow ray is cast toward the light. Any hit along it counts as
/// occlusion since the light is directional and infinitely far away. The
/// shadow ray is never shaded, so this recurses exactly one level.
///
/// Misses and entity indices outside the scene shade as the background.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    intersection: &Intersection,
    config: &RenderConfig,
) -> Color {
    let Some(entity) = intersection.entity_index.and_then(|index| scene.entity(index)) else {
        return config.background;
    };

    let hit_point = ray.at(intersection.distance);
    let surface_normal = entity.surface_normal(hit_point);
    let direction_to_light = scene.light.direction_to_light();

    // Push the shadow ray off the surface to avoid shadow acne
    let shadow_ray = Ray::new(
        hit_point + surface_normal * Vec3::splat(config.shadow_bias),
        direction_to_light,
    );
    let in_light = !trace(&shadow_ray, &scene.entities).is_hit();

    let light_intensity = if in_light { scene.light.intensity } else { 0.0 };
    let light_power = light_power(
        surface_normal,
        direction_to_light,
        light_intensity,
        config.clamp_negative_light,
    );
    let light_reflected = entity.albedo / PI;

    entity.color * scene.light.color * light_power * light_reflected
}

/// Cosine-weighted light power arriving at a surface.
///
/// Without clamping a surface facing away from the light gets a negative
/// contribution.
#[inline]
pub fn light_power(normal: Vec3, direction_to_light: Vec3, intensity: f32, clamp: bool) -> f32 {
    let cosine = normal.dot(direction_to_light);
    let cosine = if clamp { cosine.max(0.0) } else { cosine };
    cosine * intensity
}
