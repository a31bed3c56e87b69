//! Renderable entities and their ray intersection geometry.
//!
//! Shapes form a closed set. Every shape-specific operation is a single
//! `match` in this module, so adding a variant never touches call sites.

use serde::{Deserialize, Serialize};
use umbra_math::{Ray, Vec3};

/// Denominators below this magnitude mean the ray runs parallel to a plane.
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Geometric shape of an entity, tagged by `"shape"` in scene files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Plane { point: Vec3, normal: Vec3 },
}

/// A shape plus its diffuse surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(flatten)]
    pub shape: Shape,
    /// Diffuse reflectance coefficient in [0, 1]
    pub albedo: f32,
    /// Surface color (RGB, 0-1)
    pub color: Vec3,
}

impl Entity {
    /// Create a sphere entity.
    pub fn sphere(center: Vec3, radius: f32, albedo: f32, color: Vec3) -> Self {
        Self {
            shape: Shape::Sphere { center, radius },
            albedo,
            color,
        }
    }

    /// Create a plane entity. The normal is normalized here.
    pub fn plane(point: Vec3, normal: Vec3, albedo: f32, color: Vec3) -> Self {
        Self {
            shape: Shape::Plane {
                point,
                normal: normal.normalize(),
            },
            albedo,
            color,
        }
    }

    /// Intersect a ray with this entity.
    ///
    /// Returns the parametric distance of the nearest hit in front of the
    /// ray origin, or `None` when the ray misses.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self.shape {
            Shape::Sphere { center, radius } => intersect_sphere(center, radius, ray),
            Shape::Plane { point, normal } => intersect_plane(point, normal, ray),
        }
    }

    /// Surface normal at a point on the entity.
    ///
    /// Plane normals are returned as stored, without flipping toward the
    /// incoming ray.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        match self.shape {
            Shape::Sphere { center, .. } => (point - center).normalize(),
            Shape::Plane { normal, .. } => normal,
        }
    }
}

fn intersect_sphere(center: Vec3, radius: f32, ray: &Ray) -> Option<f32> {
    if radius <= 0.0 {
        return None;
    }

    let oc = center - ray.origin;
    let a = ray.direction.length_squared();
    if a == 0.0 {
        return None;
    }
    let h = ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Smallest root in front of the origin
    let near = (h - sqrtd) / a;
    if near > 0.0 {
        return Some(near);
    }
    let far = (h + sqrtd) / a;
    if far > 0.0 {
        return Some(far);
    }

    None
}

fn intersect_plane(point: Vec3, normal: Vec3, ray: &Ray) -> Option<f32> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < PLANE_PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin).dot(normal) / denom;
    if t > 0.0 {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey_sphere(center: Vec3, radius: f32) -> Entity {
        Entity::sphere(center, radius, 0.5, Vec3::splat(0.5))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert!((t - 0.5).abs() < 0.001); // Should hit at t=0.5
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_uses_far_root() {
        let sphere = grey_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray).expect("ray from inside should hit");
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_sphere_is_a_miss() {
        // Ray passes exactly through the centre of a zero-radius sphere
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -3.0), 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());

        // Zero-length direction
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_hit() {
        let plane = Entity::plane(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, 0.18, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);

        let t = plane.intersect(&ray).expect("ray should hit the floor");
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_hit_from_either_side() {
        // Normal faces away from the ray, still a hit
        let plane = Entity::plane(Vec3::new(0.0, 0.0, -4.0), Vec3::NEG_Z, 0.18, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(plane.intersect(&ray), Some(4.0));
    }

    #[test]
    fn test_plane_parallel_is_a_miss() {
        let plane = Entity::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 0.18, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin() {
        let plane = Entity::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 0.18, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_surface_normals() {
        let sphere = grey_sphere(Vec3::new(1.0, 0.0, 0.0), 2.0);
        let n = sphere.surface_normal(Vec3::new(1.0, 2.0, 0.0));
        assert!((n - Vec3::Y).length() < 1e-6);

        // Plane normal is stored normalized and returned as-is
        let plane = Entity::plane(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), 0.18, Vec3::ONE);
        assert!((plane.surface_normal(Vec3::new(5.0, 0.0, -7.0)) - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_entity_json_shape_tag() {
        let json = r#"{
            "shape": "sphere", "center": [0, 0, -5], "radius": 1,
            "albedo": 0.18, "color": [1, 0, 0]
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();

        assert_eq!(entity.shape, Shape::Sphere { center: Vec3::new(0.0, 0.0, -5.0), radius: 1.0 });
        assert_eq!(entity.albedo, 0.18);
        assert_eq!(entity.color, Vec3::X);
    }
}
