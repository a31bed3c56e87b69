use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Primary and shadow rays are built by the caller and never shared between
/// pixels. The direction is expected to be normalized by whoever builds it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create the primary ray for pixel `(x, y)` of a pinhole camera.
    ///
    /// The eye sits at the world origin looking down -Z with +Y up. `fov` is
    /// the vertical field of view in degrees and the horizontal extent is
    /// scaled by the aspect ratio. Rays pass through pixel centres and row 0
    /// is the top of the image.
    pub fn create_prime(x: u32, y: u32, width: u32, height: u32, fov: f32) -> Self {
        let fov_adjustment = (fov.to_radians() / 2.0).tan();
        let aspect_ratio = width as f32 / height as f32;

        let sensor_x = (((x as f32 + 0.5) / width as f32) * 2.0 - 1.0)
            * aspect_ratio
            * fov_adjustment;
        let sensor_y = (1.0 - ((y as f32 + 0.5) / height as f32) * 2.0) * fov_adjustment;

        Self {
            origin: Vec3::ZERO,
            direction: Vec3::new(sensor_x, sensor_y, -1.0).normalize(),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
