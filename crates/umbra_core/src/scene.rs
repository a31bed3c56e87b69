//! Scene description types for umbra.
//!
//! A scene is an immutable snapshot for one render pass: output resolution,
//! pinhole field of view, a single directional light and an ordered list of
//! entities. Entity order matters because nearest-hit ties resolve to the
//! lower index.

use serde::{Deserialize, Serialize};
use umbra_math::{Ray, Vec3};

use crate::entity::{Entity, Shape};
use crate::error::{SceneError, SceneResult};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 90.0;

fn default_fov() -> f32 {
    DEFAULT_FOV
}

fn default_light_color() -> Vec3 {
    Vec3::ONE
}

/// A directional light infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Direction the light travels (from the light toward the scene)
    pub direction: Vec3,

    /// Scalar intensity
    pub intensity: f32,

    /// Light color (RGB, defaults to white)
    #[serde(default = "default_light_color")]
    pub color: Vec3,
}

impl Light {
    /// Create a new directional light.
    pub fn new(direction: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            direction,
            intensity,
            color,
        }
    }

    /// Unit vector pointing from a surface toward the light.
    #[inline]
    pub fn direction_to_light(&self) -> Vec3 {
        -self.direction.normalize()
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            intensity: 1.0,
            color: Vec3::ONE,
        }
    }
}

/// A complete scene ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Vertical field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f32,

    /// The single directional light
    pub light: Light,

    /// Entities in tie-break order
    pub entities: Vec<Entity>,
}

impl Scene {
    /// Create an empty scene with the default field of view.
    pub fn new(width: u32, height: u32, light: Light) -> Self {
        Self {
            width,
            height,
            fov: DEFAULT_FOV,
            light,
            entities: Vec::new(),
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Add an entity and return its index.
    pub fn add_entity(&mut self, entity: Entity) -> usize {
        let index = self.entities.len();
        self.entities.push(entity);
        index
    }

    /// Get an entity by index.
    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Get entity count.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Total number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Primary ray through pixel `(x, y)`.
    #[inline]
    pub fn prime_ray(&self, x: u32, y: u32) -> Ray {
        Ray::create_prime(x, y, self.width, self.height, self.fov)
    }

    /// Check the preconditions the renderer relies on.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidFov(self.fov));
        }

        if self.entities.is_empty() {
            return Err(SceneError::NoEntities);
        }

        if !(self.light.direction.length_squared() > 0.0) {
            return Err(SceneError::DegenerateLightDirection);
        }

        for (index, entity) in self.entities.iter().enumerate() {
            if !(0.0..=1.0).contains(&entity.albedo) {
                return Err(SceneError::InvalidAlbedo {
                    index,
                    albedo: entity.albedo,
                });
            }

            match entity.shape {
                Shape::Sphere { radius, .. } => {
                    // Zero radius is allowed and never intersects
                    if !radius.is_finite() || radius < 0.0 {
                        return Err(SceneError::InvalidRadius { index, radius });
                    }
                }
                Shape::Plane { normal, .. } => {
                    if !(normal.length_squared() > 0.0) || !normal.is_finite() {
                        return Err(SceneError::DegenerateNormal { index });
                    }
                }
            }
        }

        Ok(())
    }

    /// Normalize every plane normal in place.
    pub fn normalize_plane_normals(&mut self) {
        for entity in &mut self.entities {
            if let Shape::Plane { normal, .. } = &mut entity.shape {
                *normal = normal.normalize();
            }
        }
    }
}
