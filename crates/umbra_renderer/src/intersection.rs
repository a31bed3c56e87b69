//! Nearest-hit search over the scene's entities.

use rayon::prelude::*;
use umbra_core::Entity;
use umbra_math::Ray;

/// Result of tracing one ray through the scene.
///
/// `distance` is only meaningful when `entity_index` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Parametric distance along the ray
    pub distance: f32,
    /// Index of the entity that was hit, `None` for a miss
    pub entity_index: Option<usize>,
}

impl Intersection {
    /// No entity was hit.
    pub const MISS: Intersection = Intersection {
        distance: f32::MAX,
        entity_index: None,
    };

    /// A hit on entity `index` at `distance`.
    #[inline]
    pub fn hit(distance: f32, index: usize) -> Self {
        Self {
            distance,
            entity_index: Some(index),
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.entity_index.is_some()
    }

    /// The nearer of two intersections.
    ///
    /// Orders by distance, then by entity index, with misses last. This is a
    /// total order, so reducing with it in any grouping gives the same answer
    /// as a sequential scan that only replaces on strictly smaller distance.
    #[inline]
    pub fn nearest(self, other: Intersection) -> Intersection {
        match (self.entity_index, other.entity_index) {
            (None, _) => other,
            (_, None) => self,
            (Some(a), Some(b)) => {
                if other.distance < self.distance || (other.distance == self.distance && b < a) {
                    other
                } else {
                    self
                }
            }
        }
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::MISS
    }
}

/// Trace a ray through all entities and return the nearest hit.
pub fn trace(ray: &Ray, entities: &[Entity]) -> Intersection {
    let mut nearest = Intersection::MISS;

    for (index, entity) in entities.iter().enumerate() {
        if let Some(distance) = entity.intersect(ray) {
            // Strict `<` keeps the first entity on equal distances
            if distance < nearest.distance {
                nearest = Intersection::hit(distance, index);
            }
        }
    }

    nearest
}

/// Trace a ray by scanning entities in parallel.
///
/// Returns exactly what [`trace`] returns for the same input, regardless of
/// how rayon splits the entity list.
pub fn trace_parallel(ray: &Ray, entities: &[Entity]) -> Intersection {
    entities
        .par_iter()
        .enumerate()
        .filter_map(|(index, entity)| {
            entity
                .intersect(ray)
                .filter(|distance| *distance < Intersection::MISS.distance)
                .map(|distance| Intersection::hit(distance, index))
        })
        .reduce(|| Intersection::MISS, Intersection::nearest)
}
