//! Work partitioning for the per-pixel kernel.
//!
//! Splits the linear pixel index space into independent work units that
//! rayon renders in parallel. Every pixel index belongs to exactly one unit,
//! so no two units ever write the same output slot.

use rayon::prelude::*;
use umbra_core::Scene;

use crate::renderer::{render_pixel, Color, RenderConfig};

/// How pixel indices are assigned to work units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partition {
    /// Each unit owns one contiguous index range.
    #[default]
    Contiguous,
    /// Unit `k` of `n` owns indices `k, k + n, k + 2n, ...`.
    ///
    /// Strided slots can't be handed out as disjoint slices, so each unit
    /// renders into its own vector. A parallel pass over `n`-wide rows of
    /// the buffer then copies the results in, see [`scatter_strided`]. The
    /// extra copy costs one color per pixel.
    Strided,
}

/// A set of pixel indices rendered by one execution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    /// First pixel index
    pub start: usize,
    /// Number of pixels in this unit
    pub count: usize,
    /// Distance between consecutive pixel indices
    pub stride: usize,
    /// Index of this unit in dispatch order
    pub index: usize,
}

impl WorkUnit {
    /// Create a new work unit.
    pub fn new(start: usize, count: usize, stride: usize, index: usize) -> Self {
        Self { start, count, stride, index }
    }

    /// Get the total number of pixels in this unit.
    pub fn pixel_count(&self) -> usize {
        self.count
    }

    /// Pixel indices owned by this unit, in increasing order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let WorkUnit { start, count, stride, .. } = *self;
        (0..count).map(move |i| start + i * stride)
    }
}

/// Split `total` pixel indices across at most `parallelism` work units.
///
/// Contiguous units all hold `ceil(total / parallelism)` pixels except the
/// last, which may be shorter. Strided units differ in size by at most one.
pub fn generate_work_units(
    total: usize,
    parallelism: usize,
    partition: Partition,
) -> Vec<WorkUnit> {
    if total == 0 {
        return Vec::new();
    }
    let parallelism = parallelism.clamp(1, total);

    match partition {
        Partition::Contiguous => {
            let chunk = total.div_ceil(parallelism);
            (0..total)
                .step_by(chunk)
                .enumerate()
                .map(|(index, start)| WorkUnit::new(start, chunk.min(total - start), 1, index))
                .collect()
        }
        Partition::Strided => (0..parallelism)
            .map(|k| WorkUnit::new(k, (total - k).div_ceil(parallelism), parallelism, k))
            .collect(),
    }
}

/// Render every pixel of a work unit.
///
/// Returns colors in the unit's index order.
pub fn render_work_unit(unit: &WorkUnit, scene: &Scene, config: &RenderConfig) -> Vec<Color> {
    unit.indices()
        .map(|index| render_pixel(scene, index, config))
        .collect()
}

/// Result of rendering a work unit.
#[derive(Debug, Clone)]
pub struct WorkResult {
    /// The unit that was rendered
    pub unit: WorkUnit,
    /// Pixel colors in the unit's index order
    pub pixels: Vec<Color>,
}

impl WorkResult {
    /// Create a new work result.
    pub fn new(unit: WorkUnit, pixels: Vec<Color>) -> Self {
        Self { unit, pixels }
    }
}

/// Copy strided work results into the full-image buffer.
///
/// `results` must be the units of one `Partition::Strided` split, in unit
/// order. Row `r` of the buffer (indices `r * n .. r * n + n`) holds pixel
/// `r` of every unit, so rows are filled in parallel without overlap.
pub fn scatter_strided(results: &[WorkResult], buffer: &mut [Color]) {
    let stride = results.len().max(1);
    buffer
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, slots)| {
            for (slot, result) in slots.iter_mut().zip(results) {
                *slot = result.pixels[row];
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(units: &[WorkUnit], total: usize) {
        let mut seen = vec![0u32; total];
        for unit in units {
            for index in unit.indices() {
                seen[index] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "every index must be owned exactly once");

        let total_pixels: usize = units.iter().map(|u| u.pixel_count()).sum();
        assert_eq!(total_pixels, total);
    }

    #[test]
    fn test_contiguous_exact_fit() {
        let units = generate_work_units(128, 4, Partition::Contiguous);
        assert_eq!(units.len(), 4);
        assert!(units.iter().all(|u| u.count == 32 && u.stride == 1));
        assert_eq!(units[3].start, 96);
        assert_exact_cover(&units, 128);
    }

    #[test]
    fn test_contiguous_partial_fit() {
        let units = generate_work_units(10, 4, Partition::Contiguous);
        // ceil(10 / 4) = 3 -> 3, 3, 3, 1
        assert_eq!(units.len(), 4);
        assert_eq!(units[3].count, 1);
        assert_exact_cover(&units, 10);
    }

    #[test]
    fn test_strided_assignment() {
        let units = generate_work_units(10, 3, Partition::Strided);
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].indices().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(units[1].indices().collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(units[2].indices().collect::<Vec<_>>(), vec![2, 5, 8]);
        assert_exact_cover(&units, 10);
    }

    #[test]
    fn test_more_units_than_pixels() {
        for partition in [Partition::Contiguous, Partition::Strided] {
            let units = generate_work_units(3, 16, partition);
            assert_eq!(units.len(), 3);
            assert_exact_cover(&units, 3);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(generate_work_units(0, 8, Partition::Contiguous).is_empty());

        // Zero parallelism still produces one unit
        let units = generate_work_units(5, 0, Partition::Strided);
        assert_eq!(units.len(), 1);
        assert_exact_cover(&units, 5);
    }

    #[test]
    fn test_scatter_strided() {
        let units = generate_work_units(7, 3, Partition::Strided);
        let results: Vec<WorkResult> = units
            .iter()
            .map(|unit| {
                let pixels = unit.indices().map(|i| Color::splat(i as f32)).collect();
                WorkResult::new(*unit, pixels)
            })
            .collect();
        let mut buffer = vec![Color::NEG_ONE; 7];

        scatter_strided(&results, &mut buffer);
        for (index, color) in buffer.iter().enumerate() {
            assert_eq!(*color, Color::splat(index as f32));
        }
    }
}
