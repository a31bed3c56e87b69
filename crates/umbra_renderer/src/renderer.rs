//! Per-pixel ray casting kernel and its parallel driver.
//!
//! Each pixel index is an independent unit of work: build the primary ray,
//! find the nearest hit, shade it, write one color. The driver splits the
//! index space into work units and runs them on rayon.

use std::time::Instant;

use rayon::prelude::*;
use umbra_core::Scene;
use umbra_math::Vec3;

use crate::error::{RenderError, RenderResult};
use crate::intersection::trace;
use crate::output::ImageBuffer;
use crate::shading::shade;
use crate::work::{
    generate_work_units, render_work_unit, scatter_strided, Partition, WorkResult, WorkUnit,
};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Default offset along the surface normal for shadow ray origins.
pub const DEFAULT_SHADOW_BIAS: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Shadow ray origin offset along the surface normal
    pub shadow_bias: f32,
    /// Clamp the Lambert cosine at zero instead of allowing negative light
    pub clamp_negative_light: bool,
    /// Color written when a primary ray hits nothing
    pub background: Color,
    /// Number of worker threads, `None` for rayon's global pool
    pub threads: Option<usize>,
    /// How pixel indices are split across work units
    pub partition: Partition,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shadow_bias: DEFAULT_SHADOW_BIAS,
            clamp_negative_light: false,
            background: Color::ZERO,
            threads: None,
            partition: Partition::Contiguous,
        }
    }
}

/// Map a linear pixel index to `(x, y)` in row-major order.
#[inline]
pub fn pixel_coords(index: usize, width: u32) -> (u32, u32) {
    let width = width as usize;
    ((index % width) as u32, (index / width) as u32)
}

/// Render the pixel at linear index `index`.
pub fn render_pixel(scene: &Scene, index: usize, config: &RenderConfig) -> Color {
    let (x, y) = pixel_coords(index, scene.width);
    let ray = scene.prime_ray(x, y);

    let intersection = trace(&ray, &scene.entities);
    if intersection.is_hit() {
        shade(scene, &ray, &intersection, config)
    } else {
        config.background
    }
}

/// Render the scene into a caller-provided buffer.
///
/// The buffer must hold exactly `width * height` colors. Every slot is
/// written once and the call returns only after all pixels are done.
pub fn render_into(scene: &Scene, config: &RenderConfig, buffer: &mut [Color]) -> RenderResult<()> {
    scene.validate()?;

    let expected = scene.pixel_count();
    if buffer.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: buffer.len(),
        });
    }

    let start = Instant::now();

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| dispatch(scene, config, buffer));
        }
        None => dispatch(scene, config, buffer),
    }

    log::info!("Rendered {}x{} in {:?}", scene.width, scene.height, start.elapsed());
    Ok(())
}

/// Render the scene to a newly allocated image.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let mut image = ImageBuffer::new(scene.width, scene.height);
    render_into(scene, config, &mut image.pixels)?;
    Ok(image)
}

/// Run all work units on the current rayon pool.
fn dispatch(scene: &Scene, config: &RenderConfig, buffer: &mut [Color]) {
    let parallelism = rayon::current_num_threads();
    let units = generate_work_units(buffer.len(), parallelism, config.partition);

    log::info!(
        "Rendering {}x{} with {} entities: {} {:?} work units on {} threads",
        scene.width,
        scene.height,
        scene.entity_count(),
        units.len(),
        config.partition,
        parallelism
    );

    match config.partition {
        Partition::Contiguous => {
            // Units line up with equal-sized chunks, so each writes its own slice
            let chunk = units.first().map_or(1, |unit| unit.count);
            buffer
                .par_chunks_mut(chunk)
                .zip(units.par_iter())
                .for_each(|(slice, unit)| render_contiguous(unit, slice, scene, config));
        }
        Partition::Strided => {
            let results: Vec<WorkResult> = units
                .par_iter()
                .map(|unit| {
                    log::debug!("Work unit {}: {} pixels", unit.index, unit.pixel_count());
                    WorkResult::new(*unit, render_work_unit(unit, scene, config))
                })
                .collect();

            scatter_strided(&results, buffer);
        }
    }
}

fn render_contiguous(unit: &WorkUnit, slice: &mut [Color], scene: &Scene, config: &RenderConfig) {
    log::debug!("Work unit {}: {} pixels", unit.index, unit.pixel_count());
    for (slot, index) in slice.iter_mut().zip(unit.indices()) {
        *slot = render_pixel(scene, index, config);
    }
}
