//! Umbra Renderer - CPU ray casting kernel.
//!
//! One primary ray per pixel, brute-force nearest-hit search over every
//! entity, Lambertian shading with a single hard shadow ray toward one
//! directional light. Pixels are independent and rendered in parallel
//! with rayon.

mod error;
mod intersection;
mod output;
mod renderer;
mod shading;
mod work;

pub use error::{RenderError, RenderResult};
pub use intersection::{trace, trace_parallel, Intersection};
pub use output::{clamp_01, color_to_rgba, linear_to_gamma, ImageBuffer};
pub use renderer::{
    pixel_coords, render, render_into, render_pixel, Color, RenderConfig, DEFAULT_SHADOW_BIAS,
};
pub use shading::{light_power, shade};
pub use work::{
    generate_work_units, render_work_unit, scatter_strided, Partition, WorkResult, WorkUnit,
};

/// Re-export scene and math types used in the public API
pub use umbra_core::{Entity, Light, Scene, Shape};
pub use umbra_math::{Ray, Vec3};
