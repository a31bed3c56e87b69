//! Umbra Core - Scene description for the umbra ray caster.
//!
//! This crate provides:
//!
//! - **Entity model**: `Entity` and the closed `Shape` set with intersection
//!   and surface normal geometry
//! - **Scene types**: `Scene` and its directional `Light`
//! - **Loading**: JSON scene files with validation
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::load_scene;
//!
//! let scene = load_scene("scenes/demo.json")?;
//! println!("{}x{} with {} entities", scene.width, scene.height, scene.entity_count());
//! ```

pub mod entity;
pub mod error;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use entity::{Entity, Shape, PLANE_PARALLEL_EPSILON};
pub use error::{SceneError, SceneResult};
pub use loader::{load_scene, load_scene_from_str};
pub use scene::{Light, Scene, DEFAULT_FOV};
