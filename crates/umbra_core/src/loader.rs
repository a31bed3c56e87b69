//! Scene loading from JSON files.
//!
//! Loaded scenes are validated and their plane normals normalized, so the
//! renderer never sees input that violates its preconditions.

use std::fs;
use std::path::Path;

use crate::error::SceneResult;
use crate::scene::Scene;

/// Light directions further than this from unit length get a warning.
const LIGHT_NORMALIZATION_TOLERANCE: f32 = 1e-3;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Load and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<Scene> {
    let mut scene: Scene = serde_json::from_str(json)?;
    scene.validate()?;
    scene.normalize_plane_normals();

    let light_length = scene.light.direction.length();
    if (light_length - 1.0).abs() > LIGHT_NORMALIZATION_TOLERANCE {
        log::warn!(
            "Light direction has length {:.3}; it will be normalized for shading",
            light_length
        );
    }

    log::debug!(
        "Loaded scene {}x{} (fov {:.1}) with {} entities",
        scene.width,
        scene.height,
        scene.fov,
        scene.entity_count()
    );

    Ok(scene)
}
