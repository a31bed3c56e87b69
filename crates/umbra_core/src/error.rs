use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Scene contains no entities")]
    NoEntities,

    #[error("Entity {index}: albedo {albedo} is outside [0, 1]")]
    InvalidAlbedo { index: usize, albedo: f32 },

    #[error("Entity {index}: invalid sphere radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Entity {index}: plane normal has zero length")]
    DegenerateNormal { index: usize },

    #[error("Light direction has zero length")]
    DegenerateLightDirection,
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
