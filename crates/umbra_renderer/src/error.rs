use thiserror::Error;
use umbra_core::SceneError;

/// Errors raised at the render boundary.
///
/// The per-pixel kernel itself cannot fail. Everything here is detected
/// before dispatch or while writing the finished image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Output buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
