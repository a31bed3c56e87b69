// Re-export glam for convenience
pub use glam::*;

// Umbra math types
mod ray;
pub use ray::Ray;
