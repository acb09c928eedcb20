// Re-export glam for convenience
pub use glam::*;

// Lume math types
mod ray;
pub use ray::Ray;
