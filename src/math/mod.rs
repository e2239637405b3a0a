//! Coordinate and color math shared by the walk

/// Normalized RGB colors and color distance
pub mod color;
/// World-space and image-space coordinate conversion
pub mod transform;

pub use color::Color;
pub use transform::CoordinateTransform;
