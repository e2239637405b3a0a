//! Conversion between world-space positions and image-space cells
//!
//! The image is centered on the world origin and mirrored on both axes: image
//! `x` runs against world `x`, image `y` runs against world `z`. World elevation
//! is not part of image space and is reintroduced as a fixed value.

use glam::{IVec2, Vec2, Vec3};

/// Stateless mapping between world space and the reference image's pixel grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    half_width: f32,
    half_height: f32,
    elevation: f32,
}

impl CoordinateTransform {
    /// Create a transform for an image of the given size
    pub fn new(width: u32, height: u32, elevation: f32) -> Self {
        Self {
            half_width: width as f32 / 2.0,
            half_height: height as f32 / 2.0,
            elevation,
        }
    }

    /// Elevation given to every world position produced by [`Self::image_to_world`]
    pub const fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Project a world position into continuous image coordinates
    pub fn world_to_image(&self, world: Vec3) -> Vec2 {
        Vec2::new(-world.x + self.half_width, -world.z + self.half_height)
    }

    /// Lift an image cell back into world space at the fixed elevation
    pub fn image_to_world(&self, cell: IVec2) -> Vec3 {
        Vec3::new(
            -(cell.x as f32) + self.half_width,
            self.elevation,
            -(cell.y as f32) + self.half_height,
        )
    }

    /// Integer image cell containing a world position
    ///
    /// Returns `None` when the projected coordinates are not representable
    /// as `i32` (non-finite or far outside any image).
    pub fn image_cell(&self, world: Vec3) -> Option<IVec2> {
        let uv = self.world_to_image(world);
        let x = num_traits::cast::<f32, i32>(uv.x.floor())?;
        let y = num_traits::cast::<f32, i32>(uv.y.floor())?;
        Some(IVec2::new(x, y))
    }
}
