//! Reference image storage with clamp-to-edge sampling

use crate::io::error::{Result, ScatterError};
use crate::math::Color;
use glam::IVec2;
use ndarray::Array2;

/// Clamp an image-space cell into `[0, width) x [0, height)`
///
/// Returns `[column, row]`. Dimensions of zero are treated as one so the
/// result is always a valid index for a non-empty grid.
pub fn clamp_cell(cell: IVec2, width: usize, height: usize) -> [usize; 2] {
    let max_x = width.saturating_sub(1) as i64;
    let max_y = height.saturating_sub(1) as i64;
    let x = num_traits::clamp(i64::from(cell.x), 0, max_x);
    let y = num_traits::clamp(i64::from(cell.y), 0, max_y);
    [x as usize, y as usize]
}

/// Immutable grid of normalized RGB samples the walk is guided by
///
/// Stored row-major as (row, column) so `y` selects the row.
#[derive(Clone, Debug)]
pub struct ReferenceImage {
    pixels: Array2<Color>,
}

impl ReferenceImage {
    /// Build an image from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the pixel count
    /// doesn't match `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidSourceData {
                reason: format!("Reference image must be at least 1x1, got {width}x{height}"),
            });
        }
        let pixel_count = pixels.len();
        let pixels = Array2::from_shape_vec((height, width), pixels).map_err(|e| {
            ScatterError::InvalidSourceData {
                reason: format!(
                    "Expected {} pixels for a {width}x{height} image, got {pixel_count}: {e}",
                    width * height
                ),
            }
        })?;
        Ok(Self { pixels })
    }

    /// Build an image by evaluating `color_at(x, y)` for every cell
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut color_at: impl FnMut(usize, usize) -> Color,
    ) -> Result<Self> {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(color_at(x, y));
            }
        }
        Self::from_pixels(width, height, pixels)
    }

    /// Build a single-color image
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn uniform(width: usize, height: usize, color: Color) -> Result<Self> {
        Self::from_pixels(width, height, vec![color; width * height])
    }

    /// Convert a decoded 8-bit RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension.
    pub fn from_rgb_image(image: &image::RgbImage) -> Result<Self> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let pixels = image.pixels().map(|pixel| Color::from_rgb8(pixel.0)).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Image width in cells
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Image height in cells
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Color at an image-space cell, clamping out-of-range coordinates to the edge
    pub fn get_color(&self, cell: IVec2) -> Color {
        let [x, y] = clamp_cell(cell, self.width(), self.height());
        self.pixels.get((y, x)).copied().unwrap_or_default()
    }
}
