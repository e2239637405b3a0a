//! Reference image loading and top-down PNG previews of a run

use crate::algorithm::arena::PlacementRecord;
use crate::io::error::{Result, ScatterError};
use crate::math::CoordinateTransform;
use crate::spatial::{Footprint, ReferenceImage};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Load a reference image from disk as 8-bit RGB
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has a zero dimension
pub fn load_reference_image(path: &Path) -> Result<ReferenceImage> {
    let img = image::open(path).map_err(|e| ScatterError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    ReferenceImage::from_rgb_image(&img.to_rgb8())
}

/// Paint one marker's footprint onto `canvas`
///
/// Footprints too small to cover a cell are drawn as their center pixel.
/// Cells outside the canvas are clipped.
pub fn paint_marker(
    canvas: &mut RgbaImage,
    record: &PlacementRecord,
    transform: &CoordinateTransform,
) {
    let Some(center) = transform.image_cell(record.position) else {
        return;
    };
    let color = Rgba(record.color.to_rgba8());
    let footprint = Footprint::new(center, record.scale);

    let Some(([x_min, x_max], [y_min, y_max])) = footprint.extent() else {
        put_pixel_clipped(canvas, center.x, center.y, color);
        return;
    };

    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for y in y_min.max(0)..=y_max.min(height - 1) {
        for x in x_min.max(0)..=x_max.min(width - 1) {
            if let Some(pixel) = canvas.get_pixel_mut_checked(x as u32, y as u32) {
                *pixel = color;
            }
        }
    }
}

/// Set a pixel if `(x, y)` lies on the canvas
pub fn put_pixel_clipped(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
        *pixel = color;
    }
}

/// Render active markers over a transparent background of the image's size
pub fn render_preview(
    records: &[PlacementRecord],
    transform: &CoordinateTransform,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for record in records.iter().filter(|record| record.active) {
        paint_marker(&mut canvas, record, transform);
    }
    canvas
}

/// Save a rendered preview, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_preview(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScatterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| ScatterError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
