//! Debug path overlay and placement-order GIF animation

use crate::algorithm::arena::PlacementRecord;
use crate::io::configuration::{PATH_COLOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, ScatterError};
use crate::io::image::{paint_marker, put_pixel_clipped};
use crate::math::CoordinateTransform;
use glam::{IVec2, Vec3};
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

/// Segments joining consecutive active records, in step order
pub fn path_segments(records: &[PlacementRecord]) -> Vec<[Vec3; 2]> {
    let mut segments = Vec::new();
    let mut previous: Option<Vec3> = None;

    for record in records.iter().filter(|record| record.active) {
        if let Some(from) = previous {
            segments.push([from, record.position]);
        }
        previous = Some(record.position);
    }

    segments
}

/// Draw the debug path as one-pixel lines in image space
pub fn draw_path(
    canvas: &mut RgbaImage,
    records: &[PlacementRecord],
    transform: &CoordinateTransform,
) {
    let color = Rgba(PATH_COLOR);
    for [from, to] in path_segments(records) {
        let (Some(start), Some(end)) = (transform.image_cell(from), transform.image_cell(to))
        else {
            continue;
        };
        for cell in line_cells(start, end) {
            put_pixel_clipped(canvas, cell.x, cell.y, color);
        }
    }
}

// Bresenham, both endpoints included
fn line_cells(start: IVec2, end: IVec2) -> Vec<IVec2> {
    let dx = (i64::from(end.x) - i64::from(start.x)).abs();
    let dy = -(i64::from(end.y) - i64::from(start.y)).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };

    let mut cells = Vec::new();
    let (mut x, mut y) = (start.x, start.y);
    let mut err = dx + dy;

    loop {
        cells.push(IVec2::new(x, y));
        if x == end.x && y == end.y {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }

    cells
}

/// Frame-by-frame capture of markers in the order they were accepted
pub struct PlacementAnimation {
    placements: Vec<PlacementRecord>,
    transform: CoordinateTransform,
    dims: (u32, u32),
}

impl PlacementAnimation {
    /// Capture the active records of a finished run
    pub fn from_records(
        records: &[PlacementRecord],
        transform: CoordinateTransform,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            placements: records.iter().filter(|r| r.active).copied().collect(),
            transform,
            dims: (width, height),
        }
    }

    /// Number of captured placements
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured placements as a GIF with automatic frame skipping
    ///
    /// Frames faster than viewers can show are merged so the animation keeps
    /// its apparent speed. The final frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(ScatterError::InvalidSourceData {
                reason: "No accepted placements captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScatterError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| ScatterError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| ScatterError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let (width, height) = self.dims;
        let mut canvas = RgbaImage::new(width, height);
        let mut frames = vec![Self::frame(&canvas, delay_ms)];

        for (count, record) in self.placements.iter().enumerate() {
            paint_marker(&mut canvas, record, &self.transform);
            if (count + 1) % skip_factor == 0 {
                frames.push(Self::frame(&canvas, delay_ms));
            }
        }

        if self.placements.len() % skip_factor != 0 {
            frames.push(Self::frame(&canvas, delay_ms));
        }

        frames.push(Self::frame(&canvas, delay_ms * 25));
        frames
    }

    fn frame(canvas: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
