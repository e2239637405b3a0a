//! Footprint reservation over image space
//!
//! Every cell a marker's footprint touches is marked, whether or not the
//! placement as a whole is accepted. A rejected placement therefore keeps the
//! previously free part of its footprint reserved for the rest of the run.

use crate::spatial::sampler::clamp_cell;
use bitvec::prelude::*;
use glam::IVec2;

/// Square block of cells covered by a marker of a given scale
///
/// Spans `[-half_extent, half_extent)` on both axes around its center, so a
/// half extent of zero covers no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Center cell in image space
    pub center: IVec2,
    /// Half of the side length, `round(scale / 2)` with ties to even
    pub half_extent: i32,
}

impl Footprint {
    /// Footprint of a marker of `scale` centered on `center`
    ///
    /// Scales too large for an `i32` half extent saturate; NaN gives an empty
    /// footprint.
    pub fn new(center: IVec2, scale: f32) -> Self {
        let half = (scale / 2.0).round_ties_even();
        let half_extent = if half.is_nan() {
            0
        } else {
            num_traits::cast::<f32, i32>(half.clamp(0.0, i32::MAX as f32)).unwrap_or(i32::MAX)
        };
        Self {
            center,
            half_extent,
        }
    }

    /// Inclusive `[min, max]` cell range on the x and y axes, before clamping
    ///
    /// `None` for a footprint that covers no cells.
    pub fn extent(&self) -> Option<([i64; 2], [i64; 2])> {
        if self.half_extent <= 0 {
            return None;
        }
        let half = i64::from(self.half_extent);
        let span = |center: i32| [i64::from(center) - half, i64::from(center) + half - 1];
        Some((span(self.center.x), span(self.center.y)))
    }

    /// Cells covered, before clamping, in `j` outer / `k` inner order
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        let range = -self.half_extent..self.half_extent;
        range.clone().flat_map(move |j| {
            range
                .clone()
                .map(move |k| self.center + IVec2::new(j, k))
        })
    }
}

/// Boolean occupancy per image cell
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: BitVec,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create an all-free grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Mark every cell free without reallocating
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Test an image-space cell, clamped into the grid
    pub fn is_occupied(&self, cell: IVec2) -> bool {
        let index = self.index_of(cell);
        self.cells.get(index).as_deref() == Some(&true)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Test a footprint for overlap and mark all of its cells occupied
    ///
    /// Returns `true` when the footprint was entirely free. Marking is never
    /// rolled back, even when an overlap is found. Cells clamped onto the same
    /// edge cell see each other's mark, so a non-empty footprint reaching past
    /// the grid always overlaps itself.
    pub fn reserve(&mut self, footprint: &Footprint) -> bool {
        let Some((x_span, y_span)) = footprint.extent() else {
            return true;
        };
        if self.width == 0 || self.height == 0 {
            return true;
        }

        let (x_range, x_folded) = clamp_span(x_span, self.width);
        let (y_range, y_folded) = clamp_span(y_span, self.height);
        let mut overlap = x_folded || y_folded;

        for y in y_range {
            for x in x_range.clone() {
                if let Some(mut occupied) = self.cells.get_mut(y * self.width + x) {
                    if *occupied {
                        overlap = true;
                    }
                    *occupied = true;
                }
            }
        }
        !overlap
    }

    fn index_of(&self, cell: IVec2) -> usize {
        let [x, y] = clamp_cell(cell, self.width, self.height);
        y * self.width + x
    }
}

// Clamped inclusive range on one axis, and whether any cell was folded onto an edge
fn clamp_span([min, max]: [i64; 2], len: usize) -> (std::ops::RangeInclusive<usize>, bool) {
    let last = len.saturating_sub(1) as i64;
    let folded = min < 0 || max > last;
    let lo = num_traits::clamp(min, 0, last) as usize;
    let hi = num_traits::clamp(max, 0, last) as usize;
    (lo..=hi, folded)
}
