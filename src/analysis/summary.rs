//! Aggregate statistics over a finished run

use crate::algorithm::arena::PlacementRecord;
use crate::io::visualization::path_segments;
use crate::spatial::OccupancyGrid;
use std::fmt;

/// Counts and scale statistics for one run's records
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Number of records (steps) in the run
    pub total: usize,
    /// Records whose footprint was reserved
    pub accepted: usize,
    /// Records rejected for overlap
    pub rejected: usize,
    /// Mean scale over accepted records, zero when none were accepted
    pub mean_scale: f32,
    /// Largest scale among accepted records
    pub max_scale: f32,
    /// Fraction of occupancy cells marked during the run
    pub occupied_fraction: f32,
    /// Total world-space length of the debug path
    pub path_length: f32,
}

impl RunSummary {
    /// Summarize `records` and the occupancy left behind by the same run
    pub fn from_records(records: &[PlacementRecord], occupancy: &OccupancyGrid) -> Self {
        let (accepted, scale_sum, max_scale) = records
            .iter()
            .filter(|record| record.active)
            .fold((0_usize, 0.0_f32, 0.0_f32), |(count, sum, max), record| {
                (count + 1, sum + record.scale, max.max(record.scale))
            });

        let mean_scale = if accepted == 0 {
            0.0
        } else {
            scale_sum / accepted as f32
        };

        let cell_count = occupancy.width() * occupancy.height();
        let occupied_fraction = if cell_count == 0 {
            0.0
        } else {
            occupancy.occupied_count() as f32 / cell_count as f32
        };

        let path_length = path_segments(records)
            .iter()
            .map(|[from, to]| from.distance(*to))
            .sum();

        Self {
            total: records.len(),
            accepted,
            rejected: records.len() - accepted,
            mean_scale,
            max_scale,
            occupied_fraction,
            path_length,
        }
    }

    /// Fraction of steps that produced a visible marker
    pub fn acceptance_rate(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.accepted as f32 / self.total as f32
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} markers placed ({} rejected), mean scale {:.3}, max scale {:.3}, {:.1}% occupied, path length {:.1}",
            self.accepted,
            self.total,
            self.rejected,
            self.mean_scale,
            self.max_scale,
            self.occupied_fraction * 100.0,
            self.path_length
        )
    }
}
