//! Pre-sized marker slots reused across runs

use crate::math::Color;
use glam::Vec3;

/// Outcome of one walk step for one marker slot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementRecord {
    /// Slot index, equal to the step that produced the record
    pub index: usize,
    /// World position of the anchor the walk reached
    pub position: Vec3,
    /// Marker scale requested for this step
    pub scale: f32,
    /// Reference color sampled at the cell the step started from
    pub color: Color,
    /// Whether the footprint was reserved without overlap
    pub active: bool,
}

/// Fixed set of `marker_count` record slots indexed by step
///
/// A run overwrites every slot in order; slots are only reallocated when the
/// marker count itself changes.
#[derive(Clone, Debug, Default)]
pub struct MarkerArena {
    records: Vec<PlacementRecord>,
}

impl MarkerArena {
    /// Allocate `count` inactive slots
    pub fn new(count: usize) -> Self {
        let mut arena = Self::default();
        arena.resize(count);
        arena
    }

    /// Grow or shrink to `count` slots, keeping existing records
    pub fn resize(&mut self, count: usize) {
        let start = self.records.len();
        self.records.truncate(count);
        self.records.extend((start..count).map(|index| PlacementRecord {
            index,
            ..PlacementRecord::default()
        }));
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the arena has no slots
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record in slot `index`
    pub fn get(&self, index: usize) -> Option<&PlacementRecord> {
        self.records.get(index)
    }

    /// Replace the record in its own slot; out-of-range records are ignored
    pub fn overwrite(&mut self, record: PlacementRecord) {
        if let Some(slot) = self.records.get_mut(record.index) {
            *slot = record;
        }
    }

    /// All slots in step order
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Active records in step order
    pub fn active(&self) -> impl Iterator<Item = &PlacementRecord> + '_ {
        self.records.iter().filter(|record| record.active)
    }
}
