//! Fixed-capacity record of recently accepted placements

use std::collections::VecDeque;

/// Most-recent-first queue of accepted marker indices
///
/// Holds at most `capacity` entries; pushing onto a full history evicts the
/// oldest acceptance.
#[derive(Clone, Debug)]
pub struct PlacementHistory {
    indices: VecDeque<usize>,
    capacity: usize,
}

impl PlacementHistory {
    /// Create an empty history holding up to `capacity` indices
    pub fn new(capacity: usize) -> Self {
        Self {
            indices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained indices
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest entries if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.indices.truncate(capacity);
    }

    /// Number of retained indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no index is retained
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether the history holds `capacity` indices
    ///
    /// A zero-capacity history is always full.
    pub fn is_full(&self) -> bool {
        self.indices.len() >= self.capacity
    }

    /// Record an accepted index as the most recent one
    pub fn push(&mut self, index: usize) {
        if self.capacity == 0 {
            return;
        }
        self.indices.push_front(index);
        self.indices.truncate(self.capacity);
    }

    /// Forget every index, keeping the allocation
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Retained indices, most recent first
    pub fn iter(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.indices.iter().copied()
    }
}
