//! Marker scale selection
//!
//! Scales either follow a fixed five-step ramp or are balanced against the
//! most recent accepted markers: the new marker gets the scale whose lever arm
//! around the local center matches the combined scale-weighted displacement of
//! its neighbors.

use crate::algorithm::arena::MarkerArena;
use crate::algorithm::history::PlacementHistory;
use crate::algorithm::random::WalkRng;
use crate::io::configuration::{BALANCE_JITTER_FRACTION, CYCLIC_SCALE_FACTOR, SCALE_CYCLE_LENGTH};
use glam::Vec3;

/// Repeating scale ramp for step `step`
pub fn cyclic_scale(step: usize, step_size: u32) -> f32 {
    CYCLIC_SCALE_FACTOR * step_size as f32 * ((step % SCALE_CYCLE_LENGTH) + 1) as f32
}

/// Moment-balanced scale for a marker at `next_position`
///
/// `neighbors` yields `(position, scale)` for each recent marker. The center is
/// the mean of the neighbor positions and `next_position`. Returns `None` when
/// `next_position` sits on the center or the result is not a positive finite
/// number.
pub fn balanced_scale<I>(next_position: Vec3, neighbors: I) -> Option<f32>
where
    I: Iterator<Item = (Vec3, f32)> + Clone,
{
    let (sum, count) = neighbors
        .clone()
        .fold((next_position, 1_usize), |(sum, count), (position, _)| {
            (sum + position, count + 1)
        });
    let center = sum / count as f32;

    let moment = neighbors.fold(Vec3::ZERO, |moment, (position, scale)| {
        moment + scale * (position - center)
    });
    let lever = next_position - center;

    let lever_sq = lever.length_squared();
    if lever_sq == 0.0 {
        return None;
    }

    let scale = (moment.length_squared() / lever_sq).sqrt();
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Chooses each step's marker scale
#[derive(Clone, Copy, Debug)]
pub struct BalanceCalculator {
    step_size: u32,
    cycle_scale: bool,
}

impl BalanceCalculator {
    /// Create a calculator; `cycle_scale` forces the ramp for every step
    pub const fn new(step_size: u32, cycle_scale: bool) -> Self {
        Self {
            step_size,
            cycle_scale,
        }
    }

    /// Scale for step `step` placed at `next_position`
    ///
    /// Uses the ramp until the history is full or when cycling is forced.
    /// Balanced scales get a jitter drawn from `[0, 0.2 * scale)`; a degenerate
    /// balance falls back to the ramp without drawing.
    pub fn scale_for(
        &self,
        step: usize,
        next_position: Vec3,
        history: &PlacementHistory,
        arena: &MarkerArena,
        rng: &mut WalkRng,
    ) -> f32 {
        if self.cycle_scale || !history.is_full() {
            return cyclic_scale(step, self.step_size);
        }

        let neighbors = history
            .iter()
            .filter_map(|index| arena.get(index))
            .map(|record| (record.position, record.scale));

        match balanced_scale(next_position, neighbors) {
            Some(scale) => scale + rng.uniform(BALANCE_JITTER_FRACTION * scale),
            None => cyclic_scale(step, self.step_size),
        }
    }
}
