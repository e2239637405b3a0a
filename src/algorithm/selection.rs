//! Neighbor scoring for the greedy walk
//!
//! Each step looks at eight candidates one step away in every direction,
//! nudged by a non-negative jitter. A candidate scores lower when its color is
//! close to the current cell's color and when it continues the previous
//! direction of travel.

use crate::algorithm::random::WalkRng;
use crate::math::Color;
use crate::spatial::ReferenceImage;
use glam::IVec2;

/// Neighbor directions in evaluation order (`x` outer, `y` inner)
pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
];

/// Walk parameters that affect candidate scoring
#[derive(Clone, Copy, Debug)]
pub struct SelectionParams {
    /// Distance between the current cell and each candidate, before jitter
    pub step_size: i32,
    /// Weight of directional continuity against color similarity
    pub flow_amount: f32,
    /// Exclusive upper bound of the per-axis candidate jitter
    pub randomness: f32,
}

/// A scored candidate cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Image-space cell, not clamped
    pub cell: IVec2,
    /// Lower is better
    pub score: f32,
}

/// Displacement from `from` to `to`, saturating at the `i32` range
pub const fn direction_between(from: IVec2, to: IVec2) -> IVec2 {
    IVec2::new(to.x.saturating_sub(from.x), to.y.saturating_sub(from.y))
}

/// Score for moving by `offset` to a cell of `candidate_color`
pub fn flow_score(
    current_color: Color,
    candidate_color: Color,
    offset: IVec2,
    last_direction: IVec2,
    params: &SelectionParams,
) -> f32 {
    let step_sq = (params.step_size as f32) * (params.step_size as f32);
    let alignment = offset.as_vec2().dot(last_direction.as_vec2()) / step_sq;
    current_color.distance_squared(candidate_color) - params.flow_amount * alignment
}

/// Pick the lowest-scoring neighbor of `current`
///
/// Draws two jitter values per candidate in evaluation order. Ties keep the
/// earlier candidate.
pub fn select_next_cell(
    image: &ReferenceImage,
    current: IVec2,
    current_color: Color,
    last_direction: IVec2,
    params: &SelectionParams,
    rng: &mut WalkRng,
) -> Candidate {
    let mut best: Option<Candidate> = None;

    for offset in NEIGHBOR_OFFSETS {
        let jitter = rng.jitter(params.randomness);
        let cell = IVec2::new(
            current
                .x
                .saturating_add(offset.x.saturating_mul(params.step_size))
                .saturating_add(jitter.x),
            current
                .y
                .saturating_add(offset.y.saturating_mul(params.step_size))
                .saturating_add(jitter.y),
        );
        let score = flow_score(
            current_color,
            image.get_color(cell),
            direction_between(current, cell),
            last_direction,
            params,
        );

        if best.is_none_or(|b| score < b.score) {
            best = Some(Candidate { cell, score });
        }
    }

    best.unwrap_or(Candidate {
        cell: current,
        score: 0.0,
    })
}
