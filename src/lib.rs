//! Image-guided greedy walk that scatters scaled, non-overlapping markers
//!
//! Starting from a world position, the walk repeatedly steps to the neighbor
//! whose color best matches the current cell while favoring its previous
//! direction. Every step proposes a marker whose scale either cycles or
//! balances recent markers, and markers whose footprint overlaps earlier ones
//! are rejected.

#![forbid(unsafe_code)]

/// Walk engine, candidate selection, scaling and placement history
pub mod algorithm;
/// Statistics over finished runs
pub mod analysis;
/// Input/output, configuration, host triggers and error handling
pub mod io;
/// Coordinate transform and color math
pub mod math;
/// Reference image sampling and occupancy tracking
pub mod spatial;

pub use algorithm::arena::PlacementRecord;
pub use algorithm::executor::{ScatterConfig, WalkEngine};
pub use io::error::{Result, ScatterError};
