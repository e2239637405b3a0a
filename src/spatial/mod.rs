//! Image-space data structures
//!
//! This module contains:
//! - The reference image and its bounds-safe sampler
//! - The occupancy grid used to reject overlapping footprints

/// Footprint reservation and overlap testing
pub mod occupancy;
/// Reference image storage and clamp-to-edge sampling
pub mod sampler;

pub use occupancy::{Footprint, OccupancyGrid};
pub use sampler::ReferenceImage;
