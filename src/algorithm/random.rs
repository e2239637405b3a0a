use glam::IVec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source owned by a single run
///
/// All draws of a run go through one instance, in a fixed order, so a run is
/// reproducible from its seed alone.
pub struct WalkRng {
    rng: StdRng,
}

impl WalkRng {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart the sequence from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniform draw from `[0, upper)`, or zero without drawing when the range is empty
    pub fn uniform(&mut self, upper: f32) -> f32 {
        if upper > 0.0 && upper.is_finite() {
            self.rng.random_range(0.0..upper)
        } else {
            0.0
        }
    }

    /// Whole-cell candidate jitter, `floor` of a uniform draw on each axis (x first)
    pub fn jitter(&mut self, randomness: f32) -> IVec2 {
        let x = self.uniform(randomness).floor();
        let y = self.uniform(randomness).floor();
        IVec2::new(
            num_traits::cast::<f32, i32>(x).unwrap_or(0),
            num_traits::cast::<f32, i32>(y).unwrap_or(0),
        )
    }
}
