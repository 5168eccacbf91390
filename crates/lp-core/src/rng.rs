//! Deterministic, explicitly injected RNG for obstacle placement.
//!
//! Nothing in the planner touches a global or thread-local RNG.  Whatever
//! needs randomness takes a `&mut PlanRng` seeded from `PlannerConfig::seed`,
//! so the same seed always produces the same cost field and therefore the
//! same paths.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG passed into every randomized construction step.
pub struct PlanRng(SmallRng);

impl PlanRng {
    pub fn new(seed: u64) -> Self {
        PlanRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
