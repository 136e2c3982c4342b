//! Per-run RNG wrapper.
//!
//! Every random choice the engine makes (lesson queue order, day order, lunch
//! slot) is drawn from one `PlanRng` owned by the run.  Seeding it makes a
//! run fully reproducible; leaving it unseeded draws from OS entropy, and two
//! runs over identical input may then produce different placements.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Single-threaded RNG for one scheduling run.
pub struct PlanRng(SmallRng);

impl PlanRng {
    pub fn new(seed: u64) -> Self {
        PlanRng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        PlanRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => PlanRng::new(s),
            None    => PlanRng::from_entropy(),
        }
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
