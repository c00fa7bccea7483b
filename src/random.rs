//! Injectable uniform random source.
//!
//! The sampling helpers never reach for a global generator. Callers pass any
//! [`RandomSource`], which makes every pick reproducible from a seed.

use std::ops::{Range, RangeInclusive};

use bevy::prelude::*;

/// Uniform integer generator used by the sampling helpers.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `range`, upper bound excluded.
    ///
    /// Callers never pass an empty range.
    fn int_in(&mut self, range: Range<u64>) -> u64;

    /// Returns a uniformly distributed integer in `range`, both bounds included.
    fn int_in_inclusive(&mut self, range: RangeInclusive<u64>) -> u64;
}

impl RandomSource for fastrand::Rng {
    fn int_in(&mut self, range: Range<u64>) -> u64 {
        self.u64(range)
    }

    fn int_in_inclusive(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.u64(range)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_in(&mut self, range: Range<u64>) -> u64 {
        (**self).int_in(range)
    }

    fn int_in_inclusive(&mut self, range: RangeInclusive<u64>) -> u64 {
        (**self).int_in_inclusive(range)
    }
}

/// Shared generator for systems that pick at random.
///
/// Inserted by [`ScriptingToolsPlugin`](crate::ScriptingToolsPlugin); seeded
/// when the plugin is configured with a seed, otherwise seeded from entropy.
#[derive(Resource, Deref, DerefMut)]
pub struct ToolsRng(pub fastrand::Rng);

impl ToolsRng {
    /// Create a generator, deterministic when `seed` is set.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(fastrand::Rng::with_seed(seed)),
            None => Self(fastrand::Rng::new()),
        }
    }

    /// Reseed in place, e.g. when restarting a deterministic run.
    pub fn reseed(&mut self, seed: u64) {
        self.0.seed(seed);
    }
}

impl Default for ToolsRng {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for ToolsRng {
    fn int_in(&mut self, range: Range<u64>) -> u64 {
        self.0.int_in(range)
    }

    fn int_in_inclusive(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.0.int_in_inclusive(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut a = ToolsRng::new(Some(7));
        let mut b = ToolsRng::new(Some(7));

        for _ in 0..32 {
            assert_eq!(a.int_in(0..1000), b.int_in(0..1000));
        }
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let mut rng = ToolsRng::new(Some(3));
        let first: Vec<u64> = (0..8).map(|_| rng.int_in(0..100)).collect();

        rng.reseed(3);
        let second: Vec<u64> = (0..8).map(|_| rng.int_in(0..100)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn bounds_are_respected() {
        let mut rng = fastrand::Rng::with_seed(11);

        for _ in 0..1000 {
            let exclusive = rng.int_in(0..4);
            assert!(exclusive < 4);

            let inclusive = rng.int_in_inclusive(1..=2);
            assert!((1..=2).contains(&inclusive));
        }
    }

    #[test]
    fn single_value_inclusive_range() {
        let mut rng = fastrand::Rng::with_seed(5);
        assert_eq!(rng.int_in_inclusive(1..=1), 1);
    }
}
