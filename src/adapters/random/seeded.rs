//! Seeded RNG adapter for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Mutex;

use crate::ports::RandomSource;

/// Deterministic sequence derived from a `u64` seed.
///
/// Two instances with the same seed produce the same draws in the same order.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock only means another draw panicked; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    fn next_in_range(&self, range: Range<u64>) -> u64 {
        if range.is_empty() {
            return range.start;
        }
        self.with_rng(|rng| rng.gen_range(range))
    }
}
