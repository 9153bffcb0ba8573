//! Thread-local RNG adapter.

use rand::Rng;
use std::ops::Range;

use crate::ports::RandomSource;

/// Uses `rand::thread_rng()` for every draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }

    fn next_in_range(&self, range: Range<u64>) -> u64 {
        if range.is_empty() {
            return range.start;
        }
        rand::thread_rng().gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_below_len() {
        let random = ThreadRandom::new();
        for _ in 0..200 {
            assert!(random.next_index(4) < 4);
        }
    }

    #[test]
    fn zero_len_returns_zero() {
        assert_eq!(ThreadRandom::new().next_index(0), 0);
    }

    #[test]
    fn value_stays_in_half_open_range() {
        let random = ThreadRandom::new();
        for _ in 0..200 {
            let value = random.next_in_range(1000..3000);
            assert!((1000..3000).contains(&value));
        }
    }

    #[test]
    fn empty_range_returns_start() {
        assert_eq!(ThreadRandom::new().next_in_range(5..5), 5);
    }
}
