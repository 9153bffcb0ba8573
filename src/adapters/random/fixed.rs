//! Constant random source for tests.

use std::ops::Range;

use crate::ports::RandomSource;

/// Always picks the same index (modulo `len`) and the start of any range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom {
    index: usize,
}

impl FixedRandom {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.index % len
        }
    }

    fn next_in_range(&self, range: Range<u64>) -> u64 {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_wraps_modulo_len() {
        let random = FixedRandom::new(5);
        assert_eq!(random.next_index(4), 1);
        assert_eq!(random.next_index(10), 5);
        assert_eq!(random.next_index(0), 0);
    }

    #[test]
    fn range_returns_start() {
        assert_eq!(FixedRandom::new(3).next_in_range(1000..3000), 1000);
    }
}
