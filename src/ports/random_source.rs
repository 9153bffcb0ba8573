//! Random Source Port - Injectable randomness.
//!
//! Randomness shows up in two places: which chat fallback reply is used and
//! how long the assistant "thinks". Both draw from this port so tests can pin
//! the outcome.

use std::ops::Range;

/// Port for uniform random choices.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn next_index(&self, len: usize) -> usize;

    /// Uniform value in `range`. Returns `range.start` when the range is empty.
    fn next_in_range(&self, range: Range<u64>) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn RandomSource) {}
}
