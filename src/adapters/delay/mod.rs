//! Thinking delay adapters.
//!
//! - `RandomThinkingDelay` - Uniform random latency (production)
//! - `FixedDelay` - Constant latency
//! - `NoDelay` - Returns immediately (tests)

mod fixed;
mod random;

pub use fixed::{FixedDelay, NoDelay};
pub use random::RandomThinkingDelay;
