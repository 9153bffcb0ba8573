//! Random source adapters.
//!
//! - `ThreadRandom` - Thread-local RNG for production
//! - `SeededRandom` - Reproducible sequence from a fixed seed
//! - `FixedRandom` - Always returns the same choice (tests)

mod fixed;
mod seeded;
mod thread;

pub use fixed::FixedRandom;
pub use seeded::SeededRandom;
pub use thread::ThreadRandom;
