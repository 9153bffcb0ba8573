//! Adapters - Implementations of port interfaces.
//!
//! - `synthesis` - Response generators (templates, scripted mock)
//! - `delay` - Thinking delays (random, fixed, none)
//! - `random` - Random sources (thread RNG, seeded, fixed)

pub mod delay;
pub mod random;
pub mod synthesis;

pub use delay::{FixedDelay, NoDelay, RandomThinkingDelay};
pub use random::{FixedRandom, SeededRandom, ThreadRandom};
pub use synthesis::{MockReply, MockResponseGenerator, TemplateResponseGenerator};
