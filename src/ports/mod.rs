//! Ports - Interfaces for the injectable seams of the conversation core.
//!
//! Following hexagonal architecture, ports define the contracts the
//! conversation store depends on. Adapters implement these ports.
//!
//! - `ResponseGenerator` - Produces reply text for a message
//! - `ThinkingDelay` - The simulated latency before each reply
//! - `RandomSource` - Uniform random choices (reply variants, latency)

mod random_source;
mod response_generator;
mod thinking_delay;

pub use random_source::RandomSource;
pub use response_generator::{ResponseGenerator, SynthesisError};
pub use thinking_delay::ThinkingDelay;
