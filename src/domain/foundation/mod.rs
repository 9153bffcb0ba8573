//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps and error types used across the conversation core.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use timestamp::Timestamp;
