//! Application handlers.
//!
//! Command types for the conversation's operations.

pub mod submit_message;

pub use submit_message::{SubmitMessageCommand, SubmitMessageError, SubmitMessageResult};
