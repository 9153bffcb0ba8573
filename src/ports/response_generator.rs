//! Response Generator Port - Interface for producing assistant replies.
//!
//! The conversation store asks a generator for reply text once the thinking
//! delay has elapsed. The production adapter is the template synthesizer;
//! tests swap in a scripted generator to inject failures.
//!
//! # Example
//!
//! ```ignore
//! struct Echo;
//!
//! impl ResponseGenerator for Echo {
//!     fn generate(&self, _mode: Mode, text: &str) -> Result<String, SynthesisError> {
//!         Ok(text.to_string())
//!     }
//! }
//! ```

use thiserror::Error;

use crate::domain::conversation::Mode;

/// Port for turning a user message into reply text.
///
/// Implementations must be cheap and non-blocking; the store calls them on
/// the async task that owns the submission.
pub trait ResponseGenerator: Send + Sync {
    /// Produce the reply for `text` written in `mode`.
    ///
    /// Successful replies are non-empty.
    fn generate(&self, mode: Mode, text: &str) -> Result<String, SynthesisError>;
}

/// Failures while producing a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The generator produced no text.
    #[error("Empty response generated for {mode} mode")]
    EmptyResponse { mode: Mode },

    /// The generator cannot serve requests right now.
    #[error("Response generator unavailable: {message}")]
    Unavailable { message: String },

    /// Anything else that went wrong inside the generator.
    #[error("Internal synthesis error: {message}")]
    Internal { message: String },
}

impl SynthesisError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ResponseGenerator) {}

    #[test]
    fn empty_response_names_the_mode() {
        let err = SynthesisError::EmptyResponse { mode: Mode::Think };
        assert_eq!(err.to_string(), "Empty response generated for think mode");
    }

    #[test]
    fn constructors_fill_message() {
        assert_eq!(
            SynthesisError::unavailable("down"),
            SynthesisError::Unavailable { message: "down".to_string() }
        );
        assert!(SynthesisError::internal("boom").to_string().contains("boom"));
    }
}
