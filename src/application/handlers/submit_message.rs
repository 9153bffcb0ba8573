//! SubmitMessage command types.
//!
//! The command, result and error of the conversation's single mutating
//! operation. The store in [`crate::application::ConversationStore`] runs it.

use std::time::Duration;
use thiserror::Error;

use crate::domain::conversation::{Mode, Notice};
use crate::domain::foundation::{ErrorCode, MessageId, ValidationError};
use crate::ports::SynthesisError;

/// Command to submit a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessageCommand {
    /// The message text, stored exactly as given.
    pub text: String,
    /// Mode the message was written in.
    pub mode: Mode,
}

impl SubmitMessageCommand {
    /// Creates a command with an already-typed mode.
    pub fn new(text: impl Into<String>, mode: Mode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// Creates a command from raw boundary input.
    ///
    /// # Errors
    ///
    /// - `UnknownMode` if `mode` is not one of chat, code, search, think
    /// - `EmptyField` if `text` is empty or whitespace only
    pub fn parse(text: impl Into<String>, mode: &str) -> Result<Self, ValidationError> {
        let command = Self::new(text, mode.parse()?);
        command.validate()?;
        Ok(command)
    }

    /// Checks the text is non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(())
    }
}

/// Errors that can occur when submitting a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitMessageError {
    /// Input was rejected before any state changed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A previous submission is still waiting for its reply.
    #[error("Conversation is busy: a reply is still being prepared")]
    Busy,

    /// The reply could not be produced. The user message stays in the log.
    #[error("Synthesis failed: {source}")]
    Synthesis {
        source: SynthesisError,
        /// Notification already pushed to subscribers.
        notice: Notice,
    },
}

impl SubmitMessageError {
    /// Stable code for logs and presentation adapters.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitMessageError::Validation(_) => ErrorCode::ValidationFailed,
            SubmitMessageError::Busy => ErrorCode::ConversationBusy,
            SubmitMessageError::Synthesis { .. } => ErrorCode::SynthesisFailed,
        }
    }

    /// The user-facing notice, if this error produced one.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SubmitMessageError::Synthesis { notice, .. } => Some(notice),
            _ => None,
        }
    }
}

/// Result of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessageResult {
    /// ID of the appended user message.
    pub user_message_id: MessageId,
    /// ID of the appended assistant reply.
    pub assistant_message_id: MessageId,
    /// Mode of both messages.
    pub mode: Mode,
    /// How long the simulated thinking lasted.
    pub thinking_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod command {
        use super::*;

        #[test]
        fn new_keeps_text_verbatim() {
            let cmd = SubmitMessageCommand::new("  spaced  ", Mode::Search);
            assert_eq!(cmd.text, "  spaced  ");
            assert_eq!(cmd.mode, Mode::Search);
        }

        #[test]
        fn parse_accepts_known_mode_any_case() {
            let cmd = SubmitMessageCommand::parse("explain lifetimes", " THINK ").unwrap();
            assert_eq!(cmd.mode, Mode::Think);
        }

        #[test]
        fn parse_rejects_unknown_mode() {
            let err = SubmitMessageCommand::parse("text", "poetry").unwrap_err();
            assert_eq!(err, ValidationError::UnknownMode("poetry".to_string()));
        }

        #[test]
        fn parse_rejects_blank_text() {
            let err = SubmitMessageCommand::parse("   ", "chat").unwrap_err();
            assert_eq!(err, ValidationError::empty_field("text"));
        }

        #[test]
        fn validate_rejects_empty_text() {
            assert!(SubmitMessageCommand::new("", Mode::Chat).validate().is_err());
            assert!(SubmitMessageCommand::new("x", Mode::Chat).validate().is_ok());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn codes_map_each_variant() {
            let validation: SubmitMessageError = ValidationError::empty_field("text").into();
            assert_eq!(validation.code(), ErrorCode::ValidationFailed);
            assert_eq!(SubmitMessageError::Busy.code(), ErrorCode::ConversationBusy);

            let synthesis = SubmitMessageError::Synthesis {
                source: SynthesisError::internal("boom"),
                notice: Notice::synthesis_failure(),
            };
            assert_eq!(synthesis.code(), ErrorCode::SynthesisFailed);
        }

        #[test]
        fn only_synthesis_carries_a_notice() {
            let synthesis = SubmitMessageError::Synthesis {
                source: SynthesisError::internal("boom"),
                notice: Notice::synthesis_failure(),
            };
            assert_eq!(synthesis.notice(), Some(&Notice::synthesis_failure()));
            assert_eq!(SubmitMessageError::Busy.notice(), None);
        }

        #[test]
        fn synthesis_error_displays_source() {
            let err = SubmitMessageError::Synthesis {
                source: SynthesisError::unavailable("offline"),
                notice: Notice::synthesis_failure(),
            };
            assert!(err.to_string().contains("offline"));
        }
    }
}
