//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when input is rejected before it reaches the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Unknown mode '{0}', expected one of chat, code, search, think")]
    UnknownMode(String),
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable error codes surfaced in logs and to presentation adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    ConversationBusy,
    SynthesisFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ConversationBusy => "CONVERSATION_BUSY",
            ErrorCode::SynthesisFailed => "SYNTHESIS_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("text");
        assert_eq!(format!("{}", err), "Field 'text' cannot be empty");
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("mode", "contains control characters");
        assert_eq!(
            format!("{}", err),
            "Field 'mode' has invalid format: contains control characters"
        );
    }

    #[test]
    fn unknown_mode_names_the_value() {
        let err = ValidationError::UnknownMode("poetry".to_string());
        assert!(err.to_string().contains("'poetry'"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
        assert_eq!(format!("{}", ErrorCode::ConversationBusy), "CONVERSATION_BUSY");
        assert_eq!(format!("{}", ErrorCode::SynthesisFailed), "SYNTHESIS_FAILED");
    }
}
