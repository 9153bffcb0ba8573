//! Transient notifications shown to the user outside the message log.

use serde::{Deserialize, Serialize};

/// Text shown when a reply could not be produced.
pub const SYNTHESIS_FAILURE_DESCRIPTION: &str =
    "I encountered an issue processing your request. Please try again.";

/// How prominently a notice should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    #[default]
    Info,
    Destructive,
}

/// A one-off notification (toast) for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: NoticeSeverity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// The apology shown when synthesis fails.
    pub fn synthesis_failure() -> Self {
        Self::new("Error", SYNTHESIS_FAILURE_DESCRIPTION, NoticeSeverity::Destructive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesis_failure_is_destructive_apology() {
        let notice = Notice::synthesis_failure();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, SYNTHESIS_FAILURE_DESCRIPTION);
        assert_eq!(notice.severity, NoticeSeverity::Destructive);
    }

    #[test]
    fn severity_serializes_to_snake_case() {
        let json = serde_json::to_string(&NoticeSeverity::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
    }
}
