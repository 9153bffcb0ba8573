//! Interaction modes.
//!
//! The mode a user picks decides which template family answers them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Interaction mode selected alongside each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Free conversation.
    #[default]
    Chat,
    /// Code generation.
    Code,
    /// Simulated web search.
    Search,
    /// Structured problem analysis.
    Think,
}

impl Mode {
    /// Every mode, in the order the mode selector presents them.
    pub const ALL: [Mode; 4] = [Mode::Chat, Mode::Code, Mode::Search, Mode::Think];

    /// Wire name (`chat`, `code`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::Code => "code",
            Mode::Search => "search",
            Mode::Think => "think",
        }
    }

    /// Human-facing label for mode selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Chat => "Chat",
            Mode::Code => "Code",
            Mode::Search => "Search",
            Mode::Think => "Think",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_chat() {
        assert_eq!(Mode::default(), Mode::Chat);
    }

    #[test]
    fn parses_every_wire_name() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" Think ".parse::<Mode>(), Ok(Mode::Think));
        assert_eq!("SEARCH".parse::<Mode>(), Ok(Mode::Search));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "poetry".parse::<Mode>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownMode("poetry".to_string()));
    }

    #[test]
    fn rejects_empty_mode() {
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Code).unwrap(), "\"code\"");
        let mode: Mode = serde_json::from_str("\"think\"").unwrap();
        assert_eq!(mode, Mode::Think);
    }

    #[test]
    fn labels_are_capitalized() {
        let labels: Vec<_> = Mode::ALL.iter().map(Mode::label).collect();
        assert_eq!(labels, vec!["Chat", "Code", "Search", "Think"]);
    }
}
