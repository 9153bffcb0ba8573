//! Conversation configuration

use serde::Deserialize;
use std::ops::Range;

use super::error::ValidationError;
use crate::domain::conversation::templates::WELCOME_MESSAGE;

/// Upper bound for either end of the thinking window.
pub const MAX_THINKING_DELAY_MS: u64 = 60_000;

/// Conversation behaviour: simulated latency, event fan-out and greeting
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ConversationConfig {
    /// Shortest simulated thinking time, inclusive
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Longest simulated thinking time, exclusive
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Buffered events per subscriber before it starts lagging
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// First assistant message of every conversation
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

impl ConversationConfig {
    /// Thinking window as a half-open millisecond range
    pub fn delay_window_ms(&self) -> Range<u64> {
        self.min_delay_ms..self.max_delay_ms
    }

    /// Validate conversation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_delay_ms >= self.max_delay_ms {
            return Err(ValidationError::InvalidDelayRange);
        }

        if self.max_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ValidationError::DelayTooLong);
        }

        if self.event_capacity == 0 {
            return Err(ValidationError::InvalidEventCapacity);
        }

        if self.welcome_message.trim().is_empty() {
            return Err(ValidationError::MissingRequired("WELCOME_MESSAGE"));
        }

        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            event_capacity: default_event_capacity(),
            welcome_message: default_welcome_message(),
        }
    }
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    3000
}

fn default_event_capacity() -> usize {
    64
}

fn default_welcome_message() -> String {
    WELCOME_MESSAGE.to_string()
}
