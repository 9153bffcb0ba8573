//! Mock response generator for testing.
//!
//! Returns scripted replies in order, injects failures on demand and records
//! every request so tests can verify what the store asked for.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockResponseGenerator::new()
//!     .with_reply("First")
//!     .with_error(SynthesisError::internal("boom"));
//!
//! assert_eq!(generator.generate(Mode::Chat, "hi")?, "First");
//! assert!(generator.generate(Mode::Chat, "again").is_err());
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::conversation::Mode;
use crate::ports::{ResponseGenerator, SynthesisError};

/// Reply used once the script runs out.
pub const DEFAULT_MOCK_REPLY: &str = "Mock response";

/// A scripted outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Text(String),
    Error(SynthesisError),
}

/// Scripted response generator.
///
/// Clones share the same script and call log.
///
/// # Panics
///
/// Methods panic if the internal locks are poisoned; this adapter is meant
/// for tests only.
#[derive(Debug, Clone, Default)]
pub struct MockResponseGenerator {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<(Mode, String)>>>,
}

impl MockResponseGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Text(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: SynthesisError) -> Self {
        self.push(MockReply::Error(error));
        self
    }

    /// Number of generate calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("MockResponseGenerator: calls lock poisoned").len()
    }

    /// Every `(mode, text)` pair seen, in call order.
    pub fn calls(&self) -> Vec<(Mode, String)> {
        self.calls
            .lock()
            .expect("MockResponseGenerator: calls lock poisoned")
            .clone()
    }

    fn push(&self, reply: MockReply) {
        self.replies
            .lock()
            .expect("MockResponseGenerator: replies lock poisoned")
            .push_back(reply);
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .expect("MockResponseGenerator: replies lock poisoned")
            .pop_front()
            .unwrap_or_else(|| MockReply::Text(DEFAULT_MOCK_REPLY.to_string()))
    }
}

impl ResponseGenerator for MockResponseGenerator {
    fn generate(&self, mode: Mode, text: &str) -> Result<String, SynthesisError> {
        self.calls
            .lock()
            .expect("MockResponseGenerator: calls lock poisoned")
            .push((mode, text.to_string()));

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(err) => Err(err),
        }
    }
}
