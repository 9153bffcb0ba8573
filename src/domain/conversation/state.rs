//! Conversation state.
//!
//! An append-only message log plus the busy flag. Presentation adapters only
//! ever see snapshots; all mutation goes through the conversation store.

use serde::{Deserialize, Serialize};

use super::templates::WELCOME_MESSAGE;
use super::{Message, Mode, Sender};

/// Ordered message log and busy flag for one session.
///
/// # Invariants
///
/// - The first message is the assistant welcome (chat mode)
/// - Messages are never removed or reordered; insertion order is
///   conversation order
/// - `busy` is true exactly while a submission is waiting on synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    messages: Vec<Message>,
    busy: bool,
}

impl ConversationState {
    /// Creates a log seeded with the given assistant welcome message.
    ///
    /// Blank welcome text falls back to the standard welcome.
    pub fn seeded(welcome: &str) -> Self {
        let welcome = Message::assistant(welcome, Mode::Chat)
            .or_else(|_| Message::assistant(WELCOME_MESSAGE, Mode::Chat))
            .expect("standard welcome message is non-empty");

        Self {
            messages: vec![welcome],
            busy: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a seeded log; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages the user has written.
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.sender() == Sender::User).count()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::seeded(WELCOME_MESSAGE)
    }
}
