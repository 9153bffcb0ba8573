//! Conversation events.
//!
//! Pushed to subscribers as the store changes, so presentation adapters can
//! render incrementally instead of diffing snapshots.

use serde::{Deserialize, Serialize};

use super::{Message, Notice};

/// A change observed on a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A message was appended to the log.
    MessageAppended { message: Message },
    /// The busy flag changed.
    BusyChanged { busy: bool },
    /// A transient notification should be shown.
    Notice { notice: Notice },
}

impl ConversationEvent {
    /// Event name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversationEvent::MessageAppended { .. } => "message_appended",
            ConversationEvent::BusyChanged { .. } => "busy_changed",
            ConversationEvent::Notice { .. } => "notice",
        }
    }
}
