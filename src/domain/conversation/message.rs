//! Message entity for conversations.
//!
//! Messages are immutable records of user/assistant exchanges. Each carries
//! the mode it was written in, so a log can be re-rendered with mode colors.

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::Mode;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person typing into the widget.
    User,
    /// The simulated assistant.
    Assistant,
}

impl Sender {
    /// Name shown above a message bubble.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Elena",
        }
    }
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - `id` is unique and assigned at construction
/// - `content` is non-blank (validated at construction)
/// - `timestamp` and `mode` never change after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
    sender: Sender,
    timestamp: Timestamp,
    mode: Mode,
}

impl Message {
    /// Creates a new message stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty or whitespace only
    pub fn new(
        sender: Sender,
        content: impl Into<String>,
        mode: Mode,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: MessageId::new(),
            content,
            sender,
            timestamp: Timestamp::now(),
            mode,
        })
    }

    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty or whitespace only
    pub fn user(content: impl Into<String>, mode: Mode) -> Result<Self, ValidationError> {
        Self::new(Sender::User, content, mode)
    }

    /// Creates an assistant message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty or whitespace only
    pub fn assistant(content: impl Into<String>, mode: Mode) -> Result<Self, ValidationError> {
        Self::new(Sender::Assistant, content, mode)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}
