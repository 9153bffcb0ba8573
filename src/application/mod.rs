//! Application layer - the conversation store and its commands.
//!
//! This layer owns conversation state and coordinates the ports: it is the
//! only place where messages are appended or the busy flag changes.

mod conversation_store;
pub mod handlers;

pub use conversation_store::ConversationStore;
pub use handlers::{SubmitMessageCommand, SubmitMessageError, SubmitMessageResult};
