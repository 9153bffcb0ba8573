//! Conversation domain module.
//!
//! Messages, modes, the append-only conversation state and the pure
//! response synthesizer that turns user input into assistant replies.

mod events;
mod message;
mod mode;
mod notice;
mod state;
pub mod synthesizer;
pub mod templates;

pub use events::ConversationEvent;
pub use message::{Message, Sender};
pub use mode::Mode;
pub use notice::{Notice, NoticeSeverity, SYNTHESIS_FAILURE_DESCRIPTION};
pub use state::ConversationState;
pub use synthesizer::{draft_reply, Reply};
