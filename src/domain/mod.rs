//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `conversation` - Messages, modes, conversation state and reply synthesis

pub mod conversation;
pub mod foundation;
