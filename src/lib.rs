//! Elena - a simulated AI chat assistant.
//!
//! The crate models the message-processing core of a chat widget: an
//! observable conversation store that accepts user messages in one of four
//! modes (chat, code, search, think), waits a simulated thinking delay and
//! appends a templated reply. Presentation layers read snapshots or
//! subscribe to events; the bundled binary is a terminal front end.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
