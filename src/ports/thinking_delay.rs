//! Thinking Delay Port - Interface for the simulated response latency.
//!
//! Every submission suspends once before its reply is generated. Keeping the
//! wait behind a port lets tests run without real time passing.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the pause between accepting a message and replying.
#[async_trait]
pub trait ThinkingDelay: Send + Sync {
    /// Suspend the current task and report how long it waited.
    ///
    /// Must yield to the runtime rather than block the thread.
    async fn pause(&self) -> Duration;
}
