//! Random thinking delay.
//!
//! Models the "perceived thinking" latency: each pause lasts a uniformly
//! random number of milliseconds in a half-open window, 1-3 seconds by
//! default.

use async_trait::async_trait;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{RandomSource, ThinkingDelay};

/// Default lower bound of the thinking window, inclusive.
pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;
/// Default upper bound of the thinking window, exclusive.
pub const DEFAULT_MAX_DELAY_MS: u64 = 3000;

/// Sleeps for a random duration drawn from `[min_ms, max_ms)`.
#[derive(Clone)]
pub struct RandomThinkingDelay {
    window_ms: Range<u64>,
    random: Arc<dyn RandomSource>,
}

impl RandomThinkingDelay {
    /// Creates a delay drawing from `window_ms` (milliseconds).
    ///
    /// An empty window always sleeps for its start.
    pub fn new(window_ms: Range<u64>, random: Arc<dyn RandomSource>) -> Self {
        Self { window_ms, random }
    }

    /// Uses the default 1000..3000 ms window.
    pub fn with_default_window(random: Arc<dyn RandomSource>) -> Self {
        Self::new(DEFAULT_MIN_DELAY_MS..DEFAULT_MAX_DELAY_MS, random)
    }

    pub fn window_ms(&self) -> &Range<u64> {
        &self.window_ms
    }

    /// Draws the next pause length without sleeping.
    pub fn next_duration(&self) -> Duration {
        Duration::from_millis(self.random.next_in_range(self.window_ms.clone()))
    }
}

impl std::fmt::Debug for RandomThinkingDelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomThinkingDelay")
            .field("window_ms", &self.window_ms)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ThinkingDelay for RandomThinkingDelay {
    async fn pause(&self) -> Duration {
        let duration = self.next_duration();
        tracing::debug!(thinking_ms = duration.as_millis() as u64, "Simulating thinking");
        sleep(duration).await;
        duration
    }
}
