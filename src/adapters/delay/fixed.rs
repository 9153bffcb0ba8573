//! Deterministic delays.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::ThinkingDelay;

/// Always sleeps for the same duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl ThinkingDelay for FixedDelay {
    async fn pause(&self) -> Duration {
        if !self.duration.is_zero() {
            sleep(self.duration).await;
        }
        self.duration
    }
}

/// Returns immediately and counts how often it was asked to pause.
#[derive(Debug, Default)]
pub struct NoDelay {
    pauses: AtomicUsize,
}

impl NoDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pauses requested so far.
    pub fn pause_count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThinkingDelay for NoDelay {
    async fn pause(&self) -> Duration {
        self.pauses.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_delay_reports_its_duration() {
        let delay = FixedDelay::new(Duration::from_millis(10));

        let start = std::time::Instant::now();
        assert_eq!(delay.pause().await, Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn no_delay_counts_pauses() {
        let delay = NoDelay::new();
        assert_eq!(delay.pause().await, Duration::ZERO);
        assert_eq!(delay.pause().await, Duration::ZERO);
        assert_eq!(delay.pause_count(), 2);
    }
}
