//! Retry policy and the delay capability used between attempts

use crate::config::FetcherConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Waits between fetch attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real waiting on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fixed-delay retry policy
///
/// A fetch makes at most `max_retries + 1` attempts and waits `delay`
/// between consecutive attempts. There is no growth in the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_secs(config.retry_delay_secs),
        )
    }

    pub fn total_attempts(&self) -> u32 {
        attempts_for(self.max_retries)
    }
}

/// Total attempts for a retry count, saturating at `u32::MAX`
pub fn attempts_for(max_retries: u32) -> u32 {
    max_retries.saturating_add(1)
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetcherConfig::default())
    }
}
