//! Bounded retry with exponential backoff for transient failures

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::error::Result;

/// Configuration for request retry behavior
///
/// Retries are opt-in: the default configuration performs none, so every
/// failure surfaces on the first attempt. Only transient conditions are
/// retried (network failures, timeouts, rate limiting); server-reported
/// rejections such as validation or conflict errors never are.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = fail on first error)
    pub max_retries: u32,
    /// Initial backoff duration in milliseconds
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds
    pub max_backoff_ms: u64,
    /// Backoff multiplier (exponential factor)
    pub backoff_multiplier: f64,
    /// Whether to add jitter to prevent thundering herd
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::none()
    }
}

impl RetryConfig {
    /// Create a retry config with no retries (fail fast)
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff_ms: 100,
            max_backoff_ms: 10000,
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }

    /// Create a retry config with custom max retries
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::none()
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// retry budget is spent.
///
/// Uses exponential backoff with optional jitter. A `Retry-After` hint from
/// a rate-limited response is honored as the floor for that attempt's
/// backoff.
pub(crate) async fn run<T, F, Fut>(config: &RetryConfig, operation: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut backoff_ms = config.initial_backoff_ms;

    for attempt in 0..=config.max_retries {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < config.max_retries => {
                let base_ms = match err.retry_after() {
                    Some(hint) => std::cmp::max(backoff_ms, hint.as_millis() as u64),
                    None => backoff_ms,
                };
                let sleep_ms = if config.jitter {
                    // Add 0-50% random jitter
                    base_ms + rand::thread_rng().gen_range(0..=(base_ms / 2))
                } else {
                    base_ms
                };

                warn!(
                    "{} failed (attempt {}/{}), retrying in {}ms: {}",
                    operation,
                    attempt + 1,
                    config.max_retries + 1,
                    sleep_ms,
                    err
                );

                tokio::time::sleep(Duration::from_millis(sleep_ms)).await;

                backoff_ms = std::cmp::min(
                    (backoff_ms as f64 * config.backoff_multiplier) as u64,
                    config.max_backoff_ms,
                );
            }
            Err(err) => return Err(err),
        }
    }

    unreachable!("retry loop returns from its final attempt")
}
