//! Retry with exponential backoff for transient fetch failures
//!
//! Only the weather-analysis call uses this; the other endpoints fail to
//! the caller on first error. Malformed responses are never retried.

use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::error::AppResult;

/// Bounded exponential backoff: delay doubles per attempt up to a ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            // One attempt minimum, otherwise nothing would ever be sent
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let doubled = self
            .initial_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)));
        doubled.min(self.max_delay)
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.initial_delay_ms),
            Duration::from_millis(config.max_delay_ms),
        )
    }
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// attempt budget is exhausted. The closure receives the 1-based attempt
/// number.
pub async fn retry_with<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> AppResult<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient fetch failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(10), Duration::from_millis(40))
    }

    #[test]
    fn test_delay_doubles_then_caps() {
        let policy = RetryPolicy::new(
            5,
            Duration::from_millis(500),
            Duration::from_millis(5000),
        );
        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(4), Duration::from_millis(4000));
        // Capped at the ceiling from here on
        assert_eq!(policy.delay_for(5), Duration::from_millis(5000));
        assert_eq!(policy.delay_for(12), Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_with(&policy(), |_attempt| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(AppError::Network("connection refused".into()))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = retry_with(&policy(), |_attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::Network("down".into())) }
        })
        .await;

        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_shape_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = retry_with(&policy(), |_attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::Shape("missing field".into())) }
        })
        .await;

        assert!(matches!(result, Err(AppError::Shape(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    proptest! {
        /// Backoff is monotonically non-decreasing and never exceeds the cap
        #[test]
        fn prop_backoff_monotone_and_capped(
            initial_ms in 1u64..2000,
            cap_ms in 1u64..20_000,
            attempt in 1u32..16,
        ) {
            let policy = RetryPolicy::new(
                8,
                Duration::from_millis(initial_ms),
                Duration::from_millis(cap_ms),
            );
            let current = policy.delay_for(attempt);
            let next = policy.delay_for(attempt + 1);
            prop_assert!(next >= current || current == Duration::from_millis(cap_ms));
            prop_assert!(current <= Duration::from_millis(cap_ms).max(Duration::from_millis(initial_ms)));
        }
    }
}
