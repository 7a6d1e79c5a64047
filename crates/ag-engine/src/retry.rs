// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bounded retry with exponential backoff
//!
//! The wrapper is a reusable higher-order operation over any fallible
//! check. Today it wraps a deterministic lint predicate; the same surface
//! can wrap a genuinely flaky check (an external validator call) without
//! restructuring the caller.

use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;

/// Attempt budget and backoff schedule for a fallible check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before the last error is returned
    pub max_attempts: NonZeroU32,
    /// Delay before the second attempt; doubles after each failed attempt
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: NonZeroU32::new(3).expect("nonzero attempt count"),
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Run `check` up to `policy.max_attempts` times, sleeping between failed
/// attempts with a doubling delay. No delay follows the final attempt.
///
/// Returns the first `Ok` produced, or the error from the last attempt once
/// the budget is exhausted. Exhaustion is a distinct outcome the caller
/// interprets; it is not escalated here. Sleeps suspend only the calling
/// future, never the runtime.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: &RetryPolicy, mut check: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut delay = policy.base_delay;
    let mut attempt = 1u32;

    loop {
        match check().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= policy.max_attempts.get() => return Err(err),
            Err(_) => {
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
        }
    }
}
