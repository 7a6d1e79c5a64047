// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server configuration

use ag_engine::{RetryPolicy, ScanPolicy};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// Path to SQLite database
    pub database_path: String,

    /// Enable permissive CORS headers for development
    pub enable_cors: bool,

    /// Scan tuning applied to every evaluation
    pub scan: ScanConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid socket address"),
            database_path: ":memory:".to_string(),
            enable_cors: false,
            scan: ScanConfig::default(),
        }
    }
}

/// Scan tuning knobs.
///
/// The attempt budget and backoff base are deployment configuration, not
/// engine literals, so operators can adjust them per environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Attempts given to each lint check before a violation is confirmed
    pub lint_attempts: NonZeroU32,

    /// Delay before the second attempt of a failed check; doubles afterwards
    pub retry_base_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lint_attempts: NonZeroU32::new(3).expect("nonzero attempt count"),
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

impl ServerConfig {
    /// Build the engine scan policy from the configured tuning
    pub fn scan_policy(&self) -> ScanPolicy {
        ScanPolicy::default().with_retry(RetryPolicy {
            max_attempts: self.scan.lint_attempts,
            base_delay: self.scan.retry_base_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_config_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.database_path, ":memory:");
        assert!(!config.enable_cors, "permissive CORS must be opt-in");
        assert_eq!(config.scan.lint_attempts.get(), 3);
        assert_eq!(config.scan.retry_base_delay, Duration::from_secs(1));
    }

    #[test]
    fn scan_policy_carries_the_configured_budget() {
        let mut config = ServerConfig::default();
        config.scan.lint_attempts = NonZeroU32::new(5).unwrap();
        config.scan.retry_base_delay = Duration::from_millis(250);

        let policy = config.scan_policy();
        assert_eq!(policy.retry.max_attempts.get(), 5);
        assert_eq!(policy.retry.base_delay, Duration::from_millis(250));
    }
}
