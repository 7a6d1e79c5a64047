// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Scan policy: the configuration surface of the engine

use crate::retry::RetryPolicy;
use crate::rules::{LineRule, PrintStatementRule, SecretPatternRule};
use std::sync::Arc;

/// Rule set and retry budget used by one evaluator.
///
/// The rule lists and the retry policy are configuration, not literals:
/// callers can extend the signature set or tune the attempt budget without
/// touching the evaluator's orchestration.
#[derive(Clone)]
pub struct ScanPolicy {
    /// Secret signatures. At most one issue is emitted per line: the first
    /// matching rule wins.
    pub secret_rules: Vec<Arc<dyn LineRule>>,
    /// Lint checks. Each rule is an independent check wrapped in retry.
    pub lint_rules: Vec<Arc<dyn LineRule>>,
    /// Attempt budget applied to every lint check
    pub retry: RetryPolicy,
}

impl ScanPolicy {
    /// Replace the retry budget, keeping the rule set
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            secret_rules: vec![Arc::new(SecretPatternRule::default())],
            lint_rules: vec![Arc::new(PrintStatementRule)],
            retry: RetryPolicy::default(),
        }
    }
}
