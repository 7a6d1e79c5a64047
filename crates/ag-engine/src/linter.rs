// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Lint checker
//!
//! Every lint rule is treated as a fallible check and run through the
//! retry-with-backoff wrapper. The predicates in the default policy are
//! deterministic, so the outcome never changes between attempts; the
//! wrapper exists for checks that can fail transiently.

use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::rules::LineRule;
use ag_domain_types::{Issue, SourceFile};
use std::sync::Arc;

/// Outcome of a single check attempt that found a violation
struct Violation;

/// Scans every line of every file against the lint rule set, confirming
/// each violation by exhausting the retry budget.
pub struct LintChecker {
    rules: Vec<Arc<dyn LineRule>>,
    retry: RetryPolicy,
}

impl LintChecker {
    pub fn new(rules: Vec<Arc<dyn LineRule>>, retry: RetryPolicy) -> Self {
        Self { rules, retry }
    }

    /// Emit one issue per persistent violation, in file-then-line order.
    ///
    /// A violation is confirmed only after all attempts report it; the
    /// emitted issue carries the number of attempts consumed. Exhaustion is
    /// data, not an error — nothing here fails toward the caller. Backoff
    /// sleeps suspend only the line currently being retried.
    pub async fn lint(&self, files: &[SourceFile]) -> Vec<Issue> {
        let mut issues = Vec::new();

        for file in files {
            for (index, line) in file.lines().enumerate() {
                for rule in &self.rules {
                    let outcome = retry_with_backoff(&self.retry, || {
                        let violated = rule.matches(line);
                        async move {
                            if violated {
                                Err(Violation)
                            } else {
                                Ok(())
                            }
                        }
                    })
                    .await;

                    if outcome.is_err() {
                        tracing::debug!(
                            "lint violation confirmed in {} at line {} after {} attempts",
                            file.filename,
                            index + 1,
                            self.retry.max_attempts
                        );
                        issues.push(Issue {
                            kind: rule.kind(),
                            filename: file.filename.clone(),
                            line: (index + 1) as u32,
                            message: rule.message().to_string(),
                            retries: self.retry.max_attempts.get(),
                        });
                    }
                }
            }
        }

        issues
    }
}
