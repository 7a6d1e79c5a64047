// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Result store capability
//!
//! The evaluator persists through this trait rather than a process-wide
//! handle, so storage backends and test doubles are interchangeable.

use ag_domain_types::AnalyzedCommit;
use async_trait::async_trait;

/// Durable store for commit analysis results
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Append a commit record and its issues.
    ///
    /// The commit row must be written before (or at least logically ahead
    /// of) its issue rows so the issues remain attributable; no cross-row
    /// rollback is expected when an issue write fails.
    async fn record_analysis(&self, commit: &AnalyzedCommit) -> anyhow::Result<()>;

    /// The `limit` most recently inserted commit records, most-recent-first,
    /// each populated with its issues in insertion order. A limit larger
    /// than the available rows returns all rows.
    async fn fetch_history(&self, limit: u32) -> anyhow::Result<Vec<AnalyzedCommit>>;
}
