// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Commit evaluator
//!
//! Orchestrates the secret detector and the lint checker over a submitted
//! commit, derives the verdict, and hands the record to the result store.
//! Persistence is audit durability, not part of the analysis contract:
//! a storage fault never changes what the caller gets back.

use crate::detector::SecretDetector;
use crate::linter::LintChecker;
use crate::policy::ScanPolicy;
use crate::store::ResultStore;
use ag_domain_types::{AnalyzedCommit, CommitStatus, Issue, SourceFile};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of one commit analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub status: CommitStatus,
    pub issues: Vec<Issue>,
}

/// Runs the full scan for one commit and records the outcome
pub struct CommitEvaluator {
    detector: SecretDetector,
    linter: LintChecker,
    store: Arc<dyn ResultStore>,
}

impl CommitEvaluator {
    pub fn new(policy: ScanPolicy, store: Arc<dyn ResultStore>) -> Self {
        Self {
            detector: SecretDetector::new(policy.secret_rules),
            linter: LintChecker::new(policy.lint_rules, policy.retry),
            store,
        }
    }

    /// Analyze one commit's file set and persist the outcome.
    ///
    /// Issues are presented in file-then-line order; a secret issue
    /// precedes a lint issue on the same line. The returned evaluation is
    /// unaffected by persistence failures, which are logged and dropped.
    pub async fn evaluate(
        &self,
        commit_id: &str,
        repo_url: &str,
        files: &[SourceFile],
    ) -> Evaluation {
        let mut issues = self.detector.detect(files);
        issues.extend(self.linter.lint(files).await);
        sort_by_provenance(&mut issues, files);

        let status = CommitStatus::from_issue_count(issues.len());
        tracing::info!(
            "commit {} evaluated: {} with {} issue(s)",
            commit_id,
            status,
            issues.len()
        );

        let record = AnalyzedCommit {
            commit_id: commit_id.to_string(),
            repo_url: repo_url.to_string(),
            status,
            recorded_at: Utc::now(),
            issues: issues.clone(),
        };
        if let Err(err) = self.store.record_analysis(&record).await {
            tracing::error!("Failed to persist analysis for commit {}: {err:#}", commit_id);
        }

        Evaluation { status, issues }
    }
}

/// Stable-sort the combined checker output into file-then-line order.
///
/// Files keep their submission order; the stable sort keeps secret issues
/// ahead of lint issues on the same line because the detector runs first.
fn sort_by_provenance(issues: &mut [Issue], files: &[SourceFile]) {
    let order: HashMap<&str, usize> = files
        .iter()
        .enumerate()
        .map(|(position, file)| (file.filename.as_str(), position))
        .collect();
    issues.sort_by_key(|issue| {
        (
            order.get(issue.filename.as_str()).copied().unwrap_or(usize::MAX),
            issue.line,
        )
    });
}
