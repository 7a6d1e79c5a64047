// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Commit-level domain types
//!
//! A "commit" is a caller-submitted batch of files analyzed as one unit.
//! The files themselves are ephemeral; only the derived status and issues
//! are persisted as an [`AnalyzedCommit`].

use crate::issue::Issue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single submitted source file. Supplied per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub filename: String,
    pub content: String,
}

impl SourceFile {
    /// Lines of the file, split on `\n` boundaries.
    ///
    /// Empty trailing lines are preserved: content ending in a newline
    /// yields a final empty line. Issue line numbers are the 1-based
    /// position within this sequence.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// Pass/fail verdict for a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    Pass,
    Fail,
}

impl CommitStatus {
    /// The verdict is a pure function of the issue count at evaluation time.
    pub fn from_issue_count(count: usize) -> Self {
        if count == 0 {
            CommitStatus::Pass
        } else {
            CommitStatus::Fail
        }
    }

    /// Stable string form used in storage rows and wire payloads
    pub fn as_str(self) -> &'static str {
        match self {
            CommitStatus::Pass => "pass",
            CommitStatus::Fail => "fail",
        }
    }
}

impl std::fmt::Display for CommitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(CommitStatus::Pass),
            "fail" => Ok(CommitStatus::Fail),
            other => Err(format!("Invalid commit status: {}", other)),
        }
    }
}

/// A completed commit analysis with its issues.
///
/// Identity is the caller-supplied `commit_id`; the system does not enforce
/// uniqueness, so re-analyzing the same id appends an additional independent
/// record rather than updating a prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedCommit {
    pub commit_id: String,
    pub repo_url: String,
    pub status: CommitStatus,
    pub recorded_at: DateTime<Utc>,
    pub issues: Vec<Issue>,
}
