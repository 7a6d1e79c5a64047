// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Issue types produced by commit analysis

use serde::{Deserialize, Serialize};

/// Category of a detected policy violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A hardcoded secret signature matched a line
    Secret,
    /// A disallowed code pattern survived all check attempts
    Lint,
}

impl IssueKind {
    /// Stable string form used in storage rows and wire payloads
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Secret => "secret",
            IssueKind::Lint => "lint",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IssueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secret" => Ok(IssueKind::Secret),
            "lint" => Ok(IssueKind::Lint),
            other => Err(format!("Invalid issue kind: {}", other)),
        }
    }
}

/// A single detected policy violation with file/line provenance.
///
/// Issues are immutable once created and belong to exactly one commit;
/// they are only produced as a byproduct of evaluating that commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Violation category ("type" on the wire)
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Name of the submitted file the violation was found in
    pub filename: String,
    /// 1-based line position within the file's newline-split line sequence
    pub line: u32,
    /// Human-readable description of the violation
    pub message: String,
    /// Check attempts consumed before the violation was confirmed.
    /// Always 0 for secret issues.
    pub retries: u32,
}
