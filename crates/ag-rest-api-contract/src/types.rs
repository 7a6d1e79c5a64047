// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API contract types for the AutoGuard REST service

use ag_domain_types::{AnalyzedCommit, CommitStatus, Issue, SourceFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Commit analysis request.
///
/// `files` has no serde default on purpose: a payload without a parseable
/// file list is rejected during deserialization, before any scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, message = "commit_id cannot be empty"))]
    pub commit_id: String,
    #[validate(length(min = 1, message = "repo_url cannot be empty"))]
    pub repo_url: String,
    pub files: Vec<SourceFile>,
}

/// Commit analysis response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub commit_id: String,
    pub status: CommitStatus,
    pub issues: Vec<Issue>,
}

/// Query parameters of the history endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<u32>,
}

impl HistoryQuery {
    /// Rows returned when the caller does not pass a limit
    pub const DEFAULT_LIMIT: u32 = 5;

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// One past analysis with its issues, as served by the history endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitHistoryEntry {
    pub commit_id: String,
    pub repo_url: String,
    pub status: CommitStatus,
    pub timestamp: DateTime<Utc>,
    pub issues: Vec<Issue>,
}

impl From<AnalyzedCommit> for CommitHistoryEntry {
    fn from(commit: AnalyzedCommit) -> Self {
        Self {
            commit_id: commit.commit_id,
            repo_url: commit.repo_url,
            status: commit.status,
            timestamp: commit.recorded_at,
            issues: commit.issues,
        }
    }
}

/// History response: past evaluations, most-recent-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub commits: Vec<CommitHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_domain_types::IssueKind;

    #[test]
    fn analyze_request_requires_a_file_list() {
        let payload = r#"{"commit_id": "abc", "repo_url": "https://repo.example/r.git"}"#;
        assert!(serde_json::from_str::<AnalyzeRequest>(payload).is_err());
    }

    #[test]
    fn analyze_request_accepts_an_empty_file_list() {
        let payload = r#"{"commit_id": "abc", "repo_url": "https://repo.example/r.git", "files": []}"#;
        let request: AnalyzeRequest = serde_json::from_str(payload).unwrap();
        assert!(request.files.is_empty());
    }

    #[test]
    fn analyze_response_serializes_wire_names() {
        let response = AnalyzeResponse {
            commit_id: "abc".to_string(),
            status: CommitStatus::Fail,
            issues: vec![Issue {
                kind: IssueKind::Secret,
                filename: "a.py".to_string(),
                line: 3,
                message: "Possible hardcoded secret detected".to_string(),
                retries: 0,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["issues"][0]["type"], "secret");
    }

    #[test]
    fn history_limit_defaults_to_five() {
        let query: HistoryQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, None);
        assert_eq!(query.effective_limit(), 5);

        let query: HistoryQuery = serde_json::from_str(r#"{"limit": 2}"#).unwrap();
        assert_eq!(query.effective_limit(), 2);
    }

    #[test]
    fn history_entry_maps_recorded_at_to_timestamp() {
        let commit = AnalyzedCommit {
            commit_id: "abc".to_string(),
            repo_url: "https://repo.example/r.git".to_string(),
            status: CommitStatus::Pass,
            recorded_at: Utc::now(),
            issues: vec![],
        };
        let recorded_at = commit.recorded_at;

        let entry = CommitHistoryEntry::from(commit);
        assert_eq!(entry.timestamp, recorded_at);
        assert!(entry.issues.is_empty());

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("timestamp").is_some());
    }
}
