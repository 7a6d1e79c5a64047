// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Row types mirroring the storage schema
//!
//! These are storage-shaped (status and kind as strings); conversion to
//! domain types happens at the caller.

/// One row of the `commits` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRow {
    /// Assigned by the database on insert
    pub id: i64,
    pub commit_id: String,
    pub repo_url: String,
    pub status: String,
    /// RFC 3339, assigned server-side at insert time
    pub recorded_at: String,
}

/// One row of the `issues` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    /// Assigned by the database on insert
    pub id: i64,
    pub commit_id: String,
    pub kind: String,
    pub filename: String,
    pub line: u32,
    pub message: String,
    pub retries: u32,
}
