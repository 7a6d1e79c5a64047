// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! SQLite storage for AutoGuard analysis history
//!
//! Two logical tables: `commits` (one row per analysis) and `issues`
//! (zero or more rows per commit, referenced by `commit_id`). Rows are
//! append-only; the autoincrement id doubles as the insertion order that
//! history queries rely on.

pub mod database;
pub mod records;
pub mod stores;

pub use database::Database;
pub use records::{CommitRow, IssueRow};
pub use stores::{CommitStore, IssueStore};

/// Errors surfaced by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, Error>;
