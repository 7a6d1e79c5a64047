// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Per-table record stores

use crate::records::{CommitRow, IssueRow};
use crate::Result;
use rusqlite::{params, Connection};

/// Append and query rows of the `commits` table
pub struct CommitStore<'a> {
    conn: &'a Connection,
}

impl<'a> CommitStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append a commit row; the `id` field of the input is ignored.
    /// Returns the database-assigned row id.
    pub fn insert(&self, row: &CommitRow) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO commits (commit_id, repo_url, status, recorded_at) \
             VALUES (?1, ?2, ?3, ?4)",
            params![row.commit_id, row.repo_url, row.status, row.recorded_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The `limit` most recently inserted rows, most-recent-first.
    /// A limit larger than the table returns every row.
    pub fn recent(&self, limit: u32) -> Result<Vec<CommitRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, commit_id, repo_url, status, recorded_at \
             FROM commits ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit], |row| {
            Ok(CommitRow {
                id: row.get(0)?,
                commit_id: row.get(1)?,
                repo_url: row.get(2)?,
                status: row.get(3)?,
                recorded_at: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

/// Append and query rows of the `issues` table
pub struct IssueStore<'a> {
    conn: &'a Connection,
}

impl<'a> IssueStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append an issue row; the `id` field of the input is ignored.
    pub fn insert(&self, row: &IssueRow) -> Result<()> {
        self.conn.execute(
            "INSERT INTO issues (commit_id, kind, filename, line, message, retries) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.commit_id,
                row.kind,
                row.filename,
                row.line,
                row.message,
                row.retries
            ],
        )?;
        Ok(())
    }

    /// All issues recorded under `commit_id`, in insertion order
    pub fn for_commit(&self, commit_id: &str) -> Result<Vec<IssueRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, commit_id, kind, filename, line, message, retries \
             FROM issues WHERE commit_id = ?1 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([commit_id], |row| {
            Ok(IssueRow {
                id: row.get(0)?,
                commit_id: row.get(1)?,
                kind: row.get(2)?,
                filename: row.get(3)?,
                line: row.get(4)?,
                message: row.get(5)?,
                retries: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
