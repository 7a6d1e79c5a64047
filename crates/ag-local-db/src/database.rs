// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Database handle and schema management

use crate::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS commits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    commit_id TEXT NOT NULL,
    repo_url TEXT NOT NULL,
    status TEXT NOT NULL,
    recorded_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    commit_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    filename TEXT NOT NULL,
    line INTEGER NOT NULL,
    message TEXT NOT NULL,
    retries INTEGER NOT NULL
);
";

/// Owned SQLite connection guarded for shared use.
///
/// The mutex serializes all access: one commit's rows are written without
/// interleaving, and history reads see a consistent snapshot.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (creating if needed) a database file and apply the schema
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database, mainly for tests and dev servers
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("database schema applied");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Access the guarded connection
    pub fn connection(&self) -> &Mutex<Connection> {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_applies_on_open() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection().lock().unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert!(tables.contains(&"commits".to_string()));
        assert!(tables.contains(&"issues".to_string()));
    }

    #[test]
    fn reopening_a_file_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autoguard.db");

        {
            let db = Database::open(&path).unwrap();
            let conn = db.connection().lock().unwrap();
            conn.execute(
                "INSERT INTO commits (commit_id, repo_url, status, recorded_at) \
                 VALUES ('abc', 'https://repo.example/r.git', 'pass', '2026-01-01T00:00:00Z')",
                [],
            )
            .unwrap();
        }

        let db = Database::open(&path).unwrap();
        let conn = db.connection().lock().unwrap();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM commits", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
