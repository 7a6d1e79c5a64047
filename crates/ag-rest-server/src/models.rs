// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Result store implementations
//!
//! The engine's `ResultStore` capability has two implementations here: the
//! SQLite-backed store used in production and an in-memory store used as a
//! test double and for throwaway dev servers.

use ag_domain_types::{AnalyzedCommit, CommitStatus, Issue, IssueKind};
use ag_engine::ResultStore;
use ag_local_db::{CommitRow, Database, IssueRow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// SQLite-backed result store
pub struct DatabaseResultStore {
    db: Arc<Database>,
}

impl DatabaseResultStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn commit_to_row(commit: &AnalyzedCommit) -> CommitRow {
        CommitRow {
            id: 0, // assigned by the database
            commit_id: commit.commit_id.clone(),
            repo_url: commit.repo_url.clone(),
            status: commit.status.as_str().to_string(),
            recorded_at: commit.recorded_at.to_rfc3339(),
        }
    }

    fn issue_to_row(commit_id: &str, issue: &Issue) -> IssueRow {
        IssueRow {
            id: 0,
            commit_id: commit_id.to_string(),
            kind: issue.kind.as_str().to_string(),
            filename: issue.filename.clone(),
            line: issue.line,
            message: issue.message.clone(),
            retries: issue.retries,
        }
    }

    fn row_to_commit(row: CommitRow, issues: Vec<IssueRow>) -> AnalyzedCommit {
        AnalyzedCommit {
            commit_id: row.commit_id,
            repo_url: row.repo_url,
            status: row.status.parse().unwrap_or(CommitStatus::Fail),
            recorded_at: DateTime::parse_from_rfc3339(&row.recorded_at)
                .map(Into::into)
                .unwrap_or_else(|_| Utc::now()),
            issues: issues.into_iter().map(Self::row_to_issue).collect(),
        }
    }

    fn row_to_issue(row: IssueRow) -> Issue {
        Issue {
            kind: row.kind.parse().unwrap_or(IssueKind::Lint),
            filename: row.filename,
            line: row.line,
            message: row.message,
            retries: row.retries,
        }
    }
}

#[async_trait]
impl ResultStore for DatabaseResultStore {
    async fn record_analysis(&self, commit: &AnalyzedCommit) -> anyhow::Result<()> {
        let conn = self
            .db
            .connection()
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to get database connection: {}", e))?;

        // The commit row goes first so its issues stay attributable.
        let commits = ag_local_db::CommitStore::new(&conn);
        commits.insert(&Self::commit_to_row(commit))?;

        // Issue failures are tolerated without rolling back the commit row.
        let issues = ag_local_db::IssueStore::new(&conn);
        for issue in &commit.issues {
            if let Err(err) = issues.insert(&Self::issue_to_row(&commit.commit_id, issue)) {
                tracing::warn!(
                    "Failed to save issue for commit {} ({} line {}): {}",
                    commit.commit_id,
                    issue.filename,
                    issue.line,
                    err
                );
            }
        }

        Ok(())
    }

    async fn fetch_history(&self, limit: u32) -> anyhow::Result<Vec<AnalyzedCommit>> {
        let conn = self
            .db
            .connection()
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to get database connection: {}", e))?;
        let commits = ag_local_db::CommitStore::new(&conn);
        let issues = ag_local_db::IssueStore::new(&conn);

        let mut history = Vec::new();
        for row in commits.recent(limit)? {
            let issue_rows = issues.for_commit(&row.commit_id)?;
            history.push(Self::row_to_commit(row, issue_rows));
        }

        Ok(history)
    }
}

/// In-memory result store implementation (for development/testing)
#[derive(Default)]
pub struct InMemoryResultStore {
    commits: RwLock<Vec<AnalyzedCommit>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn record_analysis(&self, commit: &AnalyzedCommit) -> anyhow::Result<()> {
        self.commits.write().await.push(commit.clone());
        Ok(())
    }

    async fn fetch_history(&self, limit: u32) -> anyhow::Result<Vec<AnalyzedCommit>> {
        let commits = self.commits.read().await;
        Ok(commits.iter().rev().take(limit as usize).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(commit_id: &str, issues: Vec<Issue>) -> AnalyzedCommit {
        AnalyzedCommit {
            commit_id: commit_id.to_string(),
            repo_url: "https://repo.example/acme.git".to_string(),
            status: CommitStatus::from_issue_count(issues.len()),
            recorded_at: Utc::now(),
            issues,
        }
    }

    fn lint_issue(line: u32) -> Issue {
        Issue {
            kind: IssueKind::Lint,
            filename: "a.py".to_string(),
            line,
            message: "Avoid print statements in production code".to_string(),
            retries: 3,
        }
    }

    fn secret_issue(line: u32) -> Issue {
        Issue {
            kind: IssueKind::Secret,
            filename: "a.py".to_string(),
            line,
            message: "Possible hardcoded secret detected".to_string(),
            retries: 0,
        }
    }

    #[tokio::test]
    async fn database_store_round_trips_commits_and_issues() {
        let store =
            DatabaseResultStore::new(Arc::new(Database::open_in_memory().unwrap()));

        store
            .record_analysis(&commit("abc", vec![lint_issue(2), secret_issue(3)]))
            .await
            .unwrap();
        store.record_analysis(&commit("def", vec![])).await.unwrap();

        let history = store.fetch_history(5).await.unwrap();
        assert_eq!(history.len(), 2);

        // Most recent first; issue order within a commit is emission order.
        assert_eq!(history[0].commit_id, "def");
        assert_eq!(history[0].status, CommitStatus::Pass);
        assert!(history[0].issues.is_empty());

        assert_eq!(history[1].commit_id, "abc");
        assert_eq!(history[1].status, CommitStatus::Fail);
        let kinds: Vec<IssueKind> = history[1].issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::Lint, IssueKind::Secret]);
        assert_eq!(history[1].issues[0].retries, 3);
    }

    #[tokio::test]
    async fn database_store_honors_the_row_limit() {
        let store =
            DatabaseResultStore::new(Arc::new(Database::open_in_memory().unwrap()));

        for id in ["one", "two", "three"] {
            store.record_analysis(&commit(id, vec![])).await.unwrap();
        }

        let history = store.fetch_history(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].commit_id, "three");

        // A limit beyond the available rows returns everything.
        assert_eq!(store.fetch_history(50).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn reanalysis_appends_instead_of_updating() {
        let store =
            DatabaseResultStore::new(Arc::new(Database::open_in_memory().unwrap()));

        store.record_analysis(&commit("same", vec![])).await.unwrap();
        store.record_analysis(&commit("same", vec![])).await.unwrap();

        let history = store.fetch_history(10).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|entry| entry.commit_id == "same"));
    }

    #[tokio::test]
    async fn in_memory_store_matches_database_semantics() {
        let store = InMemoryResultStore::new();

        store
            .record_analysis(&commit("abc", vec![lint_issue(2), secret_issue(3)]))
            .await
            .unwrap();
        store.record_analysis(&commit("def", vec![])).await.unwrap();

        let history = store.fetch_history(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].commit_id, "def");

        let all = store.fetch_history(10).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].issues.len(), 2);
    }
}
