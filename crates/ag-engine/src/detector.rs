// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Secret detector

use crate::rules::LineRule;
use ag_domain_types::{Issue, SourceFile};
use std::sync::Arc;

/// Scans every line of every file against the secret rule set.
///
/// Detection is pure: no suspension, no side effects beyond issue
/// construction.
pub struct SecretDetector {
    rules: Vec<Arc<dyn LineRule>>,
}

impl SecretDetector {
    pub fn new(rules: Vec<Arc<dyn LineRule>>) -> Self {
        Self { rules }
    }

    /// Emit one issue per matching line, in file-then-line order.
    ///
    /// A line is tested until the first matching rule; additional
    /// secret-like tokens on the same line are not double-counted.
    pub fn detect(&self, files: &[SourceFile]) -> Vec<Issue> {
        let mut issues = Vec::new();

        for file in files {
            for (index, line) in file.lines().enumerate() {
                if let Some(rule) = self.rules.iter().find(|rule| rule.matches(line)) {
                    tracing::debug!(
                        "secret signature matched in {} at line {}",
                        file.filename,
                        index + 1
                    );
                    issues.push(Issue {
                        kind: rule.kind(),
                        filename: file.filename.clone(),
                        line: (index + 1) as u32,
                        message: rule.message().to_string(),
                        retries: 0,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScanPolicy;
    use ag_domain_types::IssueKind;

    fn detector() -> SecretDetector {
        SecretDetector::new(ScanPolicy::default().secret_rules)
    }

    fn file(content: &str) -> Vec<SourceFile> {
        vec![SourceFile {
            filename: "config.py".to_string(),
            content: content.to_string(),
        }]
    }

    #[test]
    fn flags_each_matching_line_once() {
        // Two secret-like tokens on one line still yield a single issue.
        let issues = detector().detect(&file("password = API_KEY\nsafe = 1\n"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Secret);
        assert_eq!(issues[0].line, 1);
        assert_eq!(issues[0].retries, 0);
        assert_eq!(issues[0].message, "Possible hardcoded secret detected");
    }

    #[test]
    fn reports_one_based_line_numbers() {
        let issues = detector().detect(&file("x = 1\ny = 2\nPassword123\n"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[0].filename, "config.py");
    }

    #[test]
    fn clean_files_produce_no_issues() {
        assert!(detector().detect(&file("x = 1\ny = 2\n")).is_empty());
        assert!(detector().detect(&[]).is_empty());
    }

    #[test]
    fn walks_files_in_submission_order() {
        let files = vec![
            SourceFile {
                filename: "a.py".to_string(),
                content: "api_key = \"k\"".to_string(),
            },
            SourceFile {
                filename: "b.py".to_string(),
                content: "password = \"p\"".to_string(),
            },
        ];

        let issues = detector().detect(&files);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].filename, "a.py");
        assert_eq!(issues[1].filename, "b.py");
    }
}
