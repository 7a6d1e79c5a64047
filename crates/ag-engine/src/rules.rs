// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Line rules
//!
//! A rule is a capability that tests one line and reports whether it
//! violates policy. The detector and lint checker orchestrate rules without
//! knowing their internals, so the signature set can grow without touching
//! the evaluator.

use ag_domain_types::IssueKind;
use regex::{Regex, RegexBuilder};

/// Regex matched against every line by the default secret rule: the literal
/// word "password", or "api" followed by an optional `_`/`-` separator and
/// "key".
pub const DEFAULT_SECRET_PATTERN: &str = r"(password|api[_-]?key)";

/// Substring that marks a line as a lint violation under the default rule
pub const PRINT_CALL_MARKER: &str = "print(";

/// A predicate over a single line of a submitted file
pub trait LineRule: Send + Sync {
    /// Category of the issues this rule produces
    fn kind(&self) -> IssueKind;

    /// Message attached to every issue this rule produces
    fn message(&self) -> &str;

    /// Test one line. The rule must be pure: no side effects, same answer
    /// for the same line.
    fn matches(&self, line: &str) -> bool;
}

/// Case-insensitive regex rule for hardcoded secret signatures
pub struct SecretPatternRule {
    pattern: Regex,
}

impl SecretPatternRule {
    /// Compile a secret signature. The pattern is applied case-insensitively.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }
}

impl Default for SecretPatternRule {
    fn default() -> Self {
        // The builtin pattern is a constant and always compiles.
        Self::new(DEFAULT_SECRET_PATTERN).expect("builtin secret pattern compiles")
    }
}

impl LineRule for SecretPatternRule {
    fn kind(&self) -> IssueKind {
        IssueKind::Secret
    }

    fn message(&self) -> &str {
        "Possible hardcoded secret detected"
    }

    fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Substring rule flagging `print(` calls left in production code
#[derive(Default)]
pub struct PrintStatementRule;

impl LineRule for PrintStatementRule {
    fn kind(&self) -> IssueKind {
        IssueKind::Lint
    }

    fn message(&self) -> &str {
        "Avoid print statements in production code"
    }

    fn matches(&self, line: &str) -> bool {
        line.contains(PRINT_CALL_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_rule_matches_case_insensitively() {
        let rule = SecretPatternRule::default();
        assert!(rule.matches("password = \"hunter2\""));
        assert!(rule.matches("PASSWORD=abc"));
        assert!(rule.matches("Password123"));
        assert!(rule.matches("API_KEY = \"sk-1\""));
        assert!(rule.matches("api-key: value"));
        assert!(rule.matches("apikey=value"));
    }

    #[test]
    fn secret_rule_ignores_clean_lines() {
        let rule = SecretPatternRule::default();
        assert!(!rule.matches("x = 1"));
        assert!(!rule.matches("keyboard = input()"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn secret_rule_rejects_invalid_pattern() {
        assert!(SecretPatternRule::new("(unclosed").is_err());
    }

    #[test]
    fn print_rule_matches_call_sites_only() {
        let rule = PrintStatementRule;
        assert!(rule.matches("print(x)"));
        assert!(rule.matches("    print(\"debug\")"));
        assert!(!rule.matches("pprint = 1"));
        assert!(!rule.matches("println_disabled"));
    }
}
