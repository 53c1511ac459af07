// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{self, ParsedMessage};
use crate::config::Config;
use crate::error::Result;

use super::builtin::apply_builtin_rules;
use super::validator::{Finding, ValidationResult};

/// Rule engine for validating commit messages.
///
/// Construction validates the configuration, so an engine always holds a
/// usable rule set.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: Config,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this engine checks against.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every rule against a parsed message.
    pub fn validate(&self, message: &ParsedMessage) -> Vec<Finding> {
        apply_builtin_rules(message, &self.config)
    }

    /// Parse and validate one raw message.
    ///
    /// A syntax error becomes the single finding of an invalid result.
    pub fn check(&self, identity: &str, raw: &str) -> ValidationResult {
        let findings = match commit::parse(raw) {
            Ok(parsed) => self.validate(&parsed),
            Err(err) => {
                tracing::debug!("{}: {}", identity, err);
                vec![Finding::from(err)]
            }
        };

        let result = ValidationResult::new(identity, findings);
        tracing::debug!("{}: {}", identity, result.summary());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Code;

    fn engine() -> RuleEngine {
        RuleEngine::new(Config::default()).unwrap()
    }

    #[test]
    fn test_rule_engine_rejects_bad_config() {
        let config = Config {
            max_subject_length: 0,
            ..Config::default()
        };
        assert!(RuleEngine::new(config).is_err());
    }

    #[test]
    fn test_check_valid_message() {
        let result = engine().check("PR title", "feat: add login");
        assert!(result.is_valid());
        assert!(result.findings.is_empty());
        assert_eq!(result.identity, "PR title");
    }

    #[test]
    fn test_check_prose_message() {
        let result = engine().check("commit 1a2b3c4", "Added login");
        assert!(!result.is_valid());
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].code, Code::NotAConventionalCommit);
    }

    #[test]
    fn test_check_unknown_type() {
        let result = engine().check("commit 1a2b3c4", "feet(auth): add login");
        assert!(!result.is_valid());
        assert_eq!(result.findings[0].code, Code::UnknownType);
        assert!(result.findings[0]
            .suggestion
            .as_deref()
            .unwrap()
            .contains("feat"));
    }

    #[test]
    fn test_check_empty_breaking_change() {
        let result = engine().check(
            "commit 1a2b3c4",
            "fix(auth)!: remove legacy token\n\nBREAKING CHANGE: ",
        );
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .any(|f| f.code == Code::EmptyBreakingChangeDescription));
    }

    #[test]
    fn test_check_warnings_only() {
        let result = engine().check("commit 1a2b3c4", "fix: Fixed the bug.");
        assert!(result.is_valid());
        assert_eq!(result.errors().count(), 0);
        let codes: Vec<Code> = result.warnings().map(|f| f.code).collect();
        assert!(codes.contains(&Code::SubjectCase));
        assert!(codes.contains(&Code::SubjectEndsWithPeriod));
    }

    #[test]
    fn test_custom_max_length() {
        let config = Config {
            max_subject_length: 10,
            ..Config::default()
        };
        let engine = RuleEngine::new(config).unwrap();
        let result = engine.check("PR title", "feat: add login");
        assert!(result.is_valid());
        assert_eq!(result.findings[0].code, Code::SubjectTooLong);
    }
}
