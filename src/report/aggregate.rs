// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Running the engine over an ordered batch of messages.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::rules::{Finding, RuleEngine, ValidationResult};

/// One message to check, with the label used when reporting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Identity label, e.g. "PR title" or "commit 1a2b3c4".
    pub identity: String,
    /// The message text as written.
    pub message: String,
}

impl RawMessage {
    pub fn new(identity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            message: message.into(),
        }
    }
}

/// Outcome of checking a batch of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// True iff every result is valid.
    pub valid: bool,
    /// One result per input message, in input order.
    pub results: Vec<ValidationResult>,
}

impl Report {
    /// Build a report from results already in input order.
    pub fn new(results: Vec<ValidationResult>) -> Self {
        let valid = results.iter().all(ValidationResult::is_valid);
        Self { valid, results }
    }

    /// Every finding, tagged with the identity of its message.
    pub fn findings(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.results
            .iter()
            .flat_map(|r| r.findings.iter().map(move |f| (r.identity.as_str(), f)))
    }

    /// Error-severity findings, tagged with the identity of their message.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.findings().filter(|(_, f)| f.is_error())
    }

    /// Number of messages that failed.
    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_valid()).count()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let warnings = self.findings().filter(|(_, f)| !f.is_error()).count();
        format!(
            "{} of {} messages failed ({} errors, {} warnings)",
            self.invalid_count(),
            self.results.len(),
            self.errors().count(),
            warnings
        )
    }
}

/// Check every message in order.
///
/// Never stops early: the report holds one result per input message.
pub fn validate_all(engine: &RuleEngine, messages: &[RawMessage]) -> Report {
    tracing::debug!("Checking {} messages", messages.len());

    let results = messages
        .iter()
        .map(|m| engine.check(&m.identity, &m.message))
        .collect();

    Report::new(results)
}

/// Check every message on a pool of `jobs` worker threads.
///
/// Produces the same report as [`validate_all`]: each result is stored in
/// the slot of its input message, whatever order the workers finish in.
pub fn validate_all_parallel(engine: &RuleEngine, messages: &[RawMessage], jobs: usize) -> Report {
    let jobs = jobs.clamp(1, messages.len().max(1));
    if jobs == 1 {
        return validate_all(engine, messages);
    }

    tracing::debug!("Checking {} messages on {} workers", messages.len(), jobs);

    let slots: Vec<OnceLock<ValidationResult>> = messages.iter().map(|_| OnceLock::new()).collect();
    let next = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..jobs {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(message) = messages.get(index) else {
                    break;
                };
                let _ = slots[index].set(engine.check(&message.identity, &message.message));
            });
        }
    });

    let results = slots
        .into_iter()
        .zip(messages)
        .map(|(slot, message)| {
            slot.into_inner()
                .unwrap_or_else(|| engine.check(&message.identity, &message.message))
        })
        .collect();

    Report::new(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rules::Code;

    fn engine() -> RuleEngine {
        RuleEngine::new(Config::default()).unwrap()
    }

    fn batch() -> Vec<RawMessage> {
        vec![
            RawMessage::new("PR title", "feat(auth): add login"),
            RawMessage::new("commit 1111111", "feat(auth): add login form"),
            RawMessage::new("commit 2222222", "Added session handling"),
            RawMessage::new("commit 3333333", "test(auth): cover login form"),
        ]
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let report = validate_all(&engine(), &[]);
        assert!(report.valid);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_one_bad_commit_fails_batch() {
        let report = validate_all(&engine(), &batch());
        assert!(!report.valid);
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.invalid_count(), 1);
        assert!(!report.results[2].valid);
        assert_eq!(report.results[2].findings[0].code, Code::NotAConventionalCommit);
    }

    #[test]
    fn test_order_is_preserved() {
        let messages = batch();
        let report = validate_all(&engine(), &messages);
        for (message, result) in messages.iter().zip(&report.results) {
            assert_eq!(message.identity, result.identity);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let messages = batch();
        let first = validate_all(&engine(), &messages);
        let second = validate_all(&engine(), &messages);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut messages = batch();
        for i in 0..50 {
            let text = if i % 7 == 0 {
                format!("oops number {}", i)
            } else {
                format!("fix(core): handle case {}", i)
            };
            messages.push(RawMessage::new(format!("commit {:07}", i), text));
        }

        let sequential = validate_all(&engine(), &messages);
        let parallel = validate_all_parallel(&engine(), &messages, 4);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_empty_and_oversized_pool() {
        assert!(validate_all_parallel(&engine(), &[], 8).valid);

        let messages = batch();
        let report = validate_all_parallel(&engine(), &messages, 64);
        assert_eq!(report.results.len(), messages.len());
    }

    #[test]
    fn test_errors_are_tagged_with_identity() {
        let report = validate_all(&engine(), &batch());
        let errors: Vec<(&str, Code)> = report.errors().map(|(id, f)| (id, f.code)).collect();
        assert_eq!(errors, vec![("commit 2222222", Code::NotAConventionalCommit)]);
        assert!(report.summary().starts_with("1 of 4 messages failed"));
    }
}
