// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::commit::{Location, SyntaxError, SyntaxErrorKind};
use console::{style, Style};
use serde::{Serialize, Serializer};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, never fails the message.
    Warning,
    /// Fails the message.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Finding codes for programmatic handling.
///
/// The first group comes from the parser, the second from the rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    NotAConventionalCommit,
    EmptyType,
    InvalidType,
    MissingSeparator,
    MalformedScope,
    EmptyDescription,
    FooterInterrupted,

    UnknownType,
    InvalidScopeFormat,
    SubjectTooLong,
    SubjectCase,
    SubjectEndsWithPeriod,
    SubjectNotImperative,
    EmptyBreakingChangeDescription,
    MissingBlankLine,
}

impl Code {
    /// Stable identifier of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::NotAConventionalCommit => "not-a-conventional-commit",
            Code::EmptyType => "empty-type",
            Code::InvalidType => "invalid-type",
            Code::MissingSeparator => "missing-separator",
            Code::MalformedScope => "malformed-scope",
            Code::EmptyDescription => "empty-description",
            Code::FooterInterrupted => "footer-interrupted",
            Code::UnknownType => "unknown-type",
            Code::InvalidScopeFormat => "invalid-scope-format",
            Code::SubjectTooLong => "subject-too-long",
            Code::SubjectCase => "subject-case",
            Code::SubjectEndsWithPeriod => "subject-ends-with-period",
            Code::SubjectNotImperative => "subject-not-imperative",
            Code::EmptyBreakingChangeDescription => "empty-breaking-change-description",
            Code::MissingBlankLine => "missing-blank-line",
        }
    }

    /// The fixed severity of findings with this code.
    pub fn severity(&self) -> Severity {
        match self {
            Code::SubjectTooLong
            | Code::SubjectCase
            | Code::SubjectEndsWithPeriod
            | Code::SubjectNotImperative => Severity::Warning,
            Code::NotAConventionalCommit
            | Code::EmptyType
            | Code::InvalidType
            | Code::MissingSeparator
            | Code::MalformedScope
            | Code::EmptyDescription
            | Code::FooterInterrupted
            | Code::UnknownType
            | Code::InvalidScopeFormat
            | Code::EmptyBreakingChangeDescription
            | Code::MissingBlankLine => Severity::Error,
        }
    }
}

impl From<SyntaxErrorKind> for Code {
    fn from(kind: SyntaxErrorKind) -> Self {
        match kind {
            SyntaxErrorKind::NotAConventionalCommit => Code::NotAConventionalCommit,
            SyntaxErrorKind::EmptyType => Code::EmptyType,
            SyntaxErrorKind::InvalidType => Code::InvalidType,
            SyntaxErrorKind::MissingSeparator => Code::MissingSeparator,
            SyntaxErrorKind::MalformedScope => Code::MalformedScope,
            SyntaxErrorKind::EmptyDescription => Code::EmptyDescription,
            SyntaxErrorKind::FooterInterrupted => Code::FooterInterrupted,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Finding code for programmatic handling.
    pub code: Code,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Where in the message the problem is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Finding {
    /// Create a finding with the severity fixed by its code.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            suggestion: None,
            location: None,
        }
    }

    /// Set the suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the finding for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(self.code.as_str()),
            self.message
        );

        if let Some(location) = self.location {
            output.push_str(&format!(" {}", style(format!("(at {})", location)).dim()));
        }

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

impl From<SyntaxError> for Finding {
    fn from(err: SyntaxError) -> Self {
        Finding::new(err.kind.into(), err.message).at(err.location)
    }
}

/// Outcome of validating one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Identity of the message, e.g. "PR title" or "commit 1a2b3c4".
    pub identity: String,
    /// True iff no finding has error severity.
    pub valid: bool,
    /// Findings in rule order.
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    /// Wrap findings, deriving `valid` from their severities.
    pub fn new(identity: impl Into<String>, findings: Vec<Finding>) -> Self {
        let valid = !findings.iter().any(Finding::is_error);
        Self {
            identity: identity.into(),
            valid,
            findings,
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();

        if self.is_valid() {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}
