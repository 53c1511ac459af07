// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Syntax errors produced by the message parser.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A 1-based position inside a raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl Location {
    /// Create a location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The start of a line.
    pub fn line(line: usize) -> Self {
        Self { line, column: 1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The ways a message can fail to decompose into a conventional commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// The first line does not look like a conventional commit header at all.
    NotAConventionalCommit,
    /// The header starts with a scope, `!` or `:` instead of a type.
    EmptyType,
    /// The type contains characters other than lowercase letters and digits.
    InvalidType,
    /// The type is not followed by `": "`.
    MissingSeparator,
    /// Unbalanced or empty scope parenthesis.
    MalformedScope,
    /// Nothing follows the separator.
    EmptyDescription,
    /// A non-footer line inside the footer block.
    FooterInterrupted,
}

impl SyntaxErrorKind {
    /// Stable identifier of the error.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxErrorKind::NotAConventionalCommit => "not-a-conventional-commit",
            SyntaxErrorKind::EmptyType => "empty-type",
            SyntaxErrorKind::InvalidType => "invalid-type",
            SyntaxErrorKind::MissingSeparator => "missing-separator",
            SyntaxErrorKind::MalformedScope => "malformed-scope",
            SyntaxErrorKind::EmptyDescription => "empty-description",
            SyntaxErrorKind::FooterInterrupted => "footer-interrupted",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message that cannot be parsed as a conventional commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {location}: {message}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Human-readable explanation.
    pub message: String,
    /// Where it went wrong.
    pub location: Location,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new(
            SyntaxErrorKind::MissingSeparator,
            Location::new(1, 5),
            "expected ':' after the type",
        );
        assert_eq!(
            err.to_string(),
            "missing-separator at 1:5: expected ':' after the type"
        );
    }
}
