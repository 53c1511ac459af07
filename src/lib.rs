// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional commit gate for pull requests
//!
//! Validates pull-request titles and commit messages against the
//! Conventional Commits format and produces a single pass/fail verdict.
//!
//! # Features
//!
//! - **Parser**: decomposes messages into type, scope, description, body and
//!   footers, with precise, coded syntax errors
//! - **Rule Engine**: type vocabulary, scope format, length and style checks,
//!   each finding carrying a fixed error or warning severity
//! - **Reports**: ordered per-message results, rendered as text, JSON or
//!   GitHub Actions annotations
//!
//! # Example
//!
//! ```
//! use commitgate::config::Config;
//! use commitgate::report::{validate_all, RawMessage};
//! use commitgate::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(Config::default()).unwrap();
//! let report = validate_all(
//!     &engine,
//!     &[
//!         RawMessage::new("PR title", "feat(auth): add login"),
//!         RawMessage::new("commit 1a2b3c4", "Added login"),
//!     ],
//! );
//!
//! assert!(!report.valid);
//! assert!(report.results[0].valid);
//! assert_eq!(report.results[1].findings[0].code.as_str(), "not-a-conventional-commit");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use error::{GateError, Result};
pub use report::{validate_all, RawMessage, Report};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
