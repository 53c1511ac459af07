// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module runs a fixed battery of semantic checks against parsed
//! messages. Each check yields at most one finding, and every finding code
//! carries a fixed severity: only errors fail a message.

mod builtin;
mod engine;
mod validator;

pub use builtin::apply_builtin_rules;
pub use engine::RuleEngine;
pub use validator::{Code, Finding, Severity, ValidationResult};
