// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report module: checking batches of messages and presenting the outcome.
//!
//! A batch is usually a pull-request title followed by the messages of the
//! commits in the pull request. Every message is checked, and the batch
//! passes only if every message does.

mod aggregate;
mod render;

pub use aggregate::{validate_all, validate_all_parallel, RawMessage, Report};
pub use render::{render, render_github, render_json, render_text, strip_ansi, OutputFormat};

/// Process exit code for a report: `0` when it passed, `1` otherwise.
pub fn exit_code(report: &Report) -> i32 {
    if report.valid {
        0
    } else {
        1
    }
}
