// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Collecting the messages to check from the command line.

use std::io::Read;
use std::path::Path;

use crate::error::{InputError, Result};
use crate::report::RawMessage;

use super::args::CheckArgs;

/// Identity of the pull-request title.
pub const TITLE_IDENTITY: &str = "PR title";

/// Gather messages in order: title, batch entries, `--message` texts, files.
///
/// With no inputs at all, one message is read from stdin.
pub fn collect_messages(args: &CheckArgs) -> Result<Vec<RawMessage>> {
    if args.is_empty() {
        return Ok(vec![RawMessage::new("stdin", read_source(Path::new("-"))?)]);
    }

    let mut messages = Vec::new();

    if let Some(ref title) = args.title {
        messages.push(RawMessage::new(TITLE_IDENTITY, title.clone()));
    }

    if let Some(ref batch) = args.batch {
        messages.extend(parse_batch(&source_name(batch), &read_source(batch)?)?);
    }

    for (i, text) in args.messages.iter().enumerate() {
        messages.push(RawMessage::new(format!("message #{}", i + 1), text.clone()));
    }

    for path in &args.files {
        let text = read_source(path)?;
        messages.push(RawMessage::new(format!("file {}", source_name(path)), text));
    }

    tracing::debug!("Collected {} messages", messages.len());
    Ok(messages)
}

/// Parse a JSON batch: an array of `{"identity": ..., "message": ...}`.
pub fn parse_batch(source_name: &str, content: &str) -> Result<Vec<RawMessage>> {
    serde_json::from_str(content).map_err(|e| {
        InputError::InvalidBatch {
            source_name: source_name.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a file, or stdin for `-`.
fn read_source(path: &Path) -> Result<String> {
    let read = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };

    read.map_err(|e| {
        InputError::ReadFailed {
            source_name: source_name(path),
            message: e.to_string(),
        }
        .into()
    })
}
