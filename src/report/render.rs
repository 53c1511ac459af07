// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering reports for terminals, scripts and CI logs.

use console::style;
use lazy_static::lazy_static;
use regex::Regex;

use super::aggregate::Report;
use crate::rules::Finding;

lazy_static! {
    static ref ANSI_REGEX: Regex = Regex::new("\x1b\\[(K|.*?m)").unwrap();
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
    /// GitHub Actions workflow commands
    Github,
}

/// Render a report in the given format.
pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
        OutputFormat::Github => render_github(report),
    }
}

/// A status line per message, followed by its findings.
pub fn render_text(report: &Report) -> String {
    let mut output = String::new();

    for result in &report.results {
        let status = if result.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        output.push_str(&format!(
            "{} {} {}\n",
            status,
            style(&result.identity).cyan(),
            style(result.summary()).dim()
        ));

        for finding in &result.findings {
            output.push_str(&format!("  {}\n", finding.format()));
        }
    }

    let summary = if report.valid {
        style(format!("All {} messages passed", report.results.len()))
            .green()
            .to_string()
    } else {
        style(report.summary()).red().to_string()
    };
    output.push_str(&summary);
    output.push('\n');

    output
}

/// The serialized report.
pub fn render_json(report: &Report) -> String {
    let mut output = serde_json::to_string_pretty(report).unwrap_or_default();
    output.push('\n');
    output
}

/// One workflow command per finding.
pub fn render_github(report: &Report) -> String {
    let mut output = String::new();

    for (identity, finding) in report.findings() {
        let command = if finding.is_error() { "error" } else { "warning" };
        output.push_str(&format!(
            "::{} title={}::{}\n",
            command,
            escape_property(identity),
            escape_data(&annotation_text(finding))
        ));
    }

    output
}

fn annotation_text(finding: &Finding) -> String {
    let mut text = format!("{}: {}", finding.code, finding.message);
    if let Some(location) = finding.location {
        text.push_str(&format!(" (line {}, column {})", location.line, location.column));
    }
    if let Some(ref suggestion) = finding.suggestion {
        text.push('\n');
        text.push_str(suggestion);
    }
    text
}

/// Remove terminal colour codes.
pub fn strip_ansi(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").into_owned()
}

/// Escape a workflow command message; newlines become `%0A`.
fn escape_data(text: &str) -> String {
    strip_ansi(text)
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}
