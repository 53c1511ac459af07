// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::{Location, ParsedMessage};
use crate::config::Config;
use lazy_static::lazy_static;
use regex::Regex;

use super::validator::{Code, Finding};

lazy_static! {
    static ref SCOPE_TOKEN_REGEX: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

/// Largest edit distance for which an unknown type gets a suggestion.
const SUGGESTION_MAX_DISTANCE: usize = 2;

/// Words ending in -ed or -ing that are already imperative.
const IMPERATIVE_EXCEPTIONS: &[&str] = &[
    "bed", "bring", "embed", "exceed", "feed", "fling", "need", "ping", "proceed", "ring", "seed",
    "shed", "sing", "sling", "speed", "spring", "sting", "string", "succeed", "swing", "wing",
];

/// Apply all built-in rules to a parsed message, in a fixed order.
///
/// Every rule runs, so one pass reports every problem with the message.
pub fn apply_builtin_rules(message: &ParsedMessage, config: &Config) -> Vec<Finding> {
    let checks = [
        check_type_enum(message, config),
        check_scope_format(message),
        check_subject_length(message, config),
        check_subject_case(message),
        check_subject_terminal_period(message),
        check_imperative_mood(message, config),
        check_breaking_consistency(message),
        check_body_blank_line(message),
    ];

    checks.into_iter().flatten().collect()
}

/// Column where the description starts in the header.
fn description_column(message: &ParsedMessage) -> usize {
    message
        .header
        .find(&message.description)
        .map(|idx| message.header[..idx].chars().count() + 1)
        .unwrap_or(1)
}

/// Check that the type is allowed, suggesting the closest known type.
fn check_type_enum(message: &ParsedMessage, config: &Config) -> Option<Finding> {
    let commit_type = message.commit_type.as_str();
    if config.resolve_type(commit_type).is_some() {
        return None;
    }

    let finding = Finding::new(
        Code::UnknownType,
        format!("Commit type '{}' is not allowed", commit_type),
    )
    .at(Location::line(1));

    let candidates = config
        .allowed_types
        .iter()
        .chain(config.custom_type_aliases.keys());

    match nearest(commit_type, candidates) {
        Some(known) => Some(finding.with_suggestion(format!("Did you mean '{}'?", known))),
        None => Some(finding.with_suggestion(format!(
            "Use one of: {}",
            config.allowed_types.join(", ")
        ))),
    }
}

/// The candidate closest to `word`, if it is within the suggestion distance.
///
/// Ties go to the candidate listed first.
fn nearest<'a>(word: &str, candidates: impl Iterator<Item = &'a String>) -> Option<&'a str> {
    let mut best: Option<(usize, &'a str)> = None;
    for candidate in candidates {
        let distance = edit_distance(word, candidate);
        if distance <= SUGGESTION_MAX_DISTANCE && best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, candidate.as_str()));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Levenshtein distance over characters.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        prev = current;
    }

    prev[b.len()]
}

/// Check that each scope token is lowercase kebab-case.
fn check_scope_format(message: &ParsedMessage) -> Option<Finding> {
    let scope = message.scope.as_ref()?;
    let invalid: Vec<&str> = scope
        .iter()
        .filter(|token| !SCOPE_TOKEN_REGEX.is_match(token))
        .map(String::as_str)
        .collect();

    if invalid.is_empty() {
        return None;
    }

    let column = message.header.find('(').map(|idx| idx + 2).unwrap_or(1);
    Some(
        Finding::new(
            Code::InvalidScopeFormat,
            format!(
                "Scope '{}' may only contain lowercase letters, digits and '-'",
                invalid.join("', '")
            ),
        )
        .with_suggestion(format!(
            "Use a scope like '{}'",
            invalid[0].to_lowercase().replace([' ', '_', '/', '.'], "-")
        ))
        .at(Location::new(1, column)),
    )
}

/// Check the length of the full header line.
fn check_subject_length(message: &ParsedMessage, config: &Config) -> Option<Finding> {
    let max = config.max_subject_length;
    let len = message.header.chars().count();

    if len > max {
        Some(
            Finding::new(
                Code::SubjectTooLong,
                format!("Header is too long: {} characters (max: {})", len, max),
            )
            .with_suggestion(format!("Shorten the header to {} characters or less", max))
            .at(Location::new(1, max + 1)),
        )
    } else {
        None
    }
}

/// Check if the description starts with lowercase.
fn check_subject_case(message: &ParsedMessage) -> Option<Finding> {
    let first_char = message.description.chars().next()?;

    if first_char.is_uppercase() {
        Some(
            Finding::new(Code::SubjectCase, "Description should start with lowercase")
                .with_suggestion("Start the description with a lowercase letter")
                .at(Location::new(1, description_column(message))),
        )
    } else {
        None
    }
}

/// Check if the description ends with a period.
fn check_subject_terminal_period(message: &ParsedMessage) -> Option<Finding> {
    if message.description.ends_with('.') {
        Some(
            Finding::new(
                Code::SubjectEndsWithPeriod,
                "Description should not end with a period",
            )
            .with_suggestion("Remove the trailing period")
            .at(Location::new(1, message.header.chars().count())),
        )
    } else {
        None
    }
}

/// Check if the description starts in imperative mood.
fn check_imperative_mood(message: &ParsedMessage, config: &Config) -> Option<Finding> {
    if !config.enforce_imperative_mood {
        return None;
    }

    let first_word = message.description.split_whitespace().next()?;
    let lower = first_word
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let suffix = ["ed", "ing"].into_iter().find(|s| lower.ends_with(s))?;
    if lower.len() <= suffix.len() + 1 || IMPERATIVE_EXCEPTIONS.contains(&lower.as_str()) {
        return None;
    }

    Some(
        Finding::new(
            Code::SubjectNotImperative,
            format!(
                "Description should use imperative mood (found '{}')",
                first_word
            ),
        )
        .with_suggestion("Use imperative form, e.g. 'add' instead of 'added' or 'adding'")
        .at(Location::new(1, description_column(message))),
    )
}

/// Check that a breaking-change footer explains the break.
fn check_breaking_consistency(message: &ParsedMessage) -> Option<Finding> {
    let footer = message.breaking_footers().find(|f| f.value.is_empty())?;

    Some(
        Finding::new(
            Code::EmptyBreakingChangeDescription,
            format!("'{}' footer has no description", footer.key),
        )
        .with_suggestion("Describe what breaks and how to migrate")
        .at(Location::line(footer.line)),
    )
}

/// Check that exactly one blank line separates the header from the rest.
fn check_body_blank_line(message: &ParsedMessage) -> Option<Finding> {
    if !message.has_trailer() || message.header_gap == 1 {
        return None;
    }

    let text = if message.header_gap == 0 {
        "Missing blank line between header and body".to_string()
    } else {
        format!(
            "Expected one blank line between header and body, found {}",
            message.header_gap
        )
    };

    Some(
        Finding::new(Code::MissingBlankLine, text)
            .with_suggestion("Separate the header from the body with exactly one blank line")
            .at(Location::line(2)),
    )
}
