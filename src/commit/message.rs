// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::syntax::{Location, SyntaxError, SyntaxErrorKind};

lazy_static! {
    /// A footer line: `Key: value`, `Key:` or `Key #value`.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?P<key>BREAKING CHANGE|[A-Za-z-]+)(?:(?P<colon>:)(?: (?P<cvalue>.*))?|(?P<hash> #)(?P<hvalue>.*))$"
    ).unwrap();
}

/// How a footer key is separated from its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterSeparator {
    /// `Key: value`
    Colon,
    /// `Key #value`
    Hash,
}

/// A trailing `Key: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub key: String,
    pub separator: FooterSeparator,
    pub value: String,
    /// Line of the footer key within the raw message.
    pub line: usize,
}

impl Footer {
    /// Whether this footer announces a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.separator == FooterSeparator::Colon
            && (self.key == "BREAKING CHANGE" || self.key == "BREAKING-CHANGE")
    }
}

/// A conventional commit message decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    /// Commit type (feat, fix, etc.).
    pub commit_type: String,
    /// Scope tokens, split on commas.
    pub scope: Option<Vec<String>>,
    /// Set by the `!` marker or a breaking-change footer.
    pub breaking: bool,
    /// Header text after `": "`.
    pub description: String,
    /// Free text between the header and the footers.
    pub body: Option<String>,
    pub footers: Vec<Footer>,
    /// The header line as written.
    pub header: String,
    /// Blank lines between the header and the first body or footer line.
    pub header_gap: usize,
}

impl ParsedMessage {
    /// Parse a raw commit message.
    pub fn parse(raw: &str) -> Result<Self, SyntaxError> {
        let normalized = raw.replace("\r\n", "\n");
        let text = normalized.trim_end();

        let mut lines = text.split('\n');
        let header = lines.next().unwrap_or_default();
        let parsed_header = parse_header(header)?;

        let rest: Vec<&str> = lines.collect();
        let header_gap = rest.iter().take_while(|l| l.trim().is_empty()).count();
        let (body, footers) = parse_trailer(&rest[header_gap..], header_gap + 2)?;

        let breaking = parsed_header.bang || footers.iter().any(Footer::is_breaking_change);

        Ok(Self {
            commit_type: parsed_header.commit_type,
            scope: parsed_header.scope,
            breaking,
            description: parsed_header.description,
            body,
            footers,
            header: header.to_string(),
            header_gap,
        })
    }

    /// Whether anything follows the header.
    pub fn has_trailer(&self) -> bool {
        self.body.is_some() || !self.footers.is_empty()
    }

    /// The breaking-change footers, in order.
    pub fn breaking_footers(&self) -> impl Iterator<Item = &Footer> {
        self.footers.iter().filter(|f| f.is_breaking_change())
    }
}

struct Header {
    commit_type: String,
    scope: Option<Vec<String>>,
    bang: bool,
    description: String,
}

/// Character column of a byte offset in the header.
fn column(header: &str, byte_idx: usize) -> usize {
    header[..byte_idx].chars().count() + 1
}

fn parse_header(header: &str) -> Result<Header, SyntaxError> {
    if !header.contains(':') {
        return Err(SyntaxError::new(
            SyntaxErrorKind::NotAConventionalCommit,
            Location::line(1),
            "not a conventional commit: expected a header like 'type(scope): description'",
        ));
    }

    let type_end = header
        .find(|c: char| matches!(c, '(' | '!' | ':') || c.is_whitespace())
        .unwrap_or(header.len());
    let commit_type = &header[..type_end];
    let next = header[type_end..].chars().next();
    let next_is_space = next.map(char::is_whitespace).unwrap_or(false);
    let type_is_clean = commit_type
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if next_is_space && !(type_is_clean && !commit_type.is_empty()) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::NotAConventionalCommit,
            Location::line(1),
            "not a conventional commit: expected a header like 'type(scope): description'",
        ));
    }

    if commit_type.is_empty() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::EmptyType,
            Location::line(1),
            "the header must start with a commit type",
        ));
    }

    if next_is_space {
        return Err(SyntaxError::new(
            SyntaxErrorKind::MissingSeparator,
            Location::new(1, column(header, type_end)),
            format!("expected ':' directly after the type '{}'", commit_type),
        ));
    }

    if let Some((idx, c)) = commit_type
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
    {
        return Err(SyntaxError::new(
            SyntaxErrorKind::InvalidType,
            Location::new(1, column(header, idx)),
            format!(
                "type '{}' may only contain lowercase letters and digits (found '{}')",
                commit_type, c
            ),
        ));
    }

    let mut pos = type_end;
    let mut scope = None;

    if header[pos..].starts_with('(') {
        let open = pos;
        let close = header[open + 1..]
            .find(')')
            .map(|i| open + 1 + i)
            .ok_or_else(|| {
                SyntaxError::new(
                    SyntaxErrorKind::MalformedScope,
                    Location::new(1, column(header, open)),
                    "scope has no closing parenthesis",
                )
            })?;
        let inner = &header[open + 1..close];

        if let Some(nested) = inner.find('(') {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MalformedScope,
                Location::new(1, column(header, open + 1 + nested)),
                "scope may not contain '('",
            ));
        }
        if inner.trim().is_empty() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MalformedScope,
                Location::new(1, column(header, open)),
                "scope is empty; remove the parentheses or name a scope",
            ));
        }

        let tokens: Vec<String> = inner.split(',').map(|t| t.trim().to_string()).collect();
        if tokens.iter().any(String::is_empty) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MalformedScope,
                Location::new(1, column(header, open + 1)),
                format!("scope '{}' contains an empty entry", inner),
            ));
        }

        scope = Some(tokens);
        pos = close + 1;
    }

    let bang = header[pos..].starts_with('!');
    if bang {
        pos += 1;
    }

    if !header[pos..].starts_with(':') {
        return Err(SyntaxError::new(
            SyntaxErrorKind::MissingSeparator,
            Location::new(1, column(header, pos)),
            "expected ': ' between the type and the description",
        ));
    }
    pos += 1;

    let rest = &header[pos..];
    if rest.trim().is_empty() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::EmptyDescription,
            Location::new(1, column(header, pos)),
            "description is empty",
        ));
    }
    if !rest.starts_with(' ') {
        return Err(SyntaxError::new(
            SyntaxErrorKind::MissingSeparator,
            Location::new(1, column(header, pos)),
            "expected a space after ':'",
        ));
    }

    Ok(Header {
        commit_type: commit_type.to_string(),
        scope,
        bang,
        description: rest.trim().to_string(),
    })
}

/// Split everything after the header into body and footers.
///
/// `first_line` is the line number of `content[0]` in the raw message.
fn parse_trailer(
    content: &[&str],
    first_line: usize,
) -> Result<(Option<String>, Vec<Footer>), SyntaxError> {
    if content.is_empty() {
        return Ok((None, Vec::new()));
    }

    let last_paragraph = content
        .iter()
        .rposition(|l| l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(0);

    let (body_lines, footer_lines) = if FOOTER_REGEX.is_match(content[last_paragraph]) {
        (&content[..last_paragraph], &content[last_paragraph..])
    } else {
        (content, &content[content.len()..])
    };

    let mut footers: Vec<Footer> = Vec::new();
    for (offset, line) in footer_lines.iter().enumerate() {
        let line_no = first_line + last_paragraph + offset;

        if let Some(caps) = FOOTER_REGEX.captures(line) {
            let (separator, value) = if caps.name("colon").is_some() {
                (FooterSeparator::Colon, caps.name("cvalue"))
            } else {
                (FooterSeparator::Hash, caps.name("hvalue"))
            };
            footers.push(Footer {
                key: caps["key"].to_string(),
                separator,
                value: value.map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
                line: line_no,
            });
            continue;
        }

        // Indented lines continue the previous footer's value.
        match footers.last_mut() {
            Some(footer) if line.starts_with([' ', '\t']) => {
                if !footer.value.is_empty() {
                    footer.value.push('\n');
                }
                footer.value.push_str(line.trim());
            }
            _ => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::FooterInterrupted,
                    Location::line(line_no),
                    format!(
                        "'{}' is not a footer; footers must be 'Key: value' or 'Key #value'",
                        line.trim()
                    ),
                ));
            }
        }
    }

    let body = body_lines.join("\n");
    let body = body.trim();
    let body = if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    };

    Ok((body, footers))
}
