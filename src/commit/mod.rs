// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: conventional commit message parsing.
//!
//! The parser has no dependencies on the rest of the crate. It either
//! decomposes a message into a [`ParsedMessage`] or explains, with a stable
//! code and a location, why the message is not a conventional commit.

mod message;
mod syntax;

pub use message::{Footer, FooterSeparator, ParsedMessage};
pub use syntax::{Location, SyntaxError, SyntaxErrorKind};

/// Parse a raw commit message.
pub fn parse(raw: &str) -> Result<ParsedMessage, SyntaxError> {
    ParsedMessage::parse(raw)
}
