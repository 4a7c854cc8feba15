//! The fixed enumeration of token categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic category of a scanned token.
///
/// `Undefined` is the "no match" signal a rule returns when the text at the
/// scanner position is not its category; it is ordinary control flow, not an
/// error. `Eof` marks the end of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A string literal, plain or escaped.
    String,
    /// A run of whitespace.
    Whitespace,
    /// A comment.
    Comment,
    /// A reserved SQL keyword.
    Keyword,
    /// An identifier or quoted identifier.
    Identifier,
    /// A numeric literal.
    Number,
    /// A single operator or punctuation character.
    Symbol,
    /// End of input.
    Eof,
    /// No rule matched at this position.
    Undefined,
}

impl TokenKind {
    /// Whether this is the "no match" signal.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, TokenKind::Undefined)
    }

    /// Whether this marks the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::Eof => "eof",
            TokenKind::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}
