//! Token values produced by the tokenizer.

use crate::kind::TokenKind;
use serde::{Deserialize, Serialize};
use sqlscan_core::TextSpan;
use std::fmt;

/// A classified region of source text.
///
/// Tokens are created by the tokenizer once a rule has matched and are never
/// mutated afterwards. The span covers exactly the characters the winning
/// rule consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The category of this token.
    pub kind: TokenKind,
    /// Where this token lies in the source text.
    pub span: TextSpan,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, span: TextSpan) -> Self {
        Self { kind, span }
    }

    /// Create the end-of-input marker token at a position.
    #[inline]
    pub fn eof(pos: u32) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: TextSpan::empty(pos),
        }
    }

    /// The length of this token in characters.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.length
    }

    /// Whether this token covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.span)
    }
}
