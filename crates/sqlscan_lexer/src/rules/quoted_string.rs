//! The plain quoted literal rule.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::{DOUBLE_QUOTE, SINGLE_QUOTE};
use sqlscan_tokens::TokenKind;

/// Recognizes a quoted region with doubled-delimiter embedding: `'...'`
/// string literals or `"..."` quoted identifiers, depending on the
/// configured delimiter. Standard SQL has no backslash escapes here; a
/// doubled delimiter is an embedded delimiter character. Unterminated
/// regions at end of input are classified leniently, like the escaped
/// string rule.
#[derive(Debug)]
pub struct QuotedStringRule {
    delimiter: char,
    kind: TokenKind,
}

impl QuotedStringRule {
    pub fn new(delimiter: char, kind: TokenKind) -> Self {
        Self { delimiter, kind }
    }

    /// The `'...'` string literal rule.
    pub fn string_literal() -> Self {
        Self::new(SINGLE_QUOTE, TokenKind::String)
    }

    /// The `"..."` quoted identifier rule.
    pub fn quoted_identifier() -> Self {
        Self::new(DOUBLE_QUOTE, TokenKind::Identifier)
    }
}

impl Rule for QuotedStringRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        if scanner.read() != Some(self.delimiter) {
            scanner.unread();
            return TokenKind::Undefined;
        }

        loop {
            match scanner.read() {
                None => return self.kind,
                Some(ch) if ch == self.delimiter => {
                    if scanner.read() == Some(self.delimiter) {
                        // Doubled delimiter: embedded, not terminating.
                        continue;
                    }
                    scanner.unread();
                    return self.kind;
                }
                Some(_) => {}
            }
        }
    }
}
