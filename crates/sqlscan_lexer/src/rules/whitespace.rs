//! The whitespace rule.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::is_whitespace;
use sqlscan_tokens::TokenKind;

/// Recognizes a maximal run of whitespace, line breaks included.
#[derive(Debug, Default)]
pub struct WhitespaceRule;

impl WhitespaceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for WhitespaceRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        match scanner.read() {
            Some(ch) if is_whitespace(ch) => {}
            _ => {
                scanner.unread();
                return TokenKind::Undefined;
            }
        }

        loop {
            match scanner.read() {
                Some(ch) if is_whitespace(ch) => {}
                Some(_) => {
                    scanner.unread();
                    return TokenKind::Whitespace;
                }
                None => return TokenKind::Whitespace,
            }
        }
    }
}
