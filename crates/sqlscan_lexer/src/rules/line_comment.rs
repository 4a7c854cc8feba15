//! The single-line comment rule.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::is_line_break;
use sqlscan_tokens::TokenKind;

/// Recognizes a `--` comment running to the end of the line, exclusive of
/// the line break itself.
#[derive(Debug, Default)]
pub struct LineCommentRule;

impl LineCommentRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LineCommentRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        let first = scanner.read();
        let second = scanner.read();
        if first != Some('-') || second != Some('-') {
            scanner.unread();
            scanner.unread();
            return TokenKind::Undefined;
        }

        loop {
            match scanner.read() {
                None => return TokenKind::Comment,
                Some(ch) if is_line_break(ch) => {
                    scanner.unread();
                    return TokenKind::Comment;
                }
                Some(_) => {}
            }
        }
    }
}
