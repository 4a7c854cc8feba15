//! The numeric literal rule.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::is_digit;
use sqlscan_tokens::TokenKind;

/// Recognizes a run of digits with an optional fraction (`42`, `3.14`).
/// A trailing dot with no digit after it is not part of the number.
#[derive(Debug, Default)]
pub struct NumberRule;

impl NumberRule {
    pub fn new() -> Self {
        Self
    }

    fn scan_digits(&self, scanner: &mut dyn CharacterScanner) {
        loop {
            match scanner.read() {
                Some(ch) if is_digit(ch) => {}
                _ => {
                    scanner.unread();
                    return;
                }
            }
        }
    }
}

impl Rule for NumberRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        match scanner.read() {
            Some(ch) if is_digit(ch) => {}
            _ => {
                scanner.unread();
                return TokenKind::Undefined;
            }
        }
        self.scan_digits(scanner);

        // Optional fraction: only consume the dot if a digit follows.
        if scanner.read() == Some('.') {
            match scanner.read() {
                Some(ch) if is_digit(ch) => self.scan_digits(scanner),
                _ => {
                    scanner.unread();
                    scanner.unread();
                }
            }
        } else {
            scanner.unread();
        }

        TokenKind::Number
    }
}
