//! The escaped string literal rule.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::{BACKSLASH, SINGLE_QUOTE};
use sqlscan_tokens::TokenKind;

/// Recognizes PostgreSQL-style escaped string literals: `E'...'`.
///
/// The lead-in is the escape prefix letter (`e` or `E`) immediately followed
/// by a single quote. Inside the body, a backslash escapes the next
/// character unconditionally (so `\'` and `\\` are two-character units that
/// never terminate the literal), and a doubled quote `''` is an embedded
/// literal quote. A backslash takes precedence when both readings could
/// apply at the same position.
///
/// An unterminated literal at end of input is still classified as a string:
/// a highlighter must produce some token for every position rather than
/// stall on malformed input.
#[derive(Debug, Default)]
pub struct EscapedStringRule {
    /// If set, the rule only matches when the literal starts at this column.
    column: Option<u32>,
}

impl EscapedStringRule {
    /// Create a rule that matches at any column.
    pub fn new() -> Self {
        Self { column: None }
    }

    /// Create a rule constrained to a start column.
    pub fn at_column(column: u32) -> Self {
        Self {
            column: Some(column),
        }
    }

    /// Scan the literal body after a recognized lead-in. Only returns
    /// `String`: once the lead-in has matched, the lenient recovery policy
    /// guarantees a token.
    fn scan_body(&self, scanner: &mut dyn CharacterScanner) -> TokenKind {
        loop {
            match scanner.read() {
                // Unterminated at end of input: lenient recovery.
                None => return TokenKind::String,
                Some(BACKSLASH) => {
                    // The escape consumes the next character as a unit,
                    // whatever it is. At end of input there is nothing to
                    // consume and the next iteration terminates.
                    let _ = scanner.read();
                }
                Some(SINGLE_QUOTE) => {
                    if scanner.read() == Some(SINGLE_QUOTE) {
                        // Doubled delimiter: an embedded literal quote.
                        continue;
                    }
                    // Single delimiter terminates the literal; give back
                    // the lookahead.
                    scanner.unread();
                    return TokenKind::String;
                }
                Some(_) => {}
            }
        }
    }
}

impl Rule for EscapedStringRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        let column = scanner.column();
        if self.column.is_some_and(|c| c != column) {
            return TokenKind::Undefined;
        }

        // Lead-in probe: escape prefix letter, then the opening quote.
        let prefix = scanner.read();
        let quote = scanner.read();
        if !matches!(prefix, Some('e') | Some('E')) || quote != Some(SINGLE_QUOTE) {
            scanner.unread();
            scanner.unread();
            return TokenKind::Undefined;
        }

        self.scan_body(scanner)
    }
}
