//! Lexical rules: each recognizes one token category from the scanner.

use crate::scanner::CharacterScanner;
use sqlscan_tokens::TokenKind;

mod escaped_string;
mod line_comment;
mod number;
mod quoted_string;
mod whitespace;
mod word;

pub use escaped_string::EscapedStringRule;
pub use line_comment::LineCommentRule;
pub use number::NumberRule;
pub use quoted_string::QuotedStringRule;
pub use whitespace::WhitespaceRule;
pub use word::WordRule;

/// A unit that recognizes one token category starting at the scanner
/// position.
///
/// `evaluate` returns the kind of the token it consumed, or
/// [`TokenKind::Undefined`] for "no match". No match is a normal, silent
/// outcome: the rule must have unread every character it read, leaving the
/// scanner exactly where it was invoked. On a match the scanner rests one
/// past the last consumed character.
///
/// `resume` signals that this call continues a multi-call match left
/// incomplete by a previous invocation. Rules that always run to completion
/// ignore it.
pub trait Rule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, resume: bool) -> TokenKind;
}
