//! The word rule: identifiers and reserved keywords.

use crate::rules::Rule;
use crate::scanner::CharacterScanner;
use sqlscan_core::chars::{is_identifier_part, is_identifier_start};
use sqlscan_tokens::TokenKind;

/// Recognizes an identifier run and classifies it as a reserved keyword or
/// a plain identifier. Keyword matching is case-insensitive, as in SQL.
#[derive(Debug, Default)]
pub struct WordRule;

impl WordRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for WordRule {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner, _resume: bool) -> TokenKind {
        let mut word = String::new();
        match scanner.read() {
            Some(ch) if is_identifier_start(ch) => word.push(ch),
            _ => {
                scanner.unread();
                return TokenKind::Undefined;
            }
        }

        loop {
            match scanner.read() {
                Some(ch) if is_identifier_part(ch) => word.push(ch),
                Some(_) => {
                    scanner.unread();
                    break;
                }
                None => break,
            }
        }

        if is_keyword(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }
}

/// Check if a word is a reserved SQL keyword.
fn is_keyword(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "all" | "and"
            | "any"
            | "as"
            | "asc"
            | "between"
            | "by"
            | "case"
            | "cast"
            | "create"
            | "cross"
            | "delete"
            | "desc"
            | "distinct"
            | "drop"
            | "else"
            | "end"
            | "except"
            | "exists"
            | "false"
            | "from"
            | "full"
            | "group"
            | "having"
            | "in"
            | "inner"
            | "insert"
            | "intersect"
            | "into"
            | "is"
            | "join"
            | "left"
            | "like"
            | "limit"
            | "not"
            | "null"
            | "offset"
            | "on"
            | "or"
            | "order"
            | "outer"
            | "right"
            | "select"
            | "set"
            | "table"
            | "then"
            | "true"
            | "union"
            | "update"
            | "values"
            | "when"
            | "where"
            | "with"
    )
}
