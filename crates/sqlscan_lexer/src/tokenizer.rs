//! The rule-driven tokenizer.

use crate::rules::{
    EscapedStringRule, LineCommentRule, NumberRule, QuotedStringRule, Rule, WhitespaceRule,
    WordRule,
};
use crate::scanner::{CharacterScanner, StringScanner};
use sqlscan_core::TextSpan;
use sqlscan_tokens::{Token, TokenKind};

/// Drives an ordered set of rules over a character scanner.
///
/// Each position is offered to the rules in priority order; the first rule
/// that does not return `Undefined` wins, and the characters it consumed
/// become one token. If every rule declines, one character is consumed as a
/// `Symbol`, so the tokenizer always makes progress. At end of input a
/// single zero-length `Eof` token is produced, and then re-produced on every
/// further call.
pub struct Tokenizer {
    scanner: StringScanner,
    rules: Vec<Box<dyn Rule>>,
}

impl Tokenizer {
    /// Create a tokenizer with an explicit rule set, in priority order.
    pub fn new(source: &str, rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            scanner: StringScanner::new(source),
            rules,
        }
    }

    /// Create a tokenizer with the standard SQL rule set.
    ///
    /// The escaped string rule runs before the plain string rule so that
    /// `E'...'` is not split into a word and a separate literal.
    pub fn with_default_rules(source: &str) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(WhitespaceRule::new()),
            Box::new(LineCommentRule::new()),
            Box::new(EscapedStringRule::new()),
            Box::new(QuotedStringRule::string_literal()),
            Box::new(QuotedStringRule::quoted_identifier()),
            Box::new(NumberRule::new()),
            Box::new(WordRule::new()),
        ];
        Self::new(source, rules)
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        let start = self.scanner.offset();
        if self.scanner.at_end() {
            return Token::eof(start);
        }

        for rule in &self.rules {
            let kind = rule.evaluate(&mut self.scanner, false);
            if !kind.is_undefined() {
                debug_assert!(self.scanner.offset() > start, "rule matched zero characters");
                return Token::new(kind, TextSpan::from_bounds(start, self.scanner.offset()));
            }
            debug_assert_eq!(
                self.scanner.offset(),
                start,
                "rule declined without restoring the scanner"
            );
        }

        // No rule claimed this position: consume one character as a symbol.
        let _ = self.scanner.read();
        Token::new(
            TokenKind::Symbol,
            TextSpan::from_bounds(start, self.scanner.offset()),
        )
    }

    /// Tokenize a whole source string with the standard rule set, excluding
    /// the terminal `Eof` marker.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut tokenizer = Self::with_default_rules(source);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            if token.kind.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }
}
