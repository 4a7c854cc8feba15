//! Rule contract tests.
//!
//! Uses a hand-rolled scripted scanner that records call counts, so the
//! read/unread balance and column-query contract of each rule can be
//! asserted exactly, without a mocking framework.

use sqlscan_lexer::rules::{EscapedStringRule, LineCommentRule, Rule, WhitespaceRule, WordRule};
use sqlscan_lexer::CharacterScanner;
use sqlscan_tokens::TokenKind;
use std::cell::Cell;

/// A fake scanner serving a scripted character sequence while counting
/// every `read`, `unread`, and `column` call.
struct ScriptedScanner {
    chars: Vec<char>,
    offset: usize,
    pending_eof_reads: usize,
    reads: usize,
    unreads: usize,
    column_queries: Cell<usize>,
}

impl ScriptedScanner {
    fn new(script: &str) -> Self {
        Self {
            chars: script.chars().collect(),
            offset: 0,
            pending_eof_reads: 0,
            reads: 0,
            unreads: 0,
            column_queries: Cell::new(0),
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

impl CharacterScanner for ScriptedScanner {
    fn read(&mut self) -> Option<char> {
        self.reads += 1;
        match self.chars.get(self.offset).copied() {
            Some(ch) => {
                self.offset += 1;
                Some(ch)
            }
            None => {
                self.pending_eof_reads += 1;
                None
            }
        }
    }

    fn unread(&mut self) {
        self.unreads += 1;
        if self.pending_eof_reads > 0 {
            self.pending_eof_reads -= 1;
        } else {
            assert!(self.offset > 0, "unread with no outstanding read");
            self.offset -= 1;
        }
    }

    fn column(&self) -> u32 {
        self.column_queries.set(self.column_queries.get() + 1);
        self.offset as u32
    }
}

// --- Escaped string rule: lead-in probe ---

#[test]
fn test_escaped_string_at_immediate_eof() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::Undefined);
    assert_eq!(scanner.column_queries.get(), 1);
    assert_eq!(scanner.reads, 2);
    assert_eq!(scanner.unreads, 2);
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn test_escaped_string_rejects_wrong_prefix() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("x'abc'");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::Undefined);
    assert_eq!(scanner.reads, 2);
    assert_eq!(scanner.unreads, 2);
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn test_escaped_string_rejects_prefix_without_quote() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("Exit");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::Undefined);
    assert_eq!(scanner.reads, 2);
    assert_eq!(scanner.unreads, 2);
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn test_failed_probe_is_idempotent() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("SELECT");

    let first = rule.evaluate(&mut scanner, false);
    let offset_after_first = scanner.offset();
    let second = rule.evaluate(&mut scanner, false);

    assert_eq!(first, TokenKind::Undefined);
    assert_eq!(second, TokenKind::Undefined);
    assert_eq!(offset_after_first, 0);
    assert_eq!(scanner.offset(), 0);
    assert_eq!(scanner.reads, scanner.unreads);
}

// --- Escaped string rule: body ---

#[test]
fn test_escaped_string_round_trip() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("E'abc\\'def' rest");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::String);
    // The literal is 11 characters; the scanner rests one past the
    // closing quote.
    assert_eq!(scanner.offset(), 11);
    assert_eq!(scanner.column_queries.get(), 1);
}

#[test]
fn test_lowercase_prefix_matches() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("e'x'");

    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::String);
    assert_eq!(scanner.offset(), 4);
}

#[test]
fn test_doubled_delimiter_is_embedded_quote() {
    // E'''' is one escaped empty-ish literal holding a single quote, not
    // two adjacent empty strings.
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("E''''");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::String);
    assert_eq!(scanner.offset(), 5);
}

#[test]
fn test_backslash_escape_consumes_a_unit() {
    // E'\\' : the backslash pair is one escaped unit, so the quote that
    // follows it is the terminator.
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("E'\\\\'");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::String);
    assert_eq!(scanner.offset(), 5);
    // Lead-in 2 reads, backslash unit 2 reads, terminator 1 read, EOF
    // lookahead 1 read cancelled by 1 unread.
    assert_eq!(scanner.reads, 6);
    assert_eq!(scanner.unreads, 1);
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    // E'\'x' : the \' unit keeps the literal open until the final quote.
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("E'\\'x' rest");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::String);
    assert_eq!(scanner.offset(), 6);
}

#[test]
fn test_unterminated_literal_is_lenient() {
    let rule = EscapedStringRule::new();
    let mut scanner = ScriptedScanner::new("E'abc");

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::String);
    assert_eq!(scanner.offset(), 5);
    assert_eq!(scanner.column_queries.get(), 1);
}

#[test]
fn test_resume_flag_is_ignored() {
    let rule = EscapedStringRule::new();
    let mut fresh = ScriptedScanner::new("E'x'");
    let mut resumed = ScriptedScanner::new("E'x'");

    assert_eq!(
        rule.evaluate(&mut fresh, false),
        rule.evaluate(&mut resumed, true)
    );
    assert_eq!(fresh.offset(), resumed.offset());
}

// --- Column constraint ---

#[test]
fn test_column_constrained_rule_declines_elsewhere() {
    let rule = EscapedStringRule::at_column(0);
    let mut scanner = ScriptedScanner::new("xE'a'");
    scanner.read(); // move off column 0
    scanner.reads = 0;

    let result = rule.evaluate(&mut scanner, false);

    assert_eq!(result, TokenKind::Undefined);
    assert_eq!(scanner.column_queries.get(), 1);
    // Declined before the probe: no reads, no unreads.
    assert_eq!(scanner.reads, 0);
    assert_eq!(scanner.unreads, 0);
}

// --- Sibling rules honor the same contract ---

#[test]
fn test_whitespace_rule_rollback() {
    let rule = WhitespaceRule::new();
    let mut scanner = ScriptedScanner::new("select");

    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::Undefined);
    assert_eq!(scanner.reads, 1);
    assert_eq!(scanner.unreads, 1);
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn test_line_comment_rule_rollback() {
    let rule = LineCommentRule::new();
    let mut scanner = ScriptedScanner::new("-x");

    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::Undefined);
    assert_eq!(scanner.reads, 2);
    assert_eq!(scanner.unreads, 2);
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn test_line_comment_excludes_line_break() {
    let rule = LineCommentRule::new();
    let mut scanner = ScriptedScanner::new("-- note\nselect");

    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::Comment);
    // Rests on the newline, not past it.
    assert_eq!(scanner.offset(), 7);
}

#[test]
fn test_word_rule_classifies_keyword_and_identifier() {
    let rule = WordRule::new();

    let mut scanner = ScriptedScanner::new("SELECT ");
    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::Keyword);
    assert_eq!(scanner.offset(), 6);

    let mut scanner = ScriptedScanner::new("customers ");
    assert_eq!(rule.evaluate(&mut scanner, false), TokenKind::Identifier);
    assert_eq!(scanner.offset(), 9);
}
