//! Character classification predicates used by the lexical rules.

/// The quote delimiter for SQL string literals.
pub const SINGLE_QUOTE: char = '\'';

/// The quote delimiter for SQL quoted identifiers.
pub const DOUBLE_QUOTE: char = '"';

/// The escape character inside escaped string literals.
pub const BACKSLASH: char = '\\';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Check if a character is whitespace, including line breaks.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\n' | '\r')
}

/// Check if a character can start a SQL identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Check if a character can be part of a SQL identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_ascii_alphanumeric()
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
