//! sqlscan_lexer: Scanner-driven lexical rules for SQL text.
//!
//! The lexer is built from three pieces:
//! - a [`CharacterScanner`]: a forward character cursor with one-character
//!   pushback and column tracking,
//! - [`Rule`]s: each recognizes one token category starting at the scanner
//!   position, restoring the position exactly on non-match,
//! - a [`Tokenizer`] that offers each position to the rules in priority
//!   order and turns matches into spanned tokens.
//!
//! The flagship rule is [`rules::EscapedStringRule`], which recognizes
//! PostgreSQL-style `E'...'` string literals with backslash escapes.

mod scanner;
mod tokenizer;

pub mod rules;

pub use scanner::{CharacterScanner, StringScanner};
pub use tokenizer::Tokenizer;
