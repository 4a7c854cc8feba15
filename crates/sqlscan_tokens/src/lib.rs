//! sqlscan_tokens: Token kinds and token values produced by the lexer.
//!
//! The kind enumeration is shared between the lexical rules (which classify
//! text) and the consumers of the token stream (highlighters, printers).

mod kind;
mod token;

pub use kind::TokenKind;
pub use token::Token;
