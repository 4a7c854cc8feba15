//! sqlscan_core: Shared primitives for the sqlscan lexer.
//!
//! Provides source-location types (spans, line maps) and the character
//! classification predicates the lexical rules build on.

pub mod chars;
pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
