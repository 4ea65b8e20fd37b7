//! Lexical analysis module for the front end.
//!
//! This module converts source text into a stream of tokens, pulled one at
//! a time by the parser. It handles:
//!
//! - An immutable input cursor with line/column tracking
//! - Keywords, identifiers, literals, and multi-character operators
//! - Block comments and whitespace
//! - Lexical errors with precise positions

pub mod cursor;
pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;
