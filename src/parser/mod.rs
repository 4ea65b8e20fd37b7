//! Parser module
//! Recursive-descent parsing with inline scope resolution
//!
//! Submodules:
//! - parser: the parser state (scanner, one-token lookahead, environment)
//! - stmt: statement and block productions
//! - expr: the expression precedence ladder
pub mod expr;
pub mod parser;
pub mod stmt;
