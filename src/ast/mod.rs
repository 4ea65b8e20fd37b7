//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the tree structure
//!
//! Submodules:
//! - expressions: expression node variants
//! - statements: statement node variants
//! - types: the closed type set and the operator type-rule tables
pub mod expressions;
pub mod statements;
pub mod types;
