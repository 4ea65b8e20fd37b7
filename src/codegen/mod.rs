//! Code generation module
//! Emits JavaScript-flavoured text from a validated tree
//!
//! Submodules:
//! - stmt: statement emission with tab-based indentation
//! - expr: expression emission
pub mod expr;
pub mod stmt;


use crate::ast::statements::Stmt;

/// Renders a whole program. The outermost block emits its children at
/// indentation level zero with no surrounding braces.
pub fn generate(program: &Stmt) -> String {
    stmt::generate_stmt(program, 0)
}
