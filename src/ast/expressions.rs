//! Expression node variants.
//!
//! Expressions form a closed enum; every pass (validation, code
//! generation, evaluation) dispatches over it with a `match`, so a new
//! variant is a compile error in each pass until it is handled.

use std::rc::Rc;

use crate::{
    ast::types::Type,
    environment::Symbol,
    lexer::tokens::Token,
    Position,
};

#[derive(Debug, Clone)]
pub enum Expr {
    Constant(ConstantExpr),
    Identifier(IdentifierExpr),
    Arithmetic(BinaryExpr),
    Relational(BinaryExpr),
    Logical(BinaryExpr),
    Not(NotExpr),
}

/// A literal with its type already known. List and date literals store a
/// normalized lexeme: comma-joined elements for lists, `D/M/Y` for dates.
#[derive(Debug, Clone)]
pub struct ConstantExpr {
    pub ty: Type,
    pub lexeme: String,
    pub position: Position,
}

/// A use of a declared name, bound to its symbol at parse time.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub symbol: Rc<Symbol>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct NotExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::Constant(constant) => constant.position,
            Expr::Identifier(identifier) => identifier.position,
            Expr::Arithmetic(binary) | Expr::Relational(binary) | Expr::Logical(binary) => {
                binary.operator.position
            }
            Expr::Not(not) => not.operator.position,
        }
    }
}
