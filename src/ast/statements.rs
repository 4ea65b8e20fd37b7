//! Statement node variants.

use std::rc::Rc;

use crate::{ast::expressions::Expr, environment::Symbol, Position};

#[derive(Debug, Clone)]
pub enum Stmt {
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    Foreach(ForeachStmt),
    Increment(StepStmt),
    Decrement(StepStmt),
    Call(CallStmt),
    Block(BlockStmt),
    Class(ClassStmt),
}

#[derive(Debug, Clone)]
pub struct DeclarationStmt {
    pub symbol: Rc<Symbol>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub target: Rc<Symbol>,
    pub value: Expr,
    pub position: Position,
}

/// `else_body` is absent when no `else` clause was written.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub position: Position,
}

/// `foreach(variable in iterable) { ... }`. Both names must already be
/// declared; the parser resolves them in source order, loop variable
/// first.
#[derive(Debug, Clone)]
pub struct ForeachStmt {
    pub variable: Rc<Symbol>,
    pub iterable: Rc<Symbol>,
    pub body: Box<Stmt>,
    pub position: Position,
}

/// Shared by `++` and `--`; the enum variant carries the direction.
#[derive(Debug, Clone)]
pub struct StepStmt {
    pub target: Rc<Symbol>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct CallStmt {
    pub callee: Rc<Symbol>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct ClassStmt {
    pub name: String,
    pub body: Box<Stmt>,
    pub position: Position,
}
