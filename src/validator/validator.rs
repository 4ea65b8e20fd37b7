//! Semantic validation: a read-only walk over the resolved tree that
//! checks the typing rules. Names are already bound, so there is no
//! environment here; every check is local to a node and its symbols'
//! recorded types. The walk stops at the first violation.

use crate::{
    ast::{
        expressions::Expr,
        statements::Stmt,
        types::{self, Type},
    },
    errors::errors::{Error, ErrorImpl},
};

pub fn validate_stmt(stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Declaration(_) => Ok(()),
        Stmt::Assignment(assignment) => {
            let received = expr_type(&assignment.value)?;
            if assignment.target.ty != received {
                return Err(Error::new(
                    ErrorImpl::NotAssignable {
                        expected: assignment.target.ty.to_string(),
                        received: received.to_string(),
                    },
                    assignment.position,
                ));
            }
            Ok(())
        }
        Stmt::If(if_stmt) => {
            require_boolean(&if_stmt.condition, "if")?;
            validate_stmt(&if_stmt.then_body)?;
            if let Some(else_body) = &if_stmt.else_body {
                validate_stmt(else_body)?;
            }
            Ok(())
        }
        Stmt::While(while_stmt) => {
            require_boolean(&while_stmt.condition, "while")?;
            validate_stmt(&while_stmt.body)
        }
        Stmt::Foreach(foreach) => {
            let iterable = foreach.iterable.ty;
            match iterable.element_type() {
                Some(element) if element == foreach.variable.ty => {}
                Some(element) => {
                    return Err(Error::new(
                        ErrorImpl::NotAssignable {
                            expected: foreach.variable.ty.to_string(),
                            received: element.to_string(),
                        },
                        foreach.position,
                    ))
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::NotIterable {
                            type_: iterable.to_string(),
                        },
                        foreach.position,
                    ))
                }
            }
            validate_stmt(&foreach.body)
        }
        Stmt::Increment(step) | Stmt::Decrement(step) => {
            if !step.target.ty.is_numeric() {
                return Err(Error::new(
                    ErrorImpl::NotNumeric {
                        type_: step.target.ty.to_string(),
                    },
                    step.position,
                ));
            }
            Ok(())
        }
        Stmt::Call(call) => {
            for argument in &call.arguments {
                validate_expr(argument)?;
            }
            Ok(())
        }
        Stmt::Block(block) => {
            for child in &block.body {
                validate_stmt(child)?;
            }
            Ok(())
        }
        Stmt::Class(class) => validate_stmt(&class.body),
    }
}

pub fn validate_expr(expr: &Expr) -> Result<(), Error> {
    expr_type(expr).map(|_| ())
}

/// Computes an expression's type, or fails on the first incompatible
/// operand pair. Binary operator legality comes from the rule tables.
pub fn expr_type(expr: &Expr) -> Result<Type, Error> {
    match expr {
        Expr::Constant(constant) => Ok(constant.ty),
        Expr::Identifier(identifier) => Ok(identifier.symbol.ty),
        Expr::Arithmetic(binary) => {
            let left = expr_type(&binary.left)?;
            let right = expr_type(&binary.right)?;
            types::arithmetic_result(binary.operator.kind, left, right)
                .ok_or_else(|| mismatch(binary, left, right))
        }
        Expr::Relational(binary) => {
            let left = expr_type(&binary.left)?;
            let right = expr_type(&binary.right)?;
            types::relational_result(left, right).ok_or_else(|| mismatch(binary, left, right))
        }
        Expr::Logical(binary) => {
            let left = expr_type(&binary.left)?;
            let right = expr_type(&binary.right)?;
            types::logical_result(left, right).ok_or_else(|| mismatch(binary, left, right))
        }
        Expr::Not(not) => {
            let right = expr_type(&not.right)?;
            if right != Type::Bool {
                return Err(Error::new(
                    ErrorImpl::TypeMismatch {
                        operator: not.operator.lexeme.clone(),
                        left: Type::Bool.to_string(),
                        right: right.to_string(),
                    },
                    not.operator.position,
                ));
            }
            Ok(Type::Bool)
        }
    }
}

fn require_boolean(condition: &Expr, construct: &str) -> Result<(), Error> {
    let received = expr_type(condition)?;
    if received != Type::Bool {
        return Err(Error::new(
            ErrorImpl::BooleanRequired {
                construct: String::from(construct),
                received: received.to_string(),
            },
            condition.position(),
        ));
    }
    Ok(())
}

fn mismatch(binary: &crate::ast::expressions::BinaryExpr, left: Type, right: Type) -> Error {
    Error::new(
        ErrorImpl::TypeMismatch {
            operator: binary.operator.lexeme.clone(),
            left: left.to_string(),
            right: right.to_string(),
        },
        binary.operator.position,
    )
}
