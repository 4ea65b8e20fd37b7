//! Expression emission. Lexemes pass through as scanned: string
//! literals keep their quotes, list constants re-wrap their elements in
//! brackets, and date constants become `new Date(...)` calls.

use crate::ast::expressions::{ConstantExpr, Expr};
use crate::ast::types::Type;

pub fn generate_expr(expr: &Expr) -> String {
    match expr {
        Expr::Constant(constant) => generate_constant(constant),
        Expr::Identifier(identifier) => String::from(identifier.symbol.generated_name()),
        Expr::Arithmetic(binary) | Expr::Relational(binary) | Expr::Logical(binary) => format!(
            "{} {} {}",
            generate_expr(&binary.left),
            binary.operator.lexeme,
            generate_expr(&binary.right)
        ),
        Expr::Not(not) => format!("!{}", generate_expr(&not.right)),
    }
}

fn generate_constant(constant: &ConstantExpr) -> String {
    if constant.ty.is_list() {
        return format!("[{}]", constant.lexeme);
    }
    if constant.ty == Type::Date {
        return format!("new Date({})", constant.lexeme);
    }
    constant.lexeme.clone()
}
