//! Statement emission. Every statement renders as one or more complete
//! lines: each line starts with `tabs` tab characters and ends with a
//! newline. Nested bodies render one level deeper; a bare block renders
//! its children at the same level without braces of its own.

use crate::{ast::statements::Stmt, codegen::expr::generate_expr};

pub fn generate_stmt(stmt: &Stmt, tabs: usize) -> String {
    let indent = "\t".repeat(tabs);

    match stmt {
        Stmt::Declaration(declaration) => {
            format!("{}var {};\n", indent, declaration.symbol.name)
        }
        Stmt::Assignment(assignment) => format!(
            "{}{} = {};\n",
            indent,
            assignment.target.name,
            generate_expr(&assignment.value)
        ),
        Stmt::Increment(step) => format!("{}{}++;\n", indent, step.target.name),
        Stmt::Decrement(step) => format!("{}{}--;\n", indent, step.target.name),
        Stmt::If(if_stmt) => {
            let mut output = format!(
                "{}if({}){{\n{}{}}}\n",
                indent,
                generate_expr(&if_stmt.condition),
                generate_stmt(&if_stmt.then_body, tabs + 1),
                indent
            );
            if let Some(else_body) = &if_stmt.else_body {
                output.push_str(&format!(
                    "{}else{{\n{}{}}}\n",
                    indent,
                    generate_stmt(else_body, tabs + 1),
                    indent
                ));
            }
            output
        }
        Stmt::While(while_stmt) => format!(
            "{}while({}){{\n{}{}}}\n",
            indent,
            generate_expr(&while_stmt.condition),
            generate_stmt(&while_stmt.body, tabs + 1),
            indent
        ),
        Stmt::Foreach(foreach) => format!(
            "{}{}.forEach(({}) => {{\n{}{}}});\n",
            indent,
            foreach.iterable.name,
            foreach.variable.name,
            generate_stmt(&foreach.body, tabs + 1),
            indent
        ),
        Stmt::Call(call) => {
            let arguments: Vec<String> = call.arguments.iter().map(generate_expr).collect();
            format!(
                "{}{}({});\n",
                indent,
                call.callee.generated_name(),
                arguments.join(", ")
            )
        }
        Stmt::Block(block) => {
            let mut output = String::new();
            for child in &block.body {
                output.push_str(&generate_stmt(child, tabs));
            }
            output
        }
        Stmt::Class(class) => format!(
            "{}class {} {{\n{}{}}}\n",
            indent,
            class.name,
            generate_stmt(&class.body, tabs + 1),
            indent
        ),
    }
}
