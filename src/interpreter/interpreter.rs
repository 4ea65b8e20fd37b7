//! Tree-walking evaluation. Runs only on trees that already passed
//! validation, so the typing rules hold; runtime checks exist for the
//! conditions only execution can see, such as division by zero.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        expressions::{BinaryExpr, Expr},
        statements::{StepStmt, Stmt},
    },
    environment::Symbol,
    errors::errors::{Error, ErrorImpl},
    interpreter::value::Value,
    lexer::tokens::{Token, TokenKind},
    Position,
};

pub struct Interpreter {
    /// Storage keyed by symbol identity, not name, so a shadowing
    /// declaration gets its own slot instead of clobbering the outer one.
    store: HashMap<usize, Value>,
    /// Lines produced by `Console.WriteLine` calls, in execution order.
    pub output: Vec<String>,
}

fn slot(symbol: &Rc<Symbol>) -> usize {
    Rc::as_ptr(symbol) as usize
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            store: HashMap::new(),
            output: vec![],
        }
    }

    pub fn interpret(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Declaration(declaration) => {
                self.store.insert(
                    slot(&declaration.symbol),
                    Value::default_for(declaration.symbol.ty),
                );
                Ok(())
            }
            Stmt::Assignment(assignment) => {
                let value = self.evaluate(&assignment.value)?;
                self.store.insert(slot(&assignment.target), value);
                Ok(())
            }
            Stmt::If(if_stmt) => {
                if self.evaluate_bool(&if_stmt.condition)? {
                    self.interpret(&if_stmt.then_body)
                } else if let Some(else_body) = &if_stmt.else_body {
                    self.interpret(else_body)
                } else {
                    Ok(())
                }
            }
            Stmt::While(while_stmt) => {
                while self.evaluate_bool(&while_stmt.condition)? {
                    self.interpret(&while_stmt.body)?;
                }
                Ok(())
            }
            Stmt::Foreach(foreach) => {
                let elements = match self.load(&foreach.iterable, foreach.position)? {
                    Value::List(elements) => elements,
                    other => {
                        return Err(Error::new(
                            ErrorImpl::NotIterable {
                                type_: other.to_string(),
                            },
                            foreach.position,
                        ))
                    }
                };
                for element in elements {
                    self.store.insert(slot(&foreach.variable), element);
                    self.interpret(&foreach.body)?;
                }
                Ok(())
            }
            Stmt::Increment(step) => self.step(step, 1),
            Stmt::Decrement(step) => self.step(step, -1),
            Stmt::Call(call) => {
                let mut arguments = vec![];
                for argument in &call.arguments {
                    arguments.push(self.evaluate(argument)?);
                }
                if call.callee.generated_name() == "console.log" {
                    let rendered: Vec<String> =
                        arguments.iter().map(|value| value.to_string()).collect();
                    self.output.push(rendered.join(" "));
                }
                // Input builtins have no source to read from here.
                Ok(())
            }
            Stmt::Block(block) => {
                for child in &block.body {
                    self.interpret(child)?;
                }
                Ok(())
            }
            Stmt::Class(class) => self.interpret(&class.body),
        }
    }

    fn step(&mut self, step: &StepStmt, delta: i64) -> Result<(), Error> {
        let stepped = match self.load(&step.target, step.position)? {
            Value::Int(value) => Value::Int(value + delta),
            Value::Float(value) => Value::Float(value + delta as f64),
            other => {
                return Err(Error::new(
                    ErrorImpl::NotNumeric {
                        type_: other.to_string(),
                    },
                    step.position,
                ))
            }
        };
        self.store.insert(slot(&step.target), stepped);
        Ok(())
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Constant(constant) => Value::from_constant(constant),
            Expr::Identifier(identifier) => self.load(&identifier.symbol, identifier.position),
            Expr::Arithmetic(binary) => self.evaluate_arithmetic(binary),
            Expr::Relational(binary) => self.evaluate_relational(binary),
            Expr::Logical(binary) => {
                let left = self.evaluate(&binary.left)?;
                let right = self.evaluate(&binary.right)?;
                match (left, right) {
                    (Value::Bool(left), Value::Bool(right)) => {
                        Ok(Value::Bool(match binary.operator.kind {
                            TokenKind::And => left && right,
                            _ => left || right,
                        }))
                    }
                    (left, right) => Err(operand_mismatch(&binary.operator, &left, &right)),
                }
            }
            Expr::Not(not) => match self.evaluate(&not.right)? {
                Value::Bool(value) => Ok(Value::Bool(!value)),
                other => Err(operand_mismatch(&not.operator, &Value::Bool(true), &other)),
            },
        }
    }

    fn load(&self, symbol: &Rc<Symbol>, position: Position) -> Result<Value, Error> {
        self.store.get(&slot(symbol)).cloned().ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: symbol.name.clone(),
                },
                position,
            )
        })
    }

    fn evaluate_bool(&self, condition: &Expr) -> Result<bool, Error> {
        match self.evaluate(condition)? {
            Value::Bool(value) => Ok(value),
            other => Err(Error::new(
                ErrorImpl::BooleanRequired {
                    construct: String::from("condition"),
                    received: other.to_string(),
                },
                condition.position(),
            )),
        }
    }

    fn evaluate_arithmetic(&self, binary: &BinaryExpr) -> Result<Value, Error> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        match (left, right) {
            (Value::Str(left), Value::Str(right)) => Ok(Value::Str(left + &right)),
            (Value::Int(left), Value::Int(right)) => match operator.kind {
                TokenKind::Plus => Ok(Value::Int(left + right)),
                TokenKind::Minus => Ok(Value::Int(left - right)),
                TokenKind::Star => Ok(Value::Int(left * right)),
                TokenKind::Slash => {
                    if right == 0 {
                        return Err(Error::new(ErrorImpl::DivisionByZero, operator.position));
                    }
                    Ok(Value::Int(left / right))
                }
                _ => {
                    if right == 0 {
                        return Err(Error::new(ErrorImpl::DivisionByZero, operator.position));
                    }
                    Ok(Value::Int(left % right))
                }
            },
            (left, right) => {
                let (left, right) = match (as_float(&left), as_float(&right)) {
                    (Some(left), Some(right)) => (left, right),
                    _ => return Err(operand_mismatch(operator, &left, &right)),
                };
                Ok(Value::Float(match operator.kind {
                    TokenKind::Plus => left + right,
                    TokenKind::Minus => left - right,
                    TokenKind::Star => left * right,
                    TokenKind::Slash => left / right,
                    _ => left % right,
                }))
            }
        }
    }

    fn evaluate_relational(&self, binary: &BinaryExpr) -> Result<Value, Error> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        if operator.kind == TokenKind::Equal {
            return Ok(Value::Bool(equal(&left, &right)));
        }
        if operator.kind == TokenKind::NotEqual {
            return Ok(Value::Bool(!equal(&left, &right)));
        }

        let ordering = match (&left, &right) {
            (Value::Str(left), Value::Str(right)) => left.partial_cmp(right),
            (Value::Date(left), Value::Date(right)) => left.partial_cmp(right),
            (left, right) => match (as_float(left), as_float(right)) {
                (Some(left), Some(right)) => left.partial_cmp(&right),
                _ => None,
            },
        };

        let Some(ordering) = ordering else {
            return Err(operand_mismatch(operator, &left, &right));
        };

        Ok(Value::Bool(match operator.kind {
            TokenKind::LessThan => ordering.is_lt(),
            TokenKind::LessOrEqual => ordering.is_le(),
            TokenKind::GreaterThan => ordering.is_gt(),
            _ => ordering.is_ge(),
        }))
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(value) => Some(*value as f64),
        Value::Float(value) => Some(*value),
        _ => None,
    }
}

/// Numeric equality compares across int and float; everything else
/// compares within its own kind.
fn equal(left: &Value, right: &Value) -> bool {
    match (as_float(left), as_float(right)) {
        (Some(left), Some(right)) => left == right,
        _ => left == right,
    }
}

fn operand_mismatch(operator: &Token, left: &Value, right: &Value) -> Error {
    Error::new(
        ErrorImpl::TypeMismatch {
            operator: operator.lexeme.clone(),
            left: left.to_string(),
            right: right.to_string(),
        },
        operator.position,
    )
}
