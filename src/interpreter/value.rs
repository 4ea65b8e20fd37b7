//! The runtime value union. Conversion from constant lexemes happens
//! here; arithmetic and comparison live with the evaluator.

use std::fmt::Display;

use crate::{
    ast::{expressions::ConstantExpr, types::Type},
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Date(String),
    List(Vec<Value>),
}

impl Value {
    /// The value a freshly declared variable holds before assignment.
    pub fn default_for(ty: Type) -> Value {
        match ty {
            Type::Int => Value::Int(0),
            Type::Float => Value::Float(0.0),
            Type::String => Value::Str(String::new()),
            Type::Bool => Value::Bool(false),
            Type::Date => Value::Date(String::new()),
            // Lists start empty; void never names a variable.
            _ => Value::List(vec![]),
        }
    }

    /// Converts a constant node's lexeme into its runtime value. String
    /// lexemes still carry their quotes; list lexemes are comma-joined
    /// element lexemes.
    pub fn from_constant(constant: &ConstantExpr) -> Result<Value, Error> {
        match constant.ty {
            Type::Int => Ok(Value::Int(parse_int(&constant.lexeme, constant)?)),
            Type::Float => Ok(Value::Float(parse_float(&constant.lexeme, constant)?)),
            Type::String => Ok(Value::Str(strip_quotes(&constant.lexeme))),
            Type::Bool => Ok(Value::Bool(constant.lexeme == "true")),
            Type::Date => Ok(Value::Date(constant.lexeme.clone())),
            _ => {
                let element_type = constant
                    .ty
                    .element_type()
                    .unwrap_or(Type::String);
                let mut elements = vec![];
                if !constant.lexeme.is_empty() {
                    for lexeme in constant.lexeme.split(',') {
                        elements.push(match element_type {
                            Type::Int => Value::Int(parse_int(lexeme, constant)?),
                            Type::Float => Value::Float(parse_float(lexeme, constant)?),
                            Type::Bool => Value::Bool(lexeme == "true"),
                            _ => Value::Str(strip_quotes(lexeme)),
                        });
                    }
                }
                Ok(Value::List(elements))
            }
        }
    }
}

fn parse_int(lexeme: &str, constant: &ConstantExpr) -> Result<i64, Error> {
    lexeme.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(lexeme),
            },
            constant.position,
        )
    })
}

fn parse_float(lexeme: &str, constant: &ConstantExpr) -> Result<f64, Error> {
    lexeme.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(lexeme),
            },
            constant.position,
        )
    })
}

fn strip_quotes(lexeme: &str) -> String {
    if lexeme.len() >= 2 {
        String::from(&lexeme[1..lexeme.len() - 1])
    } else {
        String::from(lexeme)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Date(value) => write!(f, "{}", value),
            Value::List(elements) => {
                let rendered: Vec<String> =
                    elements.iter().map(|element| element.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}
