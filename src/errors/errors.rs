use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal pipeline error: the failing invariant plus where it was
/// detected. Nothing downstream catches these; the driver presents them.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::NotAssignable { .. } => "NotAssignable",
            ErrorImpl::BooleanRequired { .. } => "BooleanRequired",
            ErrorImpl::NotIterable { .. } => "NotIterable",
            ErrorImpl::NotNumeric { .. } => "NotNumeric",
            ErrorImpl::DivisionByZero => "DivisionByZero",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing quote"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMismatch {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::NotAssignable { expected, received } => ErrorTip::Suggestion(format!(
                "Type `{}` is not assignable from `{}`",
                expected, received
            )),
            ErrorImpl::BooleanRequired { construct, received } => ErrorTip::Suggestion(format!(
                "A boolean is required in a {} condition, found `{}`",
                construct, received
            )),
            ErrorImpl::NotIterable { type_ } => {
                ErrorTip::Suggestion(format!("Type `{}` is not iterable", type_))
            }
            ErrorImpl::NotNumeric { type_ } => ErrorTip::Suggestion(format!(
                "Cannot increment or decrement type `{}`",
                type_
            )),
            ErrorImpl::DivisionByZero => {
                ErrorTip::Suggestion(String::from("Division or modulo by zero"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected token: expected {expected:?}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("operator {operator:?} cannot be applied to {left:?} and {right:?}")]
    TypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("type {expected:?} is not assignable from {received:?}")]
    NotAssignable { expected: String, received: String },
    #[error("a boolean is required in a {construct} condition, found {received:?}")]
    BooleanRequired { construct: String, received: String },
    #[error("type {type_:?} is not iterable")]
    NotIterable { type_: String },
    #[error("cannot increment or decrement type {type_:?}")]
    NotNumeric { type_: String },
    #[error("division by zero")]
    DivisionByZero,
}
