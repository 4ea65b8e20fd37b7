//! The closed type set of the language and the operator type-rule tables.
//!
//! There are no user-defined types; lists are parametrized only over the
//! four scalar kinds. The tables drive binary-operator validation: adding
//! an allowed operand pair is a table edit, not new control flow.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::lexer::tokens::TokenKind;
use crate::MK_RULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    Date,
    Void,
    IntList,
    FloatList,
    StringList,
    BoolList,
}

impl Type {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    pub fn is_list(&self) -> bool {
        self.element_type().is_some()
    }

    pub fn element_type(&self) -> Option<Type> {
        match self {
            Type::IntList => Some(Type::Int),
            Type::FloatList => Some(Type::Float),
            Type::StringList => Some(Type::String),
            Type::BoolList => Some(Type::Bool),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Date => "date",
            Type::Void => "void",
            Type::IntList => "list<int>",
            Type::FloatList => "list<float>",
            Type::StringList => "list<string>",
            Type::BoolList => "list<bool>",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    /// Numeric pairs widen to float; strings only combine with strings.
    static ref ARITHMETIC_RULES: HashMap<(Type, Type), Type> = MK_RULES!(
        (Int, Int) => Int,
        (Int, Float) => Float,
        (Float, Int) => Float,
        (Float, Float) => Float,
        (String, String) => String,
    );

    /// Comparable pairs: numeric mixes plus same-scalar-family pairs.
    static ref RELATIONAL_RULES: HashMap<(Type, Type), Type> = MK_RULES!(
        (Int, Int) => Bool,
        (Int, Float) => Bool,
        (Float, Int) => Bool,
        (Float, Float) => Bool,
        (String, String) => Bool,
        (Bool, Bool) => Bool,
        (Date, Date) => Bool,
    );

    static ref LOGICAL_RULES: HashMap<(Type, Type), Type> = MK_RULES!(
        (Bool, Bool) => Bool,
    );
}

/// Result type of an arithmetic operator, or `None` for an incompatible
/// pair. String operands are the special case of `+` meaning
/// concatenation; every other operator rejects them.
pub fn arithmetic_result(operator: TokenKind, left: Type, right: Type) -> Option<Type> {
    if (left == Type::String || right == Type::String) && operator != TokenKind::Plus {
        return None;
    }
    ARITHMETIC_RULES.get(&(left, right)).copied()
}

pub fn relational_result(left: Type, right: Type) -> Option<Type> {
    RELATIONAL_RULES.get(&(left, right)).copied()
}

pub fn logical_result(left: Type, right: Type) -> Option<Type> {
    LOGICAL_RULES.get(&(left, right)).copied()
}
