use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::IfKeyword);
        map.insert("else", TokenKind::ElseKeyword);
        map.insert("while", TokenKind::WhileKeyword);
        map.insert("foreach", TokenKind::ForeachKeyword);
        map.insert("in", TokenKind::InKeyword);
        map.insert("class", TokenKind::ClassKeyword);
        map.insert("int", TokenKind::IntKeyword);
        map.insert("float", TokenKind::FloatKeyword);
        map.insert("string", TokenKind::StringKeyword);
        map.insert("bool", TokenKind::BoolKeyword);
        map.insert("datetime", TokenKind::DateTimeKeyword);
        map.insert("list", TokenKind::ListKeyword);
        map.insert("date", TokenKind::DateKeyword);
        map
    };

    /// Boolean literals are keyword-shaped but classify as constants.
    pub static ref BOOL_CONSTANT_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::BoolConstant);
        map.insert("false", TokenKind::BoolConstant);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    IntConstant,
    FloatConstant,
    StringConstant,
    BoolConstant,

    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Comma,
    Semicolon,

    Assign,    // =
    Equal,     // ==
    Not,       // !
    NotEqual,  // !=

    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,

    And,
    Or,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Increment,
    Decrement,

    // Reserved
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    ForeachKeyword,
    InKeyword,
    ClassKeyword,
    IntKeyword,
    FloatKeyword,
    StringKeyword,
    BoolKeyword,
    DateTimeKeyword,
    ListKeyword,
    DateKeyword,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Produced once per `next_token` call; immutable, no back-reference to
/// the source. The position is that of the token's first character.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, lexeme: {} }}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::IntKeyword
                | TokenKind::FloatKeyword
                | TokenKind::StringKeyword
                | TokenKind::BoolKeyword
                | TokenKind::DateTimeKeyword
                | TokenKind::ListKeyword
        )
    }
}
