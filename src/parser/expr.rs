//! The expression precedence ladder, loosest binding first:
//!
//!   logical (&&, ||)
//!   equality (==, !=)
//!   relational (<, <=, >, >=)   non-associative
//!   additive (+, -)
//!   multiplicative (*, /, %)
//!   factor
//!
//! The relational level accepts at most one operator, so `a < b < c` is
//! a syntax error at the second `<` rather than a bool-int comparison.

use crate::{
    ast::{
        expressions::{BinaryExpr, ConstantExpr, Expr, IdentifierExpr, NotExpr},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_logical(parser)
}

fn parse_logical(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_equality(parser)?;
    while matches!(parser.current().kind, TokenKind::And | TokenKind::Or) {
        let operator = parser.advance()?;
        let right = parse_equality(parser)?;
        left = Expr::Logical(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    Ok(left)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_relational(parser)?;
    while matches!(parser.current().kind, TokenKind::Equal | TokenKind::NotEqual) {
        let operator = parser.advance()?;
        let right = parse_relational(parser)?;
        left = Expr::Relational(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    Ok(left)
}

fn parse_relational(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_additive(parser)?;

    if matches!(
        parser.current().kind,
        TokenKind::LessThan
            | TokenKind::LessOrEqual
            | TokenKind::GreaterThan
            | TokenKind::GreaterOrEqual
    ) {
        let operator = parser.advance()?;
        let right = parse_additive(parser)?;
        return Ok(Expr::Relational(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }));
    }

    Ok(left)
}

fn parse_additive(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_multiplicative(parser)?;
    while matches!(parser.current().kind, TokenKind::Plus | TokenKind::Minus) {
        let operator = parser.advance()?;
        let right = parse_multiplicative(parser)?;
        left = Expr::Arithmetic(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    Ok(left)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;
    while matches!(
        parser.current().kind,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent
    ) {
        let operator = parser.advance()?;
        let right = parse_factor(parser)?;
        left = Expr::Arithmetic(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    Ok(left)
}

fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current().kind {
        TokenKind::OpenParen => {
            parser.advance()?;
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(inner)
        }
        TokenKind::IntConstant => constant(parser, Type::Int),
        TokenKind::FloatConstant => constant(parser, Type::Float),
        TokenKind::StringConstant => constant(parser, Type::String),
        TokenKind::BoolConstant => constant(parser, Type::Bool),
        TokenKind::Not => {
            let operator = parser.advance()?;
            let right = parse_factor(parser)?;
            Ok(Expr::Not(NotExpr {
                operator,
                right: Box::new(right),
            }))
        }
        TokenKind::DateKeyword => parse_date_literal(parser),
        TokenKind::ListKeyword => parse_list_literal(parser),
        TokenKind::Identifier => {
            let name = parser.advance()?;
            let symbol = parser.environment.resolve(&name.lexeme, name.position)?;
            Ok(Expr::Identifier(IdentifierExpr {
                symbol,
                position: name.position,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current().lexeme.clone(),
                message: String::from("expected an expression"),
            },
            parser.current().position,
        )),
    }
}

fn constant(parser: &mut Parser, ty: Type) -> Result<Expr, Error> {
    let token = parser.advance()?;
    Ok(Expr::Constant(ConstantExpr {
        ty,
        lexeme: token.lexeme,
        position: token.position,
    }))
}

/// `date(day/month/year)`, stored as a `D/M/Y` lexeme.
fn parse_date_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::OpenParen)?;
    let day = parser.expect(TokenKind::IntConstant)?;
    parser.expect(TokenKind::Slash)?;
    let month = parser.expect(TokenKind::IntConstant)?;
    parser.expect(TokenKind::Slash)?;
    let year = parser.expect(TokenKind::IntConstant)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Constant(ConstantExpr {
        ty: Type::Date,
        lexeme: format!("{}/{}/{}", day.lexeme, month.lexeme, year.lexeme),
        position: keyword.position,
    }))
}

/// `list<T>(e1, e2, ...)`. Every element must be a literal of the
/// declared element type; the elements are stored comma-joined so the
/// generated bracket form reproduces them verbatim.
fn parse_list_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::LessThan)?;

    let element = parser.advance()?;
    let (list_type, element_kind) = match element.kind {
        TokenKind::IntKeyword => (Type::IntList, TokenKind::IntConstant),
        TokenKind::FloatKeyword => (Type::FloatList, TokenKind::FloatConstant),
        TokenKind::StringKeyword => (Type::StringList, TokenKind::StringConstant),
        TokenKind::BoolKeyword => (Type::BoolList, TokenKind::BoolConstant),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: element.lexeme,
                    message: String::from("expected a list element type"),
                },
                element.position,
            ))
        }
    };

    parser.expect(TokenKind::GreaterThan)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut elements = vec![];
    if parser.current().kind != TokenKind::CloseParen {
        elements.push(parser.expect(element_kind)?.lexeme);
        while parser.current().kind == TokenKind::Comma {
            parser.advance()?;
            elements.push(parser.expect(element_kind)?.lexeme);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Constant(ConstantExpr {
        ty: list_type,
        lexeme: elements.join(","),
        position: keyword.position,
    }))
}
