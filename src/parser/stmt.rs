//! Statement productions. Each function consumes a full production from
//! the parser's token stream and returns its tree node.

use crate::{
    ast::{
        expressions::Expr,
        statements::{
            AssignmentStmt, BlockStmt, CallStmt, ClassStmt, DeclarationStmt, ForeachStmt, IfStmt,
            StepStmt, Stmt, WhileStmt,
        },
        types::Type,
    },
    environment::Symbol,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr, parser::Parser},
};

/// `{ declaration* statement* }`. The block owns a scope: it is pushed
/// at `{` and popped at `}`, so names declared inside are invisible to
/// the code after the block.
pub fn parse_block(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenBrace)?;
    parser.environment.push_scope();

    let mut body = vec![];
    while parser.current().is_type_keyword() {
        body.push(parse_declaration(parser)?);
    }
    while parser.current().kind != TokenKind::CloseBrace && parser.current().kind != TokenKind::EOF
    {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseBrace)?;
    parser.environment.pop_scope();

    Ok(Stmt::Block(BlockStmt { body }))
}

/// Anything that does not open a known statement form is tried as a
/// nested block, so the brace requirement surfaces there.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current().kind {
        TokenKind::Identifier => parse_identifier_stmt(parser),
        TokenKind::IfKeyword => parse_if(parser),
        TokenKind::WhileKeyword => parse_while(parser),
        TokenKind::ForeachKeyword => parse_foreach(parser),
        TokenKind::ClassKeyword => parse_class(parser),
        _ => parse_block(parser),
    }
}

/// `type name;` where type is a scalar keyword or `list<scalar>`.
fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;

    let symbol = parser
        .environment
        .declare(Symbol::new_variable(&name.lexeme, ty), name.position)?;

    Ok(Stmt::Declaration(DeclarationStmt {
        symbol,
        position: name.position,
    }))
}

fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let keyword = parser.advance()?;
    match keyword.kind {
        TokenKind::IntKeyword => Ok(Type::Int),
        TokenKind::FloatKeyword => Ok(Type::Float),
        TokenKind::StringKeyword => Ok(Type::String),
        TokenKind::BoolKeyword => Ok(Type::Bool),
        TokenKind::DateTimeKeyword => Ok(Type::Date),
        TokenKind::ListKeyword => {
            parser.expect(TokenKind::LessThan)?;
            let element = parser.advance()?;
            let ty = match element.kind {
                TokenKind::IntKeyword => Type::IntList,
                TokenKind::FloatKeyword => Type::FloatList,
                TokenKind::StringKeyword => Type::StringList,
                TokenKind::BoolKeyword => Type::BoolList,
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
            Ok(ty)
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: keyword.lexeme,
                message: String::from("expected a type"),
            },
            keyword.position,
        )),
    }
}

/// A statement opening with a name: assignment, `++`/`--`, or a call.
/// The name is resolved immediately, before looking at what follows.
fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.advance()?;
    let symbol = parser.environment.resolve(&name.lexeme, name.position)?;

    match parser.current().kind {
        TokenKind::Assign => {
            parser.advance()?;
            let value = expr::parse_expr(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Assignment(AssignmentStmt {
                target: symbol,
                value,
                position: name.position,
            }))
        }
        TokenKind::Increment => {
            parser.advance()?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Increment(StepStmt {
                target: symbol,
                position: name.position,
            }))
        }
        TokenKind::Decrement => {
            parser.advance()?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Decrement(StepStmt {
                target: symbol,
                position: name.position,
            }))
        }
        TokenKind::OpenParen => {
            let arguments = parse_arguments(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Call(CallStmt {
                callee: symbol,
                arguments,
                position: name.position,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current().lexeme.clone(),
                message: String::from("expected `=`, `++`, `--` or a call"),
            },
            parser.current().position,
        )),
    }
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current().kind != TokenKind::CloseParen {
        arguments.push(expr::parse_expr(parser)?);
        while parser.current().kind == TokenKind::Comma {
            parser.advance()?;
            arguments.push(expr::parse_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(arguments)
}

fn parse_if(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = expr::parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    let then_body = Box::new(parse_stmt(parser)?);

    let else_body = if parser.current().kind == TokenKind::ElseKeyword {
        parser.advance()?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        position: keyword.position,
    }))
}

fn parse_while(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = expr::parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        position: keyword.position,
    }))
}

/// `foreach(variable in iterable) body`. Both names are resolved in
/// source order, so an undeclared loop variable is reported before any
/// question about the iterable arises.
fn parse_foreach(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::OpenParen)?;

    let variable_name = parser.expect(TokenKind::Identifier)?;
    let variable = parser
        .environment
        .resolve(&variable_name.lexeme, variable_name.position)?;

    parser.expect(TokenKind::InKeyword)?;

    let iterable_name = parser.expect(TokenKind::Identifier)?;
    let iterable = parser
        .environment
        .resolve(&iterable_name.lexeme, iterable_name.position)?;

    parser.expect(TokenKind::CloseParen)?;
    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::Foreach(ForeachStmt {
        variable,
        iterable,
        body,
        position: keyword.position,
    }))
}

fn parse_class(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance()?;
    let name = parser.expect(TokenKind::Identifier)?;
    let body = Box::new(parse_block(parser)?);

    Ok(Stmt::Class(ClassStmt {
        name: name.lexeme,
        body,
        position: keyword.position,
    }))
}
