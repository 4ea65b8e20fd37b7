//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric literals, string literals,
//! operators, comments, position tracking, and error cases.

use super::{cursor::Cursor, scanner::Scanner, tokens::TokenKind};
use crate::lexer::tokens::Token;

fn scan_all(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(Cursor::new(source));
    let mut tokens = vec![];
    loop {
        let token = scanner.next_token().unwrap();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[test]
fn test_scan_keywords() {
    let tokens = scan_all("if else while foreach in class int float string bool datetime list date");

    assert_eq!(tokens[0].kind, TokenKind::IfKeyword);
    assert_eq!(tokens[1].kind, TokenKind::ElseKeyword);
    assert_eq!(tokens[2].kind, TokenKind::WhileKeyword);
    assert_eq!(tokens[3].kind, TokenKind::ForeachKeyword);
    assert_eq!(tokens[4].kind, TokenKind::InKeyword);
    assert_eq!(tokens[5].kind, TokenKind::ClassKeyword);
    assert_eq!(tokens[6].kind, TokenKind::IntKeyword);
    assert_eq!(tokens[7].kind, TokenKind::FloatKeyword);
    assert_eq!(tokens[8].kind, TokenKind::StringKeyword);
    assert_eq!(tokens[9].kind, TokenKind::BoolKeyword);
    assert_eq!(tokens[10].kind, TokenKind::DateTimeKeyword);
    assert_eq!(tokens[11].kind, TokenKind::ListKeyword);
    assert_eq!(tokens[12].kind, TokenKind::DateKeyword);
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_scan_identifiers() {
    let tokens = scan_all("foo bar2 CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "bar2");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].lexeme, "CamelCase");
}

#[test]
fn test_scan_compound_identifier() {
    let tokens = scan_all("Console.WriteLine");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "Console.WriteLine");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_scan_numbers() {
    let tokens = scan_all("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::IntConstant);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatConstant);
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntConstant);
    assert_eq!(tokens[2].lexeme, "0");
    assert_eq!(tokens[3].kind, TokenKind::FloatConstant);
    assert_eq!(tokens[3].lexeme, "100.5");
}

#[test]
fn test_scan_bool_constants() {
    let tokens = scan_all("true false");

    assert_eq!(tokens[0].kind, TokenKind::BoolConstant);
    assert_eq!(tokens[0].lexeme, "true");
    assert_eq!(tokens[1].kind, TokenKind::BoolConstant);
    assert_eq!(tokens[1].lexeme, "false");
}

#[test]
fn test_scan_strings_keep_quotes() {
    let tokens = scan_all("'hello' \"world\"");

    assert_eq!(tokens[0].kind, TokenKind::StringConstant);
    assert_eq!(tokens[0].lexeme, "'hello'");
    assert_eq!(tokens[1].kind, TokenKind::StringConstant);
    assert_eq!(tokens[1].lexeme, "\"world\"");
}

#[test]
fn test_scan_operators() {
    let tokens = scan_all("+ - * / % == != < > <= >= = && || ! ++ --");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::LessOrEqual,
            TokenKind::GreaterOrEqual,
            TokenKind::Assign,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Increment,
            TokenKind::Decrement,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_punctuation() {
    let tokens = scan_all("{ } ( ) [ ] , ;");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_assign_followed_by_space_is_single() {
    // `= =` must scan as two Assign tokens, not one Equal.
    let tokens = scan_all("= =");

    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[1].kind, TokenKind::Assign);
}

#[test]
fn test_block_comment_is_skipped() {
    let tokens = scan_all("a /* comment * with / noise */ b");

    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].lexeme, "b");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_multiline_comment_tracks_lines() {
    let tokens = scan_all("a /* first\nsecond\nthird */ b");

    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[1].lexeme, "b");
    assert_eq!(tokens[1].position.line, 3);
    assert_eq!(tokens[1].position.column, 10);
}

#[test]
fn test_position_tracking() {
    let tokens = scan_all("int x;\nx = 1;");

    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.column, 5);
    assert_eq!(tokens[3].position.line, 2);
    assert_eq!(tokens[3].position.column, 1);
    assert_eq!(tokens[4].position.column, 3);
}

#[test]
fn test_rescanning_is_deterministic() {
    let source = "{ int x; x = 2 + 3; /* note */ }";
    let first: Vec<_> = scan_all(source)
        .iter()
        .map(|t| (t.kind, t.lexeme.clone(), t.position))
        .collect();
    let second: Vec<_> = scan_all(source)
        .iter()
        .map(|t| (t.kind, t.lexeme.clone(), t.position))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_eof_is_sticky() {
    let mut scanner = Scanner::new(Cursor::new(""));

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_unrecognised_character() {
    let mut scanner = Scanner::new(Cursor::new("  #"));
    let error = scanner.next_token().unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_lone_ampersand_is_error() {
    let mut scanner = Scanner::new(Cursor::new("a & b"));
    scanner.next_token().unwrap();
    let error = scanner.next_token().unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_unterminated_string() {
    let mut scanner = Scanner::new(Cursor::new("'abc"));
    let error = scanner.next_token().unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_unterminated_comment() {
    let mut scanner = Scanner::new(Cursor::new("/* never closed"));
    let error = scanner.next_token().unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
}
