#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod codegen;
pub mod environment;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod validator;

/// A 1-based source location. The cursor advances it on every character
/// consumed; a newline bumps the line and resets the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Canonicalizes line terminators to a single `\n` so the scanner's
/// newline handling sees one control character regardless of platform.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Runs the full generation pipeline: scan, parse (resolving scopes),
/// validate, and emit JavaScript text.
pub fn compile(source: &str) -> Result<String, Error> {
    let cursor = lexer::cursor::Cursor::new(source);
    let scanner = lexer::scanner::Scanner::new(cursor);
    let mut parser = parser::parser::Parser::new(scanner)?;
    let program = parser.parse()?;
    validator::validator::validate_stmt(&program)?;
    Ok(codegen::generate(&program))
}

/// Runs the interpretation pipeline instead of generating text. Returns
/// the lines produced by `Console.WriteLine` calls.
pub fn interpret(source: &str) -> Result<Vec<String>, Error> {
    let cursor = lexer::cursor::Cursor::new(source);
    let scanner = lexer::scanner::Scanner::new(cursor);
    let mut parser = parser::parser::Parser::new(scanner)?;
    let program = parser.parse()?;
    validator::validator::validate_stmt(&program)?;
    let mut interpreter = interpreter::interpreter::Interpreter::new();
    interpreter.interpret(&program)?;
    Ok(interpreter.output)
}

pub fn get_line_at_position(source: &str, position: &Position) -> String {
    source
        .lines()
        .nth((position.line.max(1) - 1) as usize)
        .unwrap_or("")
        .to_string()
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: name (tip)
        -> code.txt (line 20, column 5)
           |
        20 | x = y;
           | ----^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {} ({})", file, position);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
