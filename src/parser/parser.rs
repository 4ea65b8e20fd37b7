use crate::{
    ast::{statements::Stmt, types::Type},
    environment::Environment,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        scanner::Scanner,
        tokens::{Token, TokenKind},
    },
    parser::stmt,
};

/// Recursive-descent parser over a pull scanner, with exactly one token
/// of lookahead. Name resolution happens here, during parsing: every
/// identifier use is bound to its `Symbol` before the tree is returned,
/// so later passes never touch the environment.
pub struct Parser {
    scanner: Scanner,
    lookahead: Token,
    pub environment: Environment,
}

impl Parser {
    /// Pulls the first token and seeds the root scope with the host
    /// callables every program can use.
    pub fn new(mut scanner: Scanner) -> Result<Parser, Error> {
        let lookahead = scanner.next_token()?;

        let mut environment = Environment::new();
        environment.push_scope();
        environment.register_builtin(
            "Console.WriteLine",
            "console.log",
            Type::Void,
            vec![(String::from("text"), Type::String)],
        );
        environment.register_builtin("Console.ReadLine", "window.prompt", Type::Void, vec![]);

        Ok(Parser {
            scanner,
            lookahead,
            environment,
        })
    }

    /// A program is a single block followed by end of input.
    pub fn parse(&mut self) -> Result<Stmt, Error> {
        let program = stmt::parse_block(self)?;
        self.expect(TokenKind::EOF)?;
        Ok(program)
    }

    pub fn current(&self) -> &Token {
        &self.lookahead
    }

    /// Consumes the lookahead and returns it, pulling its replacement
    /// from the scanner.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.lookahead.kind != kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: kind.to_string(),
                    found: self.lookahead.kind.to_string(),
                },
                self.lookahead.position,
            ));
        }
        self.advance()
    }
}
