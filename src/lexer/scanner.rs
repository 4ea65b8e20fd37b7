use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind, BOOL_CONSTANT_LOOKUP, KEYWORD_LOOKUP},
};

/// Pull-model tokenizer: `next_token` is called repeatedly until it
/// returns an EOF token. There is no unget; the parser keeps exactly one
/// lookahead token.
pub struct Scanner {
    input: Cursor,
}

impl Scanner {
    pub fn new(input: Cursor) -> Scanner {
        Scanner { input }
    }

    fn next_char(&mut self) -> char {
        let (current, rest) = self.input.next_char();
        self.input = rest;
        current
    }

    fn peek_char(&self) -> char {
        self.input.peek()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            while self.peek_char() != '\0' && self.peek_char().is_whitespace() {
                self.next_char();
            }

            let position = self.input.position();
            let current = self.next_char();

            if current == '\0' {
                return Ok(Token {
                    kind: TokenKind::EOF,
                    lexeme: String::new(),
                    position,
                });
            }

            if current.is_alphabetic() {
                return Ok(self.identifier_or_keyword(current, position));
            }

            if current.is_ascii_digit() {
                return Ok(self.number(current, position));
            }

            match current {
                '/' => {
                    if self.peek_char() == '*' {
                        self.next_char();
                        self.skip_block_comment(position)?;
                        // The comment contributes no token; rescan.
                        continue;
                    }
                    return Ok(self.single(TokenKind::Slash, current, position));
                }
                '<' => {
                    return Ok(self.one_or_two(
                        '=',
                        TokenKind::LessThan,
                        TokenKind::LessOrEqual,
                        current,
                        position,
                    ))
                }
                '>' => {
                    return Ok(self.one_or_two(
                        '=',
                        TokenKind::GreaterThan,
                        TokenKind::GreaterOrEqual,
                        current,
                        position,
                    ))
                }
                '=' => {
                    return Ok(self.one_or_two(
                        '=',
                        TokenKind::Assign,
                        TokenKind::Equal,
                        current,
                        position,
                    ))
                }
                '!' => {
                    return Ok(self.one_or_two(
                        '=',
                        TokenKind::Not,
                        TokenKind::NotEqual,
                        current,
                        position,
                    ))
                }
                '+' => {
                    return Ok(self.one_or_two(
                        '+',
                        TokenKind::Plus,
                        TokenKind::Increment,
                        current,
                        position,
                    ))
                }
                '-' => {
                    return Ok(self.one_or_two(
                        '-',
                        TokenKind::Minus,
                        TokenKind::Decrement,
                        current,
                        position,
                    ))
                }
                '&' => {
                    if self.peek_char() == '&' {
                        self.next_char();
                        return Ok(self.single_str(TokenKind::And, "&&", position));
                    }
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character: '&' },
                        position,
                    ));
                }
                '|' => {
                    if self.peek_char() == '|' {
                        self.next_char();
                        return Ok(self.single_str(TokenKind::Or, "||", position));
                    }
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character: '|' },
                        position,
                    ));
                }
                '\'' | '"' => return self.string_literal(current, position),
                '{' => return Ok(self.single(TokenKind::OpenBrace, current, position)),
                '}' => return Ok(self.single(TokenKind::CloseBrace, current, position)),
                '(' => return Ok(self.single(TokenKind::OpenParen, current, position)),
                ')' => return Ok(self.single(TokenKind::CloseParen, current, position)),
                '[' => return Ok(self.single(TokenKind::OpenBracket, current, position)),
                ']' => return Ok(self.single(TokenKind::CloseBracket, current, position)),
                ',' => return Ok(self.single(TokenKind::Comma, current, position)),
                ';' => return Ok(self.single(TokenKind::Semicolon, current, position)),
                '*' => return Ok(self.single(TokenKind::Star, current, position)),
                '%' => return Ok(self.single(TokenKind::Percent, current, position)),
                _ => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character: current },
                        position,
                    ))
                }
            }
        }
    }

    /// Accumulates alphanumerics and `.` so compound names such as
    /// `Console.WriteLine` form a single token, then classifies against
    /// the keyword and boolean-literal tables.
    fn identifier_or_keyword(&mut self, first: char, position: Position) -> Token {
        let mut lexeme = String::from(first);
        while self.peek_char().is_alphanumeric() || self.peek_char() == '.' {
            lexeme.push(self.next_char());
        }

        let kind = if let Some(kind) = KEYWORD_LOOKUP.get(lexeme.as_str()) {
            *kind
        } else if let Some(kind) = BOOL_CONSTANT_LOOKUP.get(lexeme.as_str()) {
            *kind
        } else {
            TokenKind::Identifier
        };

        Token {
            kind,
            lexeme,
            position,
        }
    }

    fn number(&mut self, first: char, position: Position) -> Token {
        let mut lexeme = String::from(first);
        while self.peek_char().is_ascii_digit() {
            lexeme.push(self.next_char());
        }

        if self.peek_char() != '.' {
            return Token {
                kind: TokenKind::IntConstant,
                lexeme,
                position,
            };
        }

        lexeme.push(self.next_char());
        while self.peek_char().is_ascii_digit() {
            lexeme.push(self.next_char());
        }

        Token {
            kind: TokenKind::FloatConstant,
            lexeme,
            position,
        }
    }

    /// Runs until the matching closing quote; no escape handling. The
    /// quotes stay in the lexeme so generated output reproduces them.
    fn string_literal(&mut self, quote: char, position: Position) -> Result<Token, Error> {
        let mut lexeme = String::from(quote);
        loop {
            let current = self.next_char();
            if current == '\0' {
                return Err(Error::new(ErrorImpl::UnterminatedString, position));
            }
            lexeme.push(current);
            if current == quote {
                break;
            }
        }

        Ok(Token {
            kind: TokenKind::StringConstant,
            lexeme,
            position,
        })
    }

    fn skip_block_comment(&mut self, position: Position) -> Result<(), Error> {
        loop {
            let current = self.next_char();
            if current == '\0' {
                return Err(Error::new(ErrorImpl::UnterminatedComment, position));
            }
            if current == '*' && self.peek_char() == '/' {
                self.next_char();
                return Ok(());
            }
        }
    }

    fn one_or_two(
        &mut self,
        second: char,
        single: TokenKind,
        double: TokenKind,
        first: char,
        position: Position,
    ) -> Token {
        let mut lexeme = String::from(first);
        if self.peek_char() == second {
            lexeme.push(self.next_char());
            return Token {
                kind: double,
                lexeme,
                position,
            };
        }

        Token {
            kind: single,
            lexeme,
            position,
        }
    }

    fn single(&mut self, kind: TokenKind, character: char, position: Position) -> Token {
        Token {
            kind,
            lexeme: String::from(character),
            position,
        }
    }

    fn single_str(&mut self, kind: TokenKind, lexeme: &str, position: Position) -> Token {
        Token {
            kind,
            lexeme: String::from(lexeme),
            position,
        }
    }
}
