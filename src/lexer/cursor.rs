use std::rc::Rc;

use crate::Position;

/// An immutable character source. Advancing never mutates shared state:
/// `next_char` hands back the consumed character together with a new
/// cursor positioned after it. The scanner swaps its cursor for the
/// advanced one to consume, or drops it to peek.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Rc<Vec<char>>,
    offset: usize,
    position: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            source: Rc::new(source.chars().collect()),
            offset: 0,
            position: Position::start(),
        }
    }

    /// The position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The next character without advancing. `'\0'` signals end of input.
    pub fn peek(&self) -> char {
        self.source.get(self.offset).copied().unwrap_or('\0')
    }

    /// Consumes one character, returning it and the advanced cursor.
    /// Past the end of input this keeps returning `'\0'` with an
    /// unchanged cursor, so callers never index out of bounds.
    pub fn next_char(&self) -> (char, Cursor) {
        let current = self.peek();
        if current == '\0' {
            return (current, self.clone());
        }

        let position = if current == '\n' {
            Position {
                line: self.position.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.position.line,
                column: self.position.column + 1,
            }
        };

        (
            current,
            Cursor {
                source: Rc::clone(&self.source),
                offset: self.offset + 1,
                position,
            },
        )
    }
}
