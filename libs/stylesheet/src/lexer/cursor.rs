//! # Character Cursor
//!
//! Walks the unconsumed tail of a stylesheet one character at a time,
//! keeping the byte offset, line and column of the next character.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("@when");
//! assert_eq!(cursor.peek(), Some('@'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('w'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Stylesheet text still to be tokenized, plus where it starts.
pub struct Cursor<'a> {
    rest: &'a str,
    at: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            at: Position::new(0, 0, 0),
        }
    }

    /// Position of the next unconsumed character (0-indexed line and column).
    pub fn position(&self) -> Position {
        self.at
    }

    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// The character after [`Cursor::peek`].
    pub fn peek_next(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    /// True if the unconsumed input begins with `prefix`, e.g. `"/*"`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Consume one character. A newline moves to column 0 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        self.at = match c {
            '\n' => Position::new(self.at.byte + 1, self.at.line + 1, 0),
            _ => Position::new(self.at.byte + c.len_utf8(), self.at.line, self.at.column + 1),
        };
        Some(c)
    }

    /// Consume characters up to the first one failing `predicate`.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }
}
