//! # Stylesheet Lexer
//!
//! Tokenizes CSS source into a flat stream of structural tokens.
//! Whitespace and comments are kept as tokens so the parser can slice
//! selectors, params and values back out of the source verbatim.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::lexer::{Lexer, TokenKind};
//!
//! let (tokens, errors) = Lexer::new("@component Button {}").tokenize();
//! assert!(errors.is_empty());
//! assert_eq!(tokens[0].kind, TokenKind::AtKeyword);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Stylesheet lexer.
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
    /// Lexical errors (unterminated strings and comments).
    errors: Vec<ParseError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens ending with an EOF token, plus any lexical errors.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<ParseError>) {
        while !self.cursor.is_eof() {
            self.scan_token();
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        (self.tokens, self.errors)
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.position();

        if self.cursor.starts_with("/*") {
            return self.scan_comment(start);
        }

        let c = match self.cursor.peek() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '"' | '\'' => return self.scan_string(start, c),
            '@' if self.cursor.peek_next().map_or(false, is_name_char) => {
                return self.scan_at_keyword(start)
            }
            c if c.is_whitespace() => {
                self.cursor.advance_while(char::is_whitespace);
                return self.push(TokenKind::Whitespace, start);
            }
            _ => return self.scan_word(start),
        };

        self.cursor.advance();
        self.push(kind, start);
    }

    /// Scan a `/* ... */` comment.
    fn scan_comment(&mut self, start: Position) {
        self.cursor.advance(); // /
        self.cursor.advance(); // *
        let mut terminated = false;
        while !self.cursor.is_eof() {
            if self.cursor.starts_with("*/") {
                self.cursor.advance(); // *
                self.cursor.advance(); // /
                terminated = true;
                break;
            }
            self.cursor.advance();
        }

        if !terminated {
            let span = Span::new(start, self.cursor.position());
            self.errors.push(ParseError::new(ParseErrorKind::UnterminatedComment, span));
        }
        self.push(TokenKind::Comment, start);
    }

    /// Scan a quoted string.
    fn scan_string(&mut self, start: Position, quote: char) {
        self.cursor.advance(); // Opening quote
        let mut terminated = false;
        while let Some(c) = self.cursor.peek() {
            if c == quote {
                self.cursor.advance();
                terminated = true;
                break;
            }
            if c == '\n' {
                break;
            }
            if c == '\\' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }

        if !terminated {
            let span = Span::new(start, self.cursor.position());
            self.errors.push(ParseError::new(ParseErrorKind::UnterminatedString, span));
        }
        self.push(TokenKind::String, start);
    }

    /// Scan `@name`.
    fn scan_at_keyword(&mut self, start: Position) {
        self.cursor.advance(); // @
        self.cursor.advance_while(is_name_char);
        self.push(TokenKind::AtKeyword, start);
    }

    /// Scan a run of non-structural characters.
    fn scan_word(&mut self, start: Position) {
        while let Some(c) = self.cursor.peek() {
            if c == '\\' {
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            if is_structural(c) || c.is_whitespace() || self.cursor.starts_with("/*") {
                break;
            }
            self.cursor.advance();
        }

        // Always make progress
        if self.cursor.position().byte == start.byte {
            self.cursor.advance();
        }
        self.push(TokenKind::Word, start);
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = &self.source[start.byte..end.byte];
        self.tokens.push(Token::new(kind, Span::new(start, end), text.to_string()));
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn is_structural(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | '[' | ']' | ';' | ':' | ',' | '"' | '\'')
}

// =============================================================================
// TESTS
// =============================================================================
