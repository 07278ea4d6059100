//! # Tokens
//!
//! Selectors, params and values are reassembled from source slices, so only
//! structural punctuation gets its own kind; everything else is a `Word`.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::lexer::{Token, TokenKind};
//! use stylesheet::span::Span;
//!
//! let token = Token::new(TokenKind::AtKeyword, Span::from_bytes(0, 10), "@component".to_string());
//! assert_eq!(token.kind, TokenKind::AtKeyword);
//! ```

use crate::span::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Exactly as written, including quotes and comment markers.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `@` followed by a name
    AtKeyword,
    /// `"..."` or `'...'`
    String,
    Word,
    Whitespace,
    /// `/* ... */`
    Comment,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Eof,
}

impl TokenKind {
    /// `(` or `[`. Braces are blocks, not groups.
    pub const fn is_open_bracket(&self) -> bool {
        matches!(self, Self::LParen | Self::LBracket)
    }

    pub const fn is_close_bracket(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket)
    }
}
