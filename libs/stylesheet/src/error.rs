//! # Parse Errors
//!
//! Error types for the stylesheet parser.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::error::ParseError;
//!
//! let error = ParseError::unexpected_token("}", "rule or declaration");
//! println!("{}", error);
//! ```

use crate::span::Span;
use std::fmt;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// `found` where `expected` should be. The span is set with
    /// [`ParseError::with_span`].
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.kind,
            self.span.start.line + 1,
            self.span.start.column + 1
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// A `{` block reached end of file without its `}`.
    UnclosedBlock,

    /// A declaration without a `:` between property and value.
    MissingColon {
        /// The offending text.
        text: String,
    },

    /// Unterminated string literal.
    UnterminatedString,

    /// Unterminated `/* ... */` comment.
    UnterminatedComment,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token '{}', expected {}", found, expected)
            }
            Self::UnclosedBlock => write!(f, "unclosed block"),
            Self::MissingColon { text } => write!(f, "unknown word '{}'", text),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedComment => write!(f, "unterminated comment"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
