//! # Source Spans
//!
//! Positions and ranges in stylesheet source text.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::span::{Position, Span};
//!
//! let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
//! assert_eq!(span.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// All fields are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset.
    pub byte: usize,
    /// Line number.
    pub line: usize,
    /// Column (in characters).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A range in the source text, start inclusive and end exclusive.
///
/// ## Example
///
/// ```rust
/// use stylesheet::span::Span;
///
/// let span = Span::from_bytes(5, 15);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a new span.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span on line 0 from byte offsets.
    ///
    /// Used by tests and by nodes that only need a byte range.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start.byte >= self.end.byte
    }

    /// True if the byte offset lies inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.byte && offset < self.end.byte
    }

    /// Smallest span covering both spans.
    pub fn merge(&self, other: &Span) -> Span {
        let start = if other.start.byte < self.start.byte { other.start } else { self.start };
        let end = if other.end.byte > self.end.byte { other.end } else { self.end };
        Span { start, end }
    }
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Source range of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================
