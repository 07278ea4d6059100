//! # Stylesheet
//!
//! A small CSS parser, arena syntax tree and printer.
//! Hosts the bemify transform: the tree supports walking, inserting,
//! replacing and removing nodes, and every parsed node remembers its input.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Stylesheet → Printer → Text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::parse;
//!
//! let parsed = parse("@component Button { color: red; }");
//! assert!(parsed.is_ok());
//! ```

pub mod error;
pub mod lexer;
pub mod list;
pub mod parser;
pub mod printer;
pub mod span;
pub mod tree;

pub use error::{ParseError, ParseErrorKind};
pub use span::{Position, Span, Spanned};
pub use tree::{Input, InputId, Location, NodeData, NodeId, NodeKind, Source, Stylesheet};

// =============================================================================
// PUBLIC API
// =============================================================================

/// A stylesheet together with the errors met while parsing it.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// Parsed tree. Contains everything that could be recovered.
    pub sheet: Stylesheet,
    /// Lexical and syntax errors.
    pub errors: Vec<ParseError>,
}

impl Parsed {
    /// True if parsing produced no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse source text with an anonymous input into a fresh stylesheet.
///
/// ## Example
///
/// ```rust
/// use stylesheet::parse;
///
/// let parsed = parse(".a { color: red }");
/// let root = parsed.sheet.root();
/// assert_eq!(parsed.sheet.children(root).len(), 1);
/// ```
pub fn parse(source: &str) -> Parsed {
    let mut sheet = Stylesheet::new();
    let input = sheet.add_anonymous_input();
    let errors = parse_into(&mut sheet, source, input);
    Parsed { sheet, errors }
}

/// Parse source text and append its nodes to an existing stylesheet root.
pub fn parse_into(sheet: &mut Stylesheet, source: &str, input: InputId) -> Vec<ParseError> {
    let (tokens, mut errors) = lexer::Lexer::new(source).tokenize();
    errors.extend(parser::Parser::new(source, tokens, sheet, input).parse());
    errors
}

// =============================================================================
// TESTS
// =============================================================================
