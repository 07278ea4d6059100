//! # Stylesheet Parser
//!
//! Recursive descent parser for stylesheets.
//! Appends rules, at-rules, declarations and comments to a [`Stylesheet`].
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::lexer::Lexer;
//! use stylesheet::parser::Parser;
//! use stylesheet::tree::Stylesheet;
//!
//! let source = "@component Button { color: red; }";
//! let (tokens, _) = Lexer::new(source).tokenize();
//! let mut sheet = Stylesheet::new();
//! let input = sheet.add_anonymous_input();
//! let errors = Parser::new(source, tokens, &mut sheet, input).parse();
//! assert!(errors.is_empty());
//! ```

mod statements;

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};
use crate::tree::{InputId, NodeId, Source, Stylesheet};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser writing into a [`Stylesheet`].
pub struct Parser<'a, 's> {
    /// Source text, sliced for selectors, params and values.
    source: &'a str,
    /// Token stream, always terminated by EOF.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Collected parse errors.
    errors: Vec<ParseError>,
    /// Destination tree.
    sheet: &'s mut Stylesheet,
    /// Input the nodes are attributed to.
    input: InputId,
}

impl<'a, 's> Parser<'a, 's> {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `source`: Original source text
    /// - `tokens`: Tokens from lexer
    /// - `sheet`: Stylesheet receiving the parsed nodes
    /// - `input`: Input the source belongs to
    pub fn new(source: &'a str, mut tokens: Vec<Token>, sheet: &'s mut Stylesheet, input: InputId) -> Self {
        if tokens.last().map_or(true, |t| !t.is_eof()) {
            let end = Position::new(source.len(), 0, 0);
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end), String::new()));
        }
        Self {
            source,
            tokens,
            current: 0,
            errors: Vec::new(),
            sheet,
            input,
        }
    }

    /// Parse the source, appending top-level nodes to the stylesheet root.
    ///
    /// ## Returns
    ///
    /// Parse errors; nodes parsed before and after each error are kept.
    pub fn parse(mut self) -> Vec<ParseError> {
        let root = self.sheet.root();
        self.parse_nodes(root, None);
        self.errors
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Token kind at an absolute index.
    fn kind_at(&self, index: usize) -> TokenKind {
        self.tokens[index.min(self.tokens.len() - 1)].kind
    }

    /// Check if at end of file.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Get previous token.
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Skip whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.peek_kind() == TokenKind::Whitespace {
            self.advance();
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Index of the token ending the current statement.
    ///
    /// Stops at `{` or `}` at any nesting, at `;` outside parentheses and
    /// brackets, or at EOF.
    fn find_terminator(&self) -> usize {
        let mut depth = 0usize;
        let mut index = self.current;
        loop {
            match self.kind_at(index) {
                TokenKind::Eof | TokenKind::LBrace | TokenKind::RBrace => return index,
                TokenKind::Semicolon if depth == 0 => return index,
                kind if kind.is_open_bracket() => depth += 1,
                kind if kind.is_close_bracket() => depth = depth.saturating_sub(1),
                _ => {}
            }
            index += 1;
        }
    }

    /// Source text covered by tokens `from..to`.
    fn slice(&self, from: usize, to: usize) -> &'a str {
        if from >= to {
            return "";
        }
        let start = self.tokens[from].span.start.byte;
        let end = self.tokens[to.min(self.tokens.len() - 1)].span.start.byte;
        &self.source[start..end]
    }

    /// Node source from `start` to the end of the previous token.
    fn source_from(&self, start: Position) -> Source {
        Source {
            input: self.input,
            span: Span::new(start, self.previous().span.end),
        }
    }

    /// Append a node to `parent` attributed to `start..previous`.
    fn attach(&mut self, parent: NodeId, node: NodeId, start: Position) {
        let source = self.source_from(start);
        self.sheet.set_source(node, Some(source));
        self.sheet.append(parent, node);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::tree::{NodeData, NodeKind};

    fn parse(source: &str) -> (Stylesheet, Vec<ParseError>) {
        let (tokens, mut errors) = Lexer::new(source).tokenize();
        let mut sheet = Stylesheet::new();
        let input = sheet.add_anonymous_input();
        errors.extend(Parser::new(source, tokens, &mut sheet, input).parse());
        (sheet, errors)
    }

    #[test]
    fn test_parse_empty() {
        let (sheet, errors) = parse("");
        assert!(errors.is_empty());
        assert!(sheet.children(sheet.root()).is_empty());
    }

    #[test]
    fn test_parse_rule_with_declaration() {
        let (sheet, errors) = parse(".a { color: red; }");
        assert!(errors.is_empty(), "{:?}", errors);
        let rule = sheet.children(sheet.root())[0];
        assert_eq!(sheet.data(rule), &NodeData::rule(".a"));
        let decl = sheet.children(rule)[0];
        assert_eq!(sheet.data(decl), &NodeData::declaration("color", "red"));
    }

    #[test]
    fn test_parse_bodiless_at_rule() {
        let (sheet, errors) = parse("@component-namespace nmsp;");
        assert!(errors.is_empty());
        let node = sheet.children(sheet.root())[0];
        assert_eq!(
            sheet.data(node),
            &NodeData::AtRule {
                name: "component-namespace".to_string(),
                params: "nmsp".to_string(),
                has_body: false,
            }
        );
    }

    #[test]
    fn test_parse_empty_block_at_rule() {
        let (sheet, _) = parse("@utility clearFix {}");
        let node = sheet.children(sheet.root())[0];
        assert_eq!(sheet.data(node), &NodeData::at_rule("utility", "clearFix"));
        assert!(sheet.children(node).is_empty());
    }

    #[test]
    fn test_parse_nested_at_rules() {
        let (sheet, errors) = parse("@component A { @modifier b { @descendent c {} } }");
        assert!(errors.is_empty());
        let component = sheet.children(sheet.root())[0];
        let modifier = sheet.children(component)[0];
        let descendent = sheet.children(modifier)[0];
        assert_eq!(sheet.kind(descendent), NodeKind::AtRule);
        assert_eq!(sheet.descendants(sheet.root()).len(), 3);
    }

    #[test]
    fn test_parse_pseudo_selector_is_rule() {
        let (sheet, _) = parse("a:hover { color: red }");
        let node = sheet.children(sheet.root())[0];
        assert_eq!(sheet.data(node), &NodeData::rule("a:hover"));
    }

    #[test]
    fn test_parse_important() {
        let (sheet, _) = parse(".a { color: red !important; }");
        let rule = sheet.children(sheet.root())[0];
        let decl = sheet.children(rule)[0];
        assert_eq!(
            sheet.data(decl),
            &NodeData::Declaration {
                property: "color".to_string(),
                value: "red".to_string(),
                important: true,
            }
        );
    }

    #[test]
    fn test_parse_semicolon_inside_url() {
        let (sheet, errors) = parse(".a { background: url(data:x;y); }");
        assert!(errors.is_empty());
        let rule = sheet.children(sheet.root())[0];
        let decl = sheet.children(rule)[0];
        assert_eq!(sheet.data(decl), &NodeData::declaration("background", "url(data:x;y)"));
    }

    #[test]
    fn test_parse_comment() {
        let (sheet, _) = parse("/* note */ .a {}");
        let comment = sheet.children(sheet.root())[0];
        assert_eq!(
            sheet.data(comment),
            &NodeData::Comment {
                text: "note".to_string()
            }
        );
    }

    #[test]
    fn test_node_locations() {
        let (sheet, _) = parse("\n  .a {}");
        let rule = sheet.children(sheet.root())[0];
        let location = sheet.location(rule).expect("parsed nodes have sources");
        assert_eq!((location.line, location.column), (2, 3));
    }

    #[test]
    fn test_unclosed_block_reports_error() {
        let (sheet, errors) = parse(".a { color: red;");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, crate::error::ParseErrorKind::UnclosedBlock);
        assert_eq!(sheet.children(sheet.root()).len(), 1);
    }

    #[test]
    fn test_stray_close_brace_recovers() {
        let (sheet, errors) = parse("} .a {}");
        assert_eq!(errors.len(), 1);
        assert_eq!(sheet.children(sheet.root()).len(), 1);
    }

    #[test]
    fn test_missing_colon_recovers() {
        let (sheet, errors) = parse(".a { color red; margin: 0 }");
        assert_eq!(errors.len(), 1);
        let rule = sheet.children(sheet.root())[0];
        assert_eq!(sheet.children(rule).len(), 1);
    }
}
