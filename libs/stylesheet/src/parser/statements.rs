//! # Statement Parsing
//!
//! Parses the contents of the root and of `{ ... }` blocks.
//!
//! ## Grammar
//!
//! ```text
//! nodes       = (comment | at_rule | rule | declaration | ";")*
//! at_rule     = AT_KEYWORD params (";" | block)
//! rule        = selector block
//! declaration = property ":" value ("!important")? ";"?
//! block       = "{" nodes "}"
//! ```

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use crate::span::Span;
use crate::tree::{NodeData, NodeId};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

const IMPORTANT: &str = "!important";

impl<'a, 's> Parser<'a, 's> {
    /// Parse nodes into `parent` until EOF or the `}` closing `opener`.
    pub(super) fn parse_nodes(&mut self, parent: NodeId, opener: Option<Span>) {
        loop {
            self.skip_whitespace();
            match self.peek_kind() {
                TokenKind::Eof => {
                    if let Some(span) = opener {
                        self.errors.push(ParseError::new(ParseErrorKind::UnclosedBlock, span));
                    }
                    return;
                }
                TokenKind::RBrace => {
                    let token = self.advance().clone();
                    if opener.is_some() {
                        return;
                    }
                    self.errors.push(
                        ParseError::unexpected_token(&token.text, "rule or declaration")
                            .with_span(token.span),
                    );
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                TokenKind::Comment => self.parse_comment(parent),
                TokenKind::AtKeyword => self.parse_at_rule(parent),
                _ => self.parse_rule_or_declaration(parent),
            }
        }
    }

    /// Parse a `{ ... }` block into `node`. Current token must be `{`.
    fn parse_block(&mut self, node: NodeId) {
        let opener = self.advance().span;
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.parse_nodes(node, Some(opener))
        });
    }

    /// Parse a comment.
    fn parse_comment(&mut self, parent: NodeId) {
        let token = self.advance().clone();
        let inner = token.text.strip_prefix("/*").unwrap_or(&token.text);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        let node = self.sheet.create(
            NodeData::Comment {
                text: inner.trim().to_string(),
            },
            None,
        );
        self.attach(parent, node, token.span.start);
    }

    /// Parse an at-rule, with or without a block.
    fn parse_at_rule(&mut self, parent: NodeId) {
        let keyword = self.advance().clone();
        let name = keyword.text.trim_start_matches('@').to_string();
        let params_start = self.current;
        let end = self.find_terminator();
        let params = self.slice(params_start, end).trim().to_string();
        self.current = end;

        let has_body = self.peek_kind() == TokenKind::LBrace;
        let node = self.sheet.create(
            NodeData::AtRule {
                name,
                params,
                has_body,
            },
            None,
        );

        if has_body {
            self.parse_block(node);
        } else if self.peek_kind() == TokenKind::Semicolon {
            self.advance();
        }
        self.attach(parent, node, keyword.span.start);
    }

    /// Parse a rule, or a declaration if no block follows.
    fn parse_rule_or_declaration(&mut self, parent: NodeId) {
        let start_index = self.current;
        let start = self.peek().span.start;
        let end = self.find_terminator();

        if self.kind_at(end) == TokenKind::LBrace {
            let selector = self.slice(start_index, end).trim().to_string();
            self.current = end;
            let node = self.sheet.create(NodeData::Rule { selector }, None);
            self.parse_block(node);
            self.attach(parent, node, start);
            return;
        }

        let colon = (start_index..end).find(|&i| self.kind_at(i) == TokenKind::Colon);
        let Some(colon) = colon else {
            let text = self.slice(start_index, end).trim().to_string();
            let span = Span::new(start, self.tokens[end].span.start);
            self.errors.push(ParseError::new(ParseErrorKind::MissingColon { text }, span));
            self.current = end;
            if self.peek_kind() == TokenKind::Semicolon {
                self.advance();
            }
            return;
        };

        let property = self.slice(start_index, colon).trim().to_string();
        let raw_value = self.slice(colon + 1, end).trim();
        let (value, important) = split_important(raw_value);
        self.current = end;
        if self.peek_kind() == TokenKind::Semicolon {
            self.advance();
        }

        let node = self.sheet.create(
            NodeData::Declaration {
                property,
                value,
                important,
            },
            None,
        );
        self.attach(parent, node, start);
    }
}

/// Split a trailing `!important` off a declaration value.
fn split_important(raw: &str) -> (String, bool) {
    let lower = raw.to_ascii_lowercase();
    match lower.strip_suffix(IMPORTANT) {
        Some(rest) => (raw[..rest.len()].trim_end().to_string(), true),
        None => (raw.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::split_important;

    #[test]
    fn test_split_important() {
        assert_eq!(split_important("red !important"), ("red".to_string(), true));
        assert_eq!(split_important("red!IMPORTANT"), ("red".to_string(), true));
        assert_eq!(split_important("red"), ("red".to_string(), false));
    }
}
