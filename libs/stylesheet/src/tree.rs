//! # Stylesheet Tree
//!
//! Arena-backed syntax tree for parsed stylesheets.
//!
//! Nodes are addressed by [`NodeId`] handles. Every node has at most one
//! parent and the parent owns the ordering of its children. Detaching a node
//! (remove, replace, move) never frees it: the arena keeps it so that stale
//! handles stay valid, but it is no longer reachable from the root.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::tree::{NodeData, Stylesheet};
//!
//! let mut sheet = Stylesheet::new();
//! let rule = sheet.create(NodeData::rule(".a"), None);
//! let root = sheet.root();
//! sheet.append(root, rule);
//! assert_eq!(sheet.children(root), &[rule]);
//! ```

use crate::span::Span;
use config::constants::ANONYMOUS_INPUT_PREFIX;
use serde::Serialize;
use std::fmt;

// =============================================================================
// HANDLES
// =============================================================================

/// Handle to a node in a [`Stylesheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Handle to a parsed input in a [`Stylesheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

// =============================================================================
// INPUTS AND SOURCES
// =============================================================================

/// One source text parsed into the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Generated identifier, unique within the stylesheet.
    pub id: String,
    /// Path the text was read from, if any.
    pub file: Option<String>,
}

impl Input {
    /// Input read from a file.
    pub fn from_file(file: impl Into<String>) -> Self {
        let file = file.into();
        Self {
            id: file.clone(),
            file: Some(file),
        }
    }

    /// Name used to identify this input: the file if known, else the id.
    pub fn name(&self) -> &str {
        self.file.as_deref().unwrap_or(&self.id)
    }
}

/// Where a node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Input the node was parsed from.
    pub input: InputId,
    /// Range within that input.
    pub span: Span,
}

/// Human-facing location of a node, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Input name (file or generated id).
    pub input: String,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.input, self.line, self.column)
    }
}

// =============================================================================
// NODES
// =============================================================================

/// Node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The stylesheet root.
    Root,
    /// `selector { ... }`
    Rule,
    /// `@name params;` or `@name params { ... }`
    AtRule,
    /// `property: value;`
    Declaration,
    /// `/* text */`
    Comment,
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The stylesheet root.
    Root,
    /// Qualified rule.
    Rule {
        /// Selector text, trimmed.
        selector: String,
    },
    /// At-rule.
    AtRule {
        /// Keyword without the `@`.
        name: String,
        /// Prelude text, trimmed.
        params: String,
        /// True for the block form, even when the block is empty.
        has_body: bool,
    },
    /// Declaration.
    Declaration {
        /// Property name.
        property: String,
        /// Value without `!important`.
        value: String,
        /// Whether the declaration was marked `!important`.
        important: bool,
    },
    /// Comment.
    Comment {
        /// Comment text without delimiters, trimmed.
        text: String,
    },
}

impl NodeData {
    /// Rule payload.
    pub fn rule(selector: impl Into<String>) -> Self {
        Self::Rule {
            selector: selector.into(),
        }
    }

    /// Block at-rule payload.
    pub fn at_rule(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self::AtRule {
            name: name.into(),
            params: params.into(),
            has_body: true,
        }
    }

    /// Declaration payload.
    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Node type tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Root => NodeKind::Root,
            Self::Rule { .. } => NodeKind::Rule,
            Self::AtRule { .. } => NodeKind::AtRule,
            Self::Declaration { .. } => NodeKind::Declaration,
            Self::Comment { .. } => NodeKind::Comment,
        }
    }
}

/// A node slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Payload.
    pub data: NodeData,
    /// Origin, absent for synthesized nodes.
    pub source: Option<Source>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

// =============================================================================
// STYLESHEET
// =============================================================================

/// A parsed stylesheet: node arena plus the inputs it was built from.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    nodes: Vec<Node>,
    inputs: Vec<Input>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// Create an empty stylesheet containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Root,
                source: None,
                parent: None,
                children: Vec::new(),
            }],
            inputs: Vec::new(),
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // =========================================================================
    // INPUTS
    // =========================================================================

    /// Register an input.
    pub fn add_input(&mut self, input: Input) -> InputId {
        self.inputs.push(input);
        InputId(self.inputs.len() - 1)
    }

    /// Register an input that has no file, named `<input css N>`.
    pub fn add_anonymous_input(&mut self) -> InputId {
        let n = self.inputs.len() + 1;
        self.add_input(Input {
            id: format!("{} {}>", ANONYMOUS_INPUT_PREFIX, n),
            file: None,
        })
    }

    /// Look up an input.
    pub fn input(&self, id: InputId) -> &Input {
        &self.inputs[id.0]
    }

    /// All inputs in registration order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    // =========================================================================
    // NODE ACCESS
    // =========================================================================

    /// Access a node.
    ///
    /// Handles are only minted by this stylesheet, so indexing cannot fail
    /// for a handle obtained from it.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Payload of a node.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    /// Mutable payload of a node.
    pub fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0].data
    }

    /// Node type tag.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.data(id).kind()
    }

    /// Parent of a node; `None` for the root and for detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Last child, if any.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Origin of a node.
    pub fn source(&self, id: NodeId) -> Option<Source> {
        self.nodes[id.0].source
    }

    /// Set the origin of a node.
    pub fn set_source(&mut self, id: NodeId, source: Option<Source>) {
        self.nodes[id.0].source = source;
    }

    /// Name of the input a node came from.
    pub fn source_name(&self, id: NodeId) -> Option<&str> {
        self.source(id).map(|s| self.input(s.input).name())
    }

    /// 1-indexed location of the start of a node.
    pub fn location(&self, id: NodeId) -> Option<Location> {
        let source = self.source(id)?;
        Some(Location {
            input: self.input(source.input).name().to_string(),
            line: source.span.start.line + 1,
            column: source.span.start.column + 1,
        })
    }

    /// True if the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// All descendants of a node in document (pre-)order, excluding the node.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Number of nodes reachable from the root, root included.
    pub fn attached_count(&self) -> usize {
        self.descendants(self.root()).len() + 1
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Create a detached node.
    pub fn create(&mut self, data: NodeData, source: Option<Source>) -> NodeId {
        self.nodes.push(Node {
            data,
            source,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// `child` must not be `parent` or one of its ancestors.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(!self.is_ancestor_or_self(child, parent));
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Move `node` into `container` directly after `anchor`.
    ///
    /// If `anchor` is not a child of `container`, `node` is appended.
    pub fn insert_after(&mut self, container: NodeId, anchor: NodeId, node: NodeId) {
        if node == anchor {
            return;
        }
        debug_assert!(!self.is_ancestor_or_self(node, container));
        self.detach(node);
        let siblings = &mut self.nodes[container.0].children;
        match siblings.iter().position(|&c| c == anchor) {
            Some(index) => siblings.insert(index + 1, node),
            None => siblings.push(node),
        }
        self.nodes[node.0].parent = Some(container);
    }

    /// Put `new` where `old` is and detach `old`.
    ///
    /// Does nothing if `old` has no parent.
    pub fn replace_with(&mut self, old: NodeId, new: NodeId) {
        if old == new {
            return;
        }
        let Some(parent) = self.parent(old) else {
            return;
        };
        self.detach(new);
        let siblings = &mut self.nodes[parent.0].children;
        if let Some(index) = siblings.iter().position(|&c| c == old) {
            siblings[index] = new;
        }
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;
    }

    /// Detach a node (and with it, its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    fn rule(sheet: &mut Stylesheet, selector: &str) -> NodeId {
        sheet.create(NodeData::rule(selector), None)
    }

    fn selectors(sheet: &Stylesheet, parent: NodeId) -> Vec<String> {
        sheet
            .children(parent)
            .iter()
            .map(|&c| match sheet.data(c) {
                NodeData::Rule { selector } => selector.clone(),
                other => format!("{:?}", other.kind()),
            })
            .collect()
    }

    #[test]
    fn test_new_sheet_has_only_root() {
        let sheet = Stylesheet::new();
        assert_eq!(sheet.kind(sheet.root()), NodeKind::Root);
        assert!(sheet.children(sheet.root()).is_empty());
        assert_eq!(sheet.attached_count(), 1);
    }

    #[test]
    fn test_insert_after_places_node() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let a = rule(&mut sheet, ".a");
        let c = rule(&mut sheet, ".c");
        let b = rule(&mut sheet, ".b");
        sheet.append(root, a);
        sheet.append(root, c);
        sheet.insert_after(root, a, b);
        assert_eq!(selectors(&sheet, root), vec![".a", ".b", ".c"]);
    }

    #[test]
    fn test_insert_after_moves_existing_sibling() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let a = rule(&mut sheet, ".a");
        let b = rule(&mut sheet, ".b");
        let c = rule(&mut sheet, ".c");
        for id in [a, b, c] {
            sheet.append(root, id);
        }
        sheet.insert_after(root, c, a);
        assert_eq!(selectors(&sheet, root), vec![".b", ".c", ".a"]);
    }

    #[test]
    fn test_insert_after_unknown_anchor_appends() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let a = rule(&mut sheet, ".a");
        let stray = rule(&mut sheet, ".stray");
        let b = rule(&mut sheet, ".b");
        sheet.append(root, a);
        sheet.insert_after(root, stray, b);
        assert_eq!(selectors(&sheet, root), vec![".a", ".b"]);
    }

    #[test]
    fn test_replace_with_keeps_position() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let a = rule(&mut sheet, ".a");
        let b = rule(&mut sheet, ".b");
        let c = rule(&mut sheet, ".c");
        let x = rule(&mut sheet, ".x");
        for id in [a, b, c] {
            sheet.append(root, id);
        }
        sheet.replace_with(b, x);
        assert_eq!(selectors(&sheet, root), vec![".a", ".x", ".c"]);
        assert!(!sheet.is_attached(b));
        assert!(sheet.is_attached(x));
    }

    #[test]
    fn test_append_moves_between_parents() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let from = rule(&mut sheet, ".from");
        let to = rule(&mut sheet, ".to");
        let decl = sheet.create(NodeData::declaration("color", "red"), None);
        sheet.append(root, from);
        sheet.append(root, to);
        sheet.append(from, decl);
        sheet.append(to, decl);
        assert!(sheet.children(from).is_empty());
        assert_eq!(sheet.children(to), &[decl]);
        assert_eq!(sheet.parent(decl), Some(to));
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let outer = rule(&mut sheet, ".outer");
        let inner = rule(&mut sheet, ".inner");
        sheet.append(root, outer);
        sheet.append(outer, inner);
        sheet.remove(outer);
        assert!(!sheet.is_attached(outer));
        assert!(!sheet.is_attached(inner));
        assert_eq!(sheet.parent(inner), Some(outer));
    }

    #[test]
    fn test_descendants_are_preorder() {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let a = rule(&mut sheet, ".a");
        let a1 = rule(&mut sheet, ".a1");
        let b = rule(&mut sheet, ".b");
        sheet.append(root, a);
        sheet.append(a, a1);
        sheet.append(root, b);
        assert_eq!(sheet.descendants(root), vec![a, a1, b]);
    }

    #[test]
    fn test_location_is_one_indexed() {
        let mut sheet = Stylesheet::new();
        let input = sheet.add_input(Input::from_file("button.css"));
        let span = Span::new(Position::new(10, 2, 4), Position::new(20, 2, 14));
        let node = sheet.create(NodeData::rule(".a"), Some(Source { input, span }));
        let location = sheet.location(node).expect("node has a source");
        assert_eq!(location.to_string(), "button.css:3:5");
    }

    #[test]
    fn test_anonymous_inputs_are_numbered() {
        let mut sheet = Stylesheet::new();
        let first = sheet.add_anonymous_input();
        let second = sheet.add_anonymous_input();
        assert_eq!(sheet.input(first).name(), "<input css 1>");
        assert_eq!(sheet.input(second).name(), "<input css 2>");
    }
}
