//! # Host Tree
//!
//! The tree interface the expanders work through, and its implementation
//! for [`stylesheet::Stylesheet`].
//!
//! The expanders only hold node handles while walking; all structure lives
//! in the host. Any tree that can walk, insert, replace and remove nodes can
//! be transformed.

use std::fmt::Debug;
use std::hash::Hash;
use stylesheet::{Location, NodeData, NodeId, NodeKind, Stylesheet};

// =============================================================================
// TRAIT
// =============================================================================

/// A mutable stylesheet tree.
pub trait StyleTree {
    /// Node handle. Stays valid after the node is detached.
    type Node: Copy + Eq + Hash + Debug;

    fn root(&self) -> Self::Node;

    fn kind(&self, node: Self::Node) -> NodeKind;

    /// Parent, or `None` for the root and detached nodes.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Children in source order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// At-rule keyword without `@`.
    fn name(&self, node: Self::Node) -> Option<&str>;

    /// At-rule prelude.
    fn params(&self, node: Self::Node) -> Option<&str>;

    /// Rule selector.
    fn selector(&self, node: Self::Node) -> Option<&str>;

    /// True if an at-rule has a block, even an empty one.
    fn has_body(&self, node: Self::Node) -> bool;

    /// Identifier of the source the node was parsed from.
    fn source_id(&self, node: Self::Node) -> Option<String>;

    /// Location for diagnostics.
    fn location(&self, node: Self::Node) -> Option<Location>;

    /// Create a detached rule carrying the source of `origin`.
    fn create_rule(&mut self, selector: String, origin: Self::Node) -> Self::Node;

    /// Move `child` to the end of `parent`.
    fn append(&mut self, parent: Self::Node, child: Self::Node);

    /// Move `node` into `container` right after `anchor`.
    fn insert_after(&mut self, container: Self::Node, anchor: Self::Node, node: Self::Node);

    /// Put `new` in place of `old`, detaching `old`.
    fn replace_with(&mut self, old: Self::Node, new: Self::Node);

    /// Detach a node.
    fn remove(&mut self, node: Self::Node);

    /// True if the node is reachable from the root.
    fn is_attached(&self, node: Self::Node) -> bool {
        let root = self.root();
        let mut current = node;
        loop {
            if current == root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Descendants of `node` in document order.
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        out
    }

    /// At-rules under `node`, in document order.
    fn at_rules(&self, node: Self::Node) -> Vec<Self::Node> {
        self.descendants(node)
            .into_iter()
            .filter(|&n| self.kind(n) == NodeKind::AtRule)
            .collect()
    }
}

// =============================================================================
// STYLESHEET
// =============================================================================

impl StyleTree for Stylesheet {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        Stylesheet::root(self)
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        Stylesheet::kind(self, node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Stylesheet::parent(self, node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        Stylesheet::children(self, node).to_vec()
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            NodeData::AtRule { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    fn params(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            NodeData::AtRule { params, .. } => Some(params.as_str()),
            _ => None,
        }
    }

    fn selector(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            NodeData::Rule { selector } => Some(selector.as_str()),
            _ => None,
        }
    }

    fn has_body(&self, node: NodeId) -> bool {
        matches!(self.data(node), NodeData::AtRule { has_body: true, .. })
    }

    fn source_id(&self, node: NodeId) -> Option<String> {
        self.source_name(node).map(str::to_string)
    }

    fn location(&self, node: NodeId) -> Option<Location> {
        Stylesheet::location(self, node)
    }

    fn create_rule(&mut self, selector: String, origin: NodeId) -> NodeId {
        let source = self.source(origin);
        self.create(NodeData::Rule { selector }, source)
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        Stylesheet::append(self, parent, child)
    }

    fn insert_after(&mut self, container: NodeId, anchor: NodeId, node: NodeId) {
        Stylesheet::insert_after(self, container, anchor, node)
    }

    fn replace_with(&mut self, old: NodeId, new: NodeId) {
        Stylesheet::replace_with(self, old, new)
    }

    fn remove(&mut self, node: NodeId) {
        Stylesheet::remove(self, node)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        Stylesheet::is_attached(self, node)
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        Stylesheet::descendants(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rules_in_document_order() {
        let parsed = stylesheet::parse("@a x { .r { @b y; } } @c z;");
        let sheet = &parsed.sheet;
        let names: Vec<_> = sheet
            .at_rules(StyleTree::root(sheet))
            .into_iter()
            .filter_map(|n| StyleTree::name(sheet, n))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_created_rule_inherits_source() {
        let mut parsed = stylesheet::parse("\n@component A {}");
        let sheet = &mut parsed.sheet;
        let component = Stylesheet::children(sheet, Stylesheet::root(sheet))[0];
        let rule = sheet.create_rule(".A".to_string(), component);
        let location = StyleTree::location(&*sheet, rule).expect("source copied");
        assert_eq!(location.line, 2);
    }

    #[test]
    fn test_body_detection() {
        let parsed = stylesheet::parse("@component-namespace a; @component-namespace b {}");
        let sheet = &parsed.sheet;
        let nodes = Stylesheet::children(sheet, Stylesheet::root(sheet));
        assert!(!sheet.has_body(nodes[0]));
        assert!(sheet.has_body(nodes[1]));
    }
}
