//! # Component Namespaces
//!
//! `@component-namespace name;` sets the namespace for every component in
//! the same source. `@component-namespace name { ... }` applies it to the
//! components inside the block, then unwraps the block.

use super::component::expand_component;
use super::ExpandContext;
use crate::alias::RuleKind;
use crate::host::StyleTree;
use std::collections::HashMap;
use tracing::debug;

/// Source identifier → namespace, built fresh for each run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: HashMap<String, String>,
}

impl NamespaceMap {
    /// Record a namespace for a source. A later declaration wins.
    pub fn insert(&mut self, source: impl Into<String>, namespace: impl Into<String>) {
        self.entries.insert(source.into(), namespace.into());
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process every namespace at-rule.
///
/// ## Returns
///
/// File-level namespaces by source identifier.
pub fn expand_namespaces<T: StyleTree>(tree: &mut T, cx: &mut ExpandContext<'_>) -> NamespaceMap {
    let mut namespaces = NamespaceMap::default();
    let root = tree.root();

    for node in cx.find(tree, root, RuleKind::ComponentNamespace) {
        if !tree.is_attached(node) {
            continue;
        }
        let name = tree.params(node).unwrap_or_default().to_string();
        cx.stats.namespaces += 1;

        if !tree.has_body(node) {
            match tree.source_id(node) {
                Some(source) => {
                    debug!(source = %source, namespace = %name, "file namespace");
                    namespaces.insert(source, name);
                }
                None => debug!(namespace = %name, "namespace without a source ignored"),
            }
            tree.remove(node);
            continue;
        }

        for component in cx.find(tree, node, RuleKind::Component) {
            if tree.is_attached(component) {
                expand_component(tree, cx, component, Some(&name));
            }
        }
        unwrap_block(tree, node);
    }

    namespaces
}

/// Move the children of `block` to just after it, then remove it.
fn unwrap_block<T: StyleTree>(tree: &mut T, block: T::Node) {
    if let Some(container) = tree.parent(block) {
        while let Some(child) = tree.children(block).last().copied() {
            tree.insert_after(container, block, child);
        }
    }
    tree.remove(block);
}
