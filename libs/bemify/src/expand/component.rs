//! # Components
//!
//! Lowers `@component Name { ... }` into `.Name { ... }`, prefixing the
//! namespace when one applies, and lowers its modifiers and descendents
//! into sibling rules.

use super::namespace::NamespaceMap;
use super::nested::expand_nested;
use super::ExpandContext;
use crate::alias::RuleKind;
use crate::host::StyleTree;
use stylesheet::NodeKind;
use tracing::debug;

/// Lower one component in place.
///
/// An empty `namespace` counts as no namespace.
pub fn expand_component<T: StyleTree>(
    tree: &mut T,
    cx: &mut ExpandContext<'_>,
    component: T::Node,
    namespace: Option<&str>,
) {
    let Some(container) = tree.parent(component) else {
        return;
    };
    let params = tree.params(component).unwrap_or_default();
    let name = match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => cx.convention.join_namespace(ns, params),
        None => params.to_string(),
    };

    let rule = tree.create_rule(format!(".{}", name), component);
    let mut last = component;
    for child in tree.children(component) {
        let lowered = if tree.kind(child) == NodeKind::AtRule {
            expand_nested(tree, cx, &name, child, container, last)
        } else {
            None
        };
        match lowered {
            Some(inserted) => last = inserted,
            None => tree.append(rule, child),
        }
    }

    tree.replace_with(component, rule);
    cx.stats.components += 1;
    debug!(class = %name, "lowered component");
}

/// Lower every component still in the tree.
///
/// The namespace is the one recorded for the component's source, else
/// `default_namespace`.
pub fn expand_components<T: StyleTree>(
    tree: &mut T,
    cx: &mut ExpandContext<'_>,
    namespaces: &NamespaceMap,
    default_namespace: Option<&str>,
) {
    let root = tree.root();
    for component in cx.find(tree, root, RuleKind::Component) {
        if !tree.is_attached(component) {
            continue;
        }
        let recorded = tree
            .source_id(component)
            .and_then(|id| namespaces.get(&id).map(str::to_string));
        let namespace = recorded.as_deref().or(default_namespace);
        expand_component(tree, cx, component, namespace);
    }
}
