//! # Expanders
//!
//! One module per pass. Each pass collects candidate at-rules in document
//! order up front, then lowers the ones still attached when their turn
//! comes, so nodes moved by an earlier expansion are still visited.
//!
//! ## Passes
//!
//! ```text
//! utility → component-namespace → component → when
//! ```
//!
//! Modifiers and descendents are lowered from inside the component pass.

pub mod component;
pub mod namespace;
pub mod nested;
pub mod state;
pub mod utility;

use crate::alias::{RuleKind, Shortcuts};
use crate::convention::Convention;
use crate::diagnostic::Diagnostic;
use crate::host::StyleTree;
use serde::Serialize;
use stylesheet::NodeKind;

/// Counts of lowered at-rules per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub utilities: usize,
    pub namespaces: usize,
    pub components: usize,
    pub modifiers: usize,
    pub descendents: usize,
    pub states: usize,
}

/// State shared by the passes of one run.
#[derive(Debug)]
pub struct ExpandContext<'o> {
    pub convention: Convention,
    pub shortcuts: &'o Shortcuts,
    pub warnings: Vec<Diagnostic>,
    pub stats: Stats,
}

impl<'o> ExpandContext<'o> {
    pub fn new(convention: Convention, shortcuts: &'o Shortcuts) -> Self {
        Self {
            convention,
            shortcuts,
            warnings: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// True if `node` is an at-rule of `kind`, under its canonical keyword
    /// or its shortcut.
    pub fn matches<T: StyleTree>(&self, tree: &T, node: T::Node, kind: RuleKind) -> bool {
        tree.kind(node) == NodeKind::AtRule
            && tree
                .name(node)
                .map_or(false, |name| self.shortcuts.matches(kind, name))
    }

    /// At-rules of `kind` under `scope`, in document order.
    pub fn find<T: StyleTree>(&self, tree: &T, scope: T::Node, kind: RuleKind) -> Vec<T::Node> {
        tree.at_rules(scope)
            .into_iter()
            .filter(|&node| self.matches(tree, node, kind))
            .collect()
    }

    pub fn warn<T: StyleTree>(&mut self, tree: &T, node: T::Node, message: impl Into<String>) {
        self.warnings.push(Diagnostic::warning(message, tree.location(node)));
    }
}

/// Move every child of `from` to the end of `to`, keeping order.
pub(crate) fn move_children<T: StyleTree>(tree: &mut T, from: T::Node, to: T::Node) {
    for child in tree.children(from) {
        tree.append(to, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Style;
    use stylesheet::Stylesheet;

    #[test]
    fn test_find_honours_shortcuts() {
        let parsed = stylesheet::parse("@c A {} @component B {} @modifier x {}");
        let mut shortcuts = Shortcuts::default();
        shortcuts.set(RuleKind::Component, "c");
        let cx = ExpandContext::new(Convention::for_style(Style::Suit), &shortcuts);
        let sheet = &parsed.sheet;
        let found = cx.find(sheet, Stylesheet::root(sheet), RuleKind::Component);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_rules_never_match() {
        let parsed = stylesheet::parse("component {}");
        let shortcuts = Shortcuts::default();
        let cx = ExpandContext::new(Convention::for_style(Style::Suit), &shortcuts);
        let sheet = &parsed.sheet;
        let rule = Stylesheet::children(sheet, Stylesheet::root(sheet))[0];
        assert!(!cx.matches(sheet, rule, RuleKind::Component));
    }
}
