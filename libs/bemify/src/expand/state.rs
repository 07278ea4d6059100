//! # States
//!
//! Lowers `@when state, ... { ... }` inside a rule into a sibling rule whose
//! selector joins every state onto every selector of the parent:
//!
//! ```text
//! .A, .B {                       .A, .B {}
//!   @when on, off {}      →      .A.is-on, .A.is-off, .B.is-on, .B.is-off {}
//! }
//! ```

use super::{move_children, ExpandContext};
use crate::alias::RuleKind;
use crate::error::{SyntaxError, TransformError};
use crate::host::StyleTree;
use std::collections::HashMap;
use stylesheet::list::split_comma;
use stylesheet::NodeKind;
use tracing::debug;

/// Raised when `@when` is not directly inside a rule.
pub const NOT_IN_RULE: &str = "@when can only be used in rules which are not the root node";

/// Lower every state at-rule.
///
/// Several states in the same rule are emitted in source order, each after
/// the previous one.
pub fn expand_states<T: StyleTree>(tree: &mut T, cx: &mut ExpandContext<'_>) -> Result<(), TransformError> {
    let root = tree.root();
    let mut emitted: HashMap<T::Node, T::Node> = HashMap::new();

    for when in cx.find(tree, root, RuleKind::When) {
        if !tree.is_attached(when) {
            continue;
        }
        let parent = tree
            .parent(when)
            .filter(|&p| tree.kind(p) == NodeKind::Rule);
        let (Some(parent), Some(container)) = (parent, parent.and_then(|p| tree.parent(p))) else {
            return Err(SyntaxError::new(NOT_IN_RULE, tree.location(when)).into());
        };

        let states = split_comma(tree.params(when).unwrap_or_default());
        let selector = split_comma(tree.selector(parent).unwrap_or_default())
            .iter()
            .flat_map(|selector| {
                states
                    .iter()
                    .map(|state| cx.convention.join_state(selector, state))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .join(", ");

        debug!(selector = %selector, "lowered state");
        let rule = tree.create_rule(selector, when);
        move_children(tree, when, rule);

        let anchor = emitted
            .get(&parent)
            .copied()
            .filter(|&previous| tree.parent(previous) == Some(container))
            .unwrap_or(parent);
        tree.insert_after(container, anchor, rule);
        tree.remove(when);
        emitted.insert(parent, rule);
        cx.stats.states += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::Shortcuts;
    use crate::convention::Convention;
    use crate::options::Style;
    use stylesheet::printer::print;

    fn run(source: &str) -> Result<String, TransformError> {
        let mut parsed = stylesheet::parse(source);
        let shortcuts = Shortcuts::default();
        let mut cx = ExpandContext::new(Convention::for_style(Style::Suit), &shortcuts);
        expand_states(&mut parsed.sheet, &mut cx)?;
        Ok(print(&parsed.sheet))
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(
            run("A, B { @when s1, s2 {} }").unwrap(),
            "A, B {}\nA.is-s1, A.is-s2, B.is-s1, B.is-s2 {}"
        );
    }

    #[test]
    fn test_body_moves_and_parent_keeps_rest() {
        assert_eq!(
            run(".A { color: red; @when on { color: blue } } .Z {}").unwrap(),
            ".A {\n  color: red;\n}\n.A.is-on {\n  color: blue;\n}\n.Z {}"
        );
    }

    #[test]
    fn test_several_states_keep_source_order() {
        assert_eq!(
            run(".A { @when a {} @when b {} }").unwrap(),
            ".A {}\n.A.is-a {}\n.A.is-b {}"
        );
    }

    #[test]
    fn test_root_when_is_fatal() {
        let error = run("@when a {}").unwrap_err();
        assert_eq!(error.to_string(), format!("<input css 1>:1:1: {}", NOT_IN_RULE));
    }

    #[test]
    fn test_when_in_at_rule_is_fatal() {
        let error = run("@media print { @when a {} }").unwrap_err();
        assert!(matches!(error, TransformError::Syntax(_)));
    }

    #[test]
    fn test_nested_rule_parent() {
        assert_eq!(
            run("@media print { .A { @when a {} } }").unwrap(),
            "@media print {\n  .A {}\n  .A.is-a {}\n}"
        );
    }
}
