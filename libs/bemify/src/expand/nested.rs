//! # Nested Rules
//!
//! Lowers `@modifier` and `@descendent` blocks found inside a component.
//!
//! Each match becomes a sibling rule of the component, inserted after the
//! most recently emitted sibling, so output order follows source order:
//!
//! ```text
//! @component A {                 .A {}
//!   @descendent b {              .A-b {}
//!     @modifier c {}      →      .A-b--c {}
//!   }                            .A--d {}
//!   @modifier d {}
//! }
//! ```

use super::ExpandContext;
use crate::alias::RuleKind;
use crate::host::StyleTree;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stylesheet::NodeKind;
use tracing::trace;

/// Lower `at_rule` if it is a modifier or descendent of `parent_class`.
///
/// ## Parameters
///
/// - `parent_class`: Class name (without `.`) the new name is joined onto
/// - `at_rule`: Candidate at-rule
/// - `container`: Node receiving the generated rules
/// - `after`: Sibling in `container` to insert after
///
/// ## Returns
///
/// The last rule inserted into `container`, or `None` if `at_rule` is
/// neither a modifier nor a descendent and was left alone.
pub fn expand_nested<T: StyleTree>(
    tree: &mut T,
    cx: &mut ExpandContext<'_>,
    parent_class: &str,
    at_rule: T::Node,
    container: T::Node,
    after: T::Node,
) -> Option<T::Node> {
    let params = tree.params(at_rule).unwrap_or_default().to_string();
    let name = if cx.matches(tree, at_rule, RuleKind::Modifier) {
        cx.stats.modifiers += 1;
        cx.convention.join_modifier(parent_class, &params)
    } else if cx.matches(tree, at_rule, RuleKind::Descendent) {
        cx.stats.descendents += 1;
        cx.convention.join_descendant(parent_class, &params)
    } else {
        return None;
    };

    trace!(class = %name, "lowering nested rule");
    let rule = tree.create_rule(format!(".{}", name), at_rule);
    tree.insert_after(container, after, rule);

    let mut last = rule;
    for child in tree.children(at_rule) {
        let lowered = if tree.kind(child) == NodeKind::AtRule {
            stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                expand_nested(tree, cx, &name, child, container, last)
            })
        } else {
            None
        };
        match lowered {
            Some(inserted) => last = inserted,
            None => tree.append(rule, child),
        }
    }

    tree.remove(at_rule);
    Some(last)
}
