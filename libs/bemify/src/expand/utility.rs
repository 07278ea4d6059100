//! # Utilities
//!
//! Lowers `@utility name [variant], ... { ... }` into `.u-...` rules.
//!
//! | spec           | class       |
//! |----------------|-------------|
//! | `clearFix`     | `.u-clearFix` |
//! | `cols small`   | `.u-sm-cols`  |
//! | `cols huge`    | `.u--cols` (warns) |

use super::{move_children, ExpandContext};
use crate::alias::RuleKind;
use crate::error::{SyntaxError, TransformError};
use crate::host::StyleTree;
use config::constants::{
    utility_variant_abbreviation, MAX_UTILITY_TOKENS, UTILITY_CLASS_PREFIX, UTILITY_VARIANT_SEPARATOR,
};
use stylesheet::list::{split_comma, split_space};
use tracing::debug;

/// Raised when `@utility` has no names.
pub const NO_NAMES: &str = "No names supplied to @utility";

/// Warned when a spec has more than a name and a variant.
pub const TOO_MANY_PARAMETERS: &str = "Too many parameters for @utility";

/// Lower every utility at-rule.
pub fn expand_utilities<T: StyleTree>(tree: &mut T, cx: &mut ExpandContext<'_>) -> Result<(), TransformError> {
    let root = tree.root();
    for utility in cx.find(tree, root, RuleKind::Utility) {
        if !tree.is_attached(utility) {
            continue;
        }
        let specs = split_comma(tree.params(utility).unwrap_or_default());
        if specs.is_empty() {
            return Err(SyntaxError::new(NO_NAMES, tree.location(utility)).into());
        }

        let mut selectors = Vec::with_capacity(specs.len());
        for spec in &specs {
            let (selector, warnings) = utility_selector(&split_space(spec));
            for warning in warnings {
                cx.warn(tree, utility, warning);
            }
            selectors.push(selector);
        }

        let selector = selectors.join(", ");
        debug!(selector = %selector, "lowered utility");
        let rule = tree.create_rule(selector, utility);
        move_children(tree, utility, rule);
        tree.replace_with(utility, rule);
        cx.stats.utilities += 1;
    }
    Ok(())
}

/// Selector for one `name [variant]` spec, plus any warnings.
fn utility_selector(tokens: &[String]) -> (String, Vec<String>) {
    let mut warnings = Vec::new();
    if tokens.len() > MAX_UTILITY_TOKENS {
        warnings.push(TOO_MANY_PARAMETERS.to_string());
    }

    let mut selector = format!(".{}", UTILITY_CLASS_PREFIX);
    if let Some(variant) = tokens.get(1) {
        match utility_variant_abbreviation(variant) {
            Some(abbreviation) => selector.push_str(abbreviation),
            None => warnings.push(format!("Unknown variant: {}", variant)),
        }
        selector.push_str(UTILITY_VARIANT_SEPARATOR);
    }
    if let Some(name) = tokens.first() {
        selector.push_str(name);
    }
    (selector, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::Shortcuts;
    use crate::convention::Convention;
    use crate::options::Style;
    use stylesheet::printer::print;

    fn tokens(spec: &str) -> Vec<String> {
        split_space(spec)
    }

    fn run(source: &str) -> Result<(String, Vec<String>), TransformError> {
        let mut parsed = stylesheet::parse(source);
        let shortcuts = Shortcuts::default();
        let mut cx = ExpandContext::new(Convention::for_style(Style::Suit), &shortcuts);
        expand_utilities(&mut parsed.sheet, &mut cx)?;
        let warnings = cx.warnings.iter().map(|w| w.message.clone()).collect();
        Ok((print(&parsed.sheet), warnings))
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(utility_selector(&tokens("clearFix")), (".u-clearFix".to_string(), vec![]));
    }

    #[test]
    fn test_known_variants() {
        assert_eq!(utility_selector(&tokens("a small")).0, ".u-sm-a");
        assert_eq!(utility_selector(&tokens("a medium")).0, ".u-md-a");
        assert_eq!(utility_selector(&tokens("a large")).0, ".u-lg-a");
    }

    #[test]
    fn test_unknown_variant_keeps_separator() {
        let (selector, warnings) = utility_selector(&tokens("a b"));
        assert_eq!(selector, ".u--a");
        assert_eq!(warnings, vec!["Unknown variant: b".to_string()]);
    }

    #[test]
    fn test_too_many_parameters_uses_first_two() {
        let (selector, warnings) = utility_selector(&tokens("a small c"));
        assert_eq!(selector, ".u-sm-a");
        assert_eq!(warnings, vec![TOO_MANY_PARAMETERS.to_string()]);
    }

    #[test]
    fn test_list_joined_into_one_rule() {
        let (css, warnings) = run("@utility a small, b { color: red }").unwrap();
        assert_eq!(css, ".u-sm-a, .u-b {\n  color: red;\n}");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_no_names_is_fatal() {
        let error = run("@utility {}").unwrap_err();
        assert_eq!(error.to_string(), "<input css 1>:1:1: No names supplied to @utility");
    }

    #[test]
    fn test_utility_inside_media() {
        let (css, _) = run("@media print { @utility hidden { display: none } }").unwrap();
        assert_eq!(css, "@media print {\n  .u-hidden {\n    display: none;\n  }\n}");
    }
}
