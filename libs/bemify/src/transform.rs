//! # Transform
//!
//! Runs the passes over a tree, and wraps parse → transform → print for
//! text input.
//!
//! ## Example
//!
//! ```rust
//! use bemify::{process, Options};
//!
//! let out = process("@component Button { @modifier large {} }", &Options::default()).unwrap();
//! assert_eq!(out.css, ".Button {}\n.Button--large {}");
//! ```

use crate::diagnostic::Diagnostic;
use crate::error::TransformError;
use crate::expand::component::expand_components;
use crate::expand::namespace::expand_namespaces;
use crate::expand::state::expand_states;
use crate::expand::utility::expand_utilities;
use crate::expand::{ExpandContext, Stats};
use crate::host::StyleTree;
use crate::options::Options;
use serde::Serialize;
use stylesheet::printer::print;
use stylesheet::{Input, Stylesheet};
use tracing::{debug, info};

// =============================================================================
// REPORT
// =============================================================================

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub warnings: Vec<Diagnostic>,
    pub stats: Stats,
}

/// Printed output of [`process`] and [`process_inputs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Processed {
    pub css: String,
    pub warnings: Vec<Diagnostic>,
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// Rewrite the custom at-rules of `tree` in place.
///
/// ## Passes
///
/// 1. Utilities (suit only)
/// 2. Component namespaces, collecting file-level namespaces
/// 3. Remaining components, namespaced by file or `default_namespace`
/// 4. States (suit only)
///
/// A fatal error stops the run; the tree may then be partially rewritten.
pub fn transform<T: StyleTree>(tree: &mut T, options: &Options) -> Result<Report, TransformError> {
    let mut cx = ExpandContext::new(options.convention(), &options.shortcuts);
    let style = cx.convention.style();

    if cx.convention.rewrites_utilities() {
        expand_utilities(tree, &mut cx)?;
    } else {
        debug!(%style, "utility pass skipped");
    }

    let namespaces = expand_namespaces(tree, &mut cx);
    expand_components(tree, &mut cx, &namespaces, options.default_namespace.as_deref());

    if cx.convention.rewrites_states() {
        expand_states(tree, &mut cx)?;
    } else {
        debug!(%style, "state pass skipped");
    }

    info!(
        %style,
        components = cx.stats.components,
        utilities = cx.stats.utilities,
        states = cx.stats.states,
        warnings = cx.warnings.len(),
        "transform complete"
    );

    Ok(Report {
        warnings: cx.warnings,
        stats: cx.stats,
    })
}

// =============================================================================
// TEXT PIPELINE
// =============================================================================

/// Parse, transform and print one anonymous stylesheet.
pub fn process(css: &str, options: &Options) -> Result<Processed, TransformError> {
    let mut sheet = Stylesheet::new();
    let input = sheet.add_anonymous_input();
    let name = sheet.input(input).name().to_string();
    parse_checked(&mut sheet, css, input, name)?;
    finish(sheet, options)
}

/// Parse several named sources into one stylesheet, transform and print.
///
/// Each `(name, css)` pair keeps `name` as its source identifier, so
/// file-level namespaces apply per source.
pub fn process_inputs<S, C>(inputs: &[(S, C)], options: &Options) -> Result<Processed, TransformError>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let mut sheet = Stylesheet::new();
    for (name, css) in inputs {
        let input = sheet.add_input(Input::from_file(name.as_ref()));
        parse_checked(&mut sheet, css.as_ref(), input, name.as_ref().to_string())?;
    }
    finish(sheet, options)
}

fn parse_checked(
    sheet: &mut Stylesheet,
    css: &str,
    input: stylesheet::InputId,
    name: String,
) -> Result<(), TransformError> {
    match stylesheet::parse_into(sheet, css, input).into_iter().next() {
        Some(source) => Err(TransformError::Parse { input: name, source }),
        None => Ok(()),
    }
}

fn finish(mut sheet: Stylesheet, options: &Options) -> Result<Processed, TransformError> {
    let report = transform(&mut sheet, options)?;
    Ok(Processed {
        css: print(&sheet),
        warnings: report.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Style;

    #[test]
    fn test_bem_leaves_utility_and_when() {
        let options = Options::new().with_style(Style::Bem);
        let out = process("@utility a {} .A { @when on {} } @when root {}", &options).unwrap();
        assert_eq!(out.css, "@utility a {}\n.A {\n  @when on {}\n}\n@when root {}");
    }

    #[test]
    fn test_report_counts() {
        let mut parsed = stylesheet::parse(
            "@utility u {} @component A { @modifier m {} @descendent d {} } .A { @when on {} }",
        );
        let report = transform(&mut parsed.sheet, &Options::default()).unwrap();
        assert_eq!(report.stats.utilities, 1);
        assert_eq!(report.stats.components, 1);
        assert_eq!(report.stats.modifiers, 1);
        assert_eq!(report.stats.descendents, 1);
        assert_eq!(report.stats.states, 1);
    }

    #[test]
    fn test_parse_error_is_fatal() {
        let error = process(".a {", &Options::default()).unwrap_err();
        assert!(matches!(error, TransformError::Parse { .. }));
        assert!(error.to_string().starts_with("<input css 1>: unclosed block"));
    }

    #[test]
    fn test_namespaces_are_per_input() {
        let inputs = [
            ("a.css", "@component-namespace a; @component X {}"),
            ("b.css", "@component Y {}"),
        ];
        let out = process_inputs(&inputs, &Options::default()).unwrap();
        assert_eq!(out.css, ".a-X {}\n.Y {}");
    }

    #[test]
    fn test_namespace_map_is_fresh_per_run() {
        let options = Options::default();
        let first = process_inputs(&[("x.css", "@component-namespace n; @component A {}")], &options).unwrap();
        let second = process_inputs(&[("x.css", "@component A {}")], &options).unwrap();
        assert_eq!(first.css, ".n-A {}");
        assert_eq!(second.css, ".A {}");
    }
}
