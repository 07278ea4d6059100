//! Property tests over generated component trees.

use bemify::{process, Options, Style};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}"
}

fn style() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Suit), Just(Style::Bem)]
}

proptest! {
    #[test]
    fn no_recognized_at_rule_survives(component in ident(), names in prop::collection::vec(ident(), 0..6), style in style()) {
        let body: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let kind = if i % 2 == 0 { "modifier" } else { "descendent" };
                format!("@{} {} {{ @modifier x{} {{}} }} ", kind, name, i)
            })
            .collect();
        let css = format!("@component {} {{ {}}}", component, body);
        let out = process(&css, &Options::new().with_style(style)).unwrap();
        prop_assert!(!out.css.contains("@component"));
        prop_assert!(!out.css.contains("@modifier"));
        prop_assert!(!out.css.contains("@descendent"));
        prop_assert_eq!(out.css.lines().count(), 1 + names.len() * 2);
    }

    #[test]
    fn transform_is_idempotent(component in ident(), modifier in ident(), state in ident()) {
        let css = format!("@component {} {{ @modifier {} {{ @when {} {{ a: b }} }} }}", component, modifier, state);
        let once = process(&css, &Options::default()).unwrap().css;
        let twice = process(&once, &Options::default()).unwrap().css;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn file_namespace_matches_block(ns in ident(), component in ident(), style in style()) {
        let options = Options::new().with_style(style);
        let body = format!("@component {} {{ @descendent d {{}} }}", component);
        let file_level = process(&format!("@component-namespace {}; {}", ns, body), &options).unwrap().css;
        let block = process(&format!("@component-namespace {} {{ {} }}", ns, body), &options).unwrap().css;
        prop_assert_eq!(file_level, block);
    }

    #[test]
    fn state_count_is_cross_product(selectors in prop::collection::vec(ident(), 1..4), states in prop::collection::vec(ident(), 1..4)) {
        let css = format!(".{} {{ @when {} {{}} }}", selectors.join(", ."), states.join(", "));
        let out = process(&css, &Options::default()).unwrap();
        let generated = out.css.lines().nth(1).unwrap_or_default().trim_end_matches(" {}").to_string();
        prop_assert_eq!(generated.split(", ").count(), selectors.len() * states.len());
    }
}
