//! End-to-end behaviour under the BEM convention.

use bemify::{process, Options, Style};

fn bem(css: &str) -> String {
    let out = process(css, &Options::new().with_style(Style::Bem)).expect("transform succeeds");
    assert!(out.warnings.is_empty(), "unexpected warnings: {:?}", out.warnings);
    out.css
}

#[test]
fn utility_is_untouched() {
    assert_eq!(bem("@utility utilityName {}"), "@utility utilityName {}");
}

#[test]
fn empty_namespace_block_is_removed() {
    assert_eq!(bem("@component-namespace nmsp {}"), "");
}

#[test]
fn component_without_properties() {
    assert_eq!(bem("@component component-name {}"), ".component-name {}");
}

#[test]
fn component_with_properties() {
    assert_eq!(
        bem("@component component-name {color: red; text-align: right;}"),
        ".component-name {\n  color: red;\n  text-align: right;\n}"
    );
}

#[test]
fn component_in_namespace_block() {
    assert_eq!(
        bem("@component-namespace nmsp {@component component-name {}}"),
        ".nmsp--component-name {}"
    );
}

#[test]
fn component_after_file_namespace() {
    assert_eq!(
        bem("@component-namespace nmsp; @component component-name {}"),
        ".nmsp--component-name {}"
    );
}

#[test]
fn component_with_default_namespace() {
    let options = Options::new()
        .with_style(Style::Bem)
        .with_default_namespace("nmmmmsp");
    let out = process("@component component-name {}", &options).unwrap();
    assert_eq!(out.css, ".nmmmmsp--component-name {}");

    let out = process("@component-namespace nmsp {@component component-name {}}", &options).unwrap();
    assert_eq!(out.css, ".nmsp--component-name {}");
}

#[test]
fn modifier() {
    assert_eq!(
        bem("@component component-name {@modifier modifier-name {color: blue;}}"),
        ".component-name {}\n.component-name_modifier-name {\n  color: blue;\n}"
    );
}

#[test]
fn descendent() {
    assert_eq!(
        bem("@component component-name{@descendent descendent-name {}}"),
        ".component-name {}\n.component-name__descendent-name {}"
    );
}

#[test]
fn when_is_untouched() {
    assert_eq!(
        bem("@component component-name {@when stateName {}}"),
        ".component-name {\n  @when stateName {}\n}"
    );
}

#[test]
fn when_at_root_is_inert() {
    assert_eq!(bem("@when stateName {}"), "@when stateName {}");
}
