//! # Stylesheet Printer
//!
//! Serializes a [`Stylesheet`] to normalized text.
//!
//! Top-level nodes print one per line. Block children print one per line,
//! indented two spaces per level. Empty blocks print as `{}`.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::{parse, printer::print};
//!
//! let parsed = parse(".a{color:red}");
//! assert_eq!(print(&parsed.sheet), ".a {\n  color: red;\n}");
//! ```

use crate::tree::{NodeData, NodeId, Stylesheet};
use config::constants::{PRINT_INDENT, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

/// Print every node attached to the root.
pub fn print(sheet: &Stylesheet) -> String {
    print_children(sheet, sheet.root(), 0)
}

/// Print a single node and its subtree at the top indentation level.
pub fn print_node(sheet: &Stylesheet, node: NodeId) -> String {
    let mut out = String::new();
    write_node(sheet, node, 0, &mut out);
    out
}

fn print_children(sheet: &Stylesheet, parent: NodeId, depth: usize) -> String {
    let mut out = String::new();
    for (i, &child) in sheet.children(parent).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(sheet, child, depth, &mut out);
    }
    out
}

fn write_node(sheet: &Stylesheet, node: NodeId, depth: usize, out: &mut String) {
    let indent = PRINT_INDENT.repeat(depth);
    match sheet.data(node) {
        NodeData::Root => out.push_str(&print_children(sheet, node, depth)),
        NodeData::Rule { selector } => {
            out.push_str(&indent);
            out.push_str(selector);
            write_block(sheet, node, depth, out);
        }
        NodeData::AtRule {
            name,
            params,
            has_body,
        } => {
            out.push_str(&indent);
            out.push('@');
            out.push_str(name);
            if !params.is_empty() {
                out.push(' ');
                out.push_str(params);
            }
            if *has_body || !sheet.children(node).is_empty() {
                write_block(sheet, node, depth, out);
            } else {
                out.push(';');
            }
        }
        NodeData::Declaration {
            property,
            value,
            important,
        } => {
            out.push_str(&indent);
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            if *important {
                out.push_str(" !important");
            }
            out.push(';');
        }
        NodeData::Comment { text } => {
            out.push_str(&indent);
            out.push_str("/* ");
            out.push_str(text);
            out.push_str(" */");
        }
    }
}

fn write_block(sheet: &Stylesheet, node: NodeId, depth: usize, out: &mut String) {
    if sheet.children(node).is_empty() {
        out.push_str(" {}");
        return;
    }
    out.push_str(" {\n");
    let body = stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        print_children(sheet, node, depth + 1)
    });
    out.push_str(&body);
    out.push('\n');
    out.push_str(&PRINT_INDENT.repeat(depth));
    out.push('}');
}
