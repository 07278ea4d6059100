//! # Value Lists
//!
//! Splitting of selector and parameter text into items, respecting quotes,
//! parentheses and backslash escapes.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::list::{split_comma, split_space};
//!
//! assert_eq!(split_comma(".a, .b:not(.c, .d)"), vec![".a", ".b:not(.c, .d)"]);
//! assert_eq!(split_space("large  clearFix"), vec!["large", "clearFix"]);
//! ```

/// Split on top-level commas. Items are trimmed; empty items are dropped.
pub fn split_comma(text: &str) -> Vec<String> {
    split(text, |c| c == ',')
}

/// Split on top-level whitespace. Empty items are dropped.
pub fn split_space(text: &str) -> Vec<String> {
    split(text, char::is_whitespace)
}

fn split(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for c in text.chars() {
        if escaped {
            escaped = false;
            current.push(c);
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' if quote.is_none() => quote = Some(c),
            q if quote == Some(q) => quote = None,
            '(' if quote.is_none() => depth += 1,
            ')' if quote.is_none() => depth = depth.saturating_sub(1),
            c if quote.is_none() && depth == 0 && is_separator(c) => {
                push_item(&mut items, &current);
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    push_item(&mut items, &current);
    items
}

fn push_item(items: &mut Vec<String>, raw: &str) {
    let item = raw.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}
