//! # Naming Convention
//!
//! Joins class-name fragments with the active convention's separators.
//!
//! ## Example
//!
//! ```rust
//! use bemify::convention::Convention;
//! use bemify::options::Style;
//!
//! let suit = Convention::for_style(Style::Suit);
//! assert_eq!(suit.join_modifier("Button", "primary"), "Button--primary");
//!
//! let bem = Convention::for_style(Style::Bem);
//! assert_eq!(bem.join_descendant("button", "icon"), "button__icon");
//! ```

use crate::options::Style;
use config::constants::SeparatorTable;

// =============================================================================
// SEPARATORS
// =============================================================================

/// Which separator of a convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeparatorKind {
    /// Namespace to component.
    Namespace,
    /// Parent class to descendent.
    Descendent,
    /// Parent class to modifier.
    Modifier,
    /// Selector to state.
    State,
}

impl SeparatorKind {
    /// Parse an option key (`namespace`, `descendent`, `modifier`, `state`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "namespace" => Some(Self::Namespace),
            "descendent" => Some(Self::Descendent),
            "modifier" => Some(Self::Modifier),
            "state" => Some(Self::State),
            _ => None,
        }
    }
}

/// Resolved separator strings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub namespace: String,
    pub descendent: String,
    pub modifier: String,
    pub state: String,
}

impl From<SeparatorTable> for Separators {
    fn from(table: SeparatorTable) -> Self {
        Self {
            namespace: table.namespace.to_string(),
            descendent: table.descendent.to_string(),
            modifier: table.modifier.to_string(),
            state: table.state.to_string(),
        }
    }
}

impl Separators {
    /// Replace one separator.
    pub fn set(&mut self, kind: SeparatorKind, value: impl Into<String>) {
        let slot = match kind {
            SeparatorKind::Namespace => &mut self.namespace,
            SeparatorKind::Descendent => &mut self.descendent,
            SeparatorKind::Modifier => &mut self.modifier,
            SeparatorKind::State => &mut self.state,
        };
        *slot = value.into();
    }
}

// =============================================================================
// CONVENTION
// =============================================================================

/// The naming scheme applied for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convention {
    style: Style,
    separators: Separators,
}

impl Convention {
    /// Convention with explicit separators.
    pub fn new(style: Style, separators: Separators) -> Self {
        Self { style, separators }
    }

    /// Convention with the style's default separators.
    pub fn for_style(style: Style) -> Self {
        Self::new(style, Separators::from(style.default_separators()))
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Whether `@when` rules are rewritten.
    pub fn rewrites_states(&self) -> bool {
        self.style == Style::Suit
    }

    /// Whether `@utility` rules are rewritten.
    pub fn rewrites_utilities(&self) -> bool {
        self.style == Style::Suit
    }

    pub fn join_namespace(&self, namespace: &str, name: &str) -> String {
        format!("{}{}{}", namespace, self.separators.namespace, name)
    }

    pub fn join_descendant(&self, parent: &str, name: &str) -> String {
        format!("{}{}{}", parent, self.separators.descendent, name)
    }

    pub fn join_modifier(&self, parent: &str, name: &str) -> String {
        format!("{}{}{}", parent, self.separators.modifier, name)
    }

    pub fn join_state(&self, selector: &str, state: &str) -> String {
        format!("{}{}{}", selector, self.separators.state, state)
    }
}
