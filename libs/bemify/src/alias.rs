//! # Rule Kinds and Shortcuts
//!
//! The six recognized at-rule kinds, and the optional alternate keyword an
//! author may use for each.
//!
//! ## Example
//!
//! ```rust
//! use bemify::alias::{RuleKind, Shortcuts};
//!
//! let mut shortcuts = Shortcuts::default();
//! shortcuts.set(RuleKind::Component, "b");
//! assert!(shortcuts.matches(RuleKind::Component, "component"));
//! assert!(shortcuts.matches(RuleKind::Component, "b"));
//! assert!(!shortcuts.matches(RuleKind::Modifier, "b"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// RULE KIND
// =============================================================================

/// A recognized custom at-rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// `@utility name [variant], ...`
    Utility,
    /// `@component-namespace name` with or without a block
    ComponentNamespace,
    /// `@component Name { ... }`
    Component,
    /// `@modifier name { ... }` inside a component
    Modifier,
    /// `@descendent name { ... }` inside a component
    Descendent,
    /// `@when state, ... { ... }` inside a rule
    When,
}

impl RuleKind {
    /// Every kind, in pass order.
    pub const ALL: [RuleKind; 6] = [
        Self::Utility,
        Self::ComponentNamespace,
        Self::Component,
        Self::Modifier,
        Self::Descendent,
        Self::When,
    ];

    /// Canonical at-rule keyword, without `@`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utility => "utility",
            Self::ComponentNamespace => "component-namespace",
            Self::Component => "component",
            Self::Modifier => "modifier",
            Self::Descendent => "descendent",
            Self::When => "when",
        }
    }

    /// Kind whose canonical keyword is `keyword`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == keyword)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SHORTCUTS
// =============================================================================

/// Alternate keywords per rule kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortcuts {
    aliases: BTreeMap<RuleKind, String>,
}

impl Shortcuts {
    /// Use `keyword` as an alternate for `kind`. An empty keyword clears it.
    pub fn set(&mut self, kind: RuleKind, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if keyword.is_empty() {
            self.aliases.remove(&kind);
        } else {
            self.aliases.insert(kind, keyword);
        }
    }

    /// Alternate keyword for `kind`, if one is set.
    pub fn get(&self, kind: RuleKind) -> Option<&str> {
        self.aliases.get(&kind).map(String::as_str)
    }

    /// True if an at-rule named `keyword` is of `kind`.
    pub fn matches(&self, kind: RuleKind, keyword: &str) -> bool {
        keyword == kind.as_str() || self.get(kind) == Some(keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keywords_round_trip() {
        for kind in RuleKind::ALL {
            assert_eq!(RuleKind::from_keyword(kind.as_str()), Some(kind));
        }
        assert_eq!(RuleKind::from_keyword("block"), None);
    }

    #[test]
    fn test_default_matches_canonical_only() {
        let shortcuts = Shortcuts::default();
        assert!(shortcuts.matches(RuleKind::Descendent, "descendent"));
        assert!(!shortcuts.matches(RuleKind::Descendent, "descendant"));
    }

    #[test]
    fn test_alias_does_not_replace_canonical() {
        let mut shortcuts = Shortcuts::default();
        shortcuts.set(RuleKind::Descendent, "d");
        assert!(shortcuts.matches(RuleKind::Descendent, "d"));
        assert!(shortcuts.matches(RuleKind::Descendent, "descendent"));
    }

    #[test]
    fn test_empty_alias_is_ignored() {
        let mut shortcuts = Shortcuts::default();
        shortcuts.set(RuleKind::When, "");
        assert!(shortcuts.is_empty());
        assert!(!shortcuts.matches(RuleKind::When, ""));
    }
}
