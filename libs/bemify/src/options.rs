//! # Options
//!
//! Per-run settings: naming style, separator overrides, keyword shortcuts
//! and a default namespace.
//!
//! Options come either from the typed builder API or from a JSON object
//! shaped like:
//!
//! ```json
//! {
//!   "style": "suit",
//!   "separators": { "descendent": "__" },
//!   "shortcuts": { "component": "b" },
//!   "defaultNamespace": "ns"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bemify::options::{Options, Style};
//! use serde_json::json;
//!
//! let options = Options::from_value(&json!({ "style": "bem" })).unwrap();
//! assert_eq!(options.style, Style::Bem);
//! ```

use crate::alias::{RuleKind, Shortcuts};
use crate::convention::{Convention, SeparatorKind, Separators};
use crate::error::TransformError;
use config::constants::{SeparatorTable, BEM_SEPARATORS, STYLE_BEM, STYLE_SUIT, SUIT_SEPARATORS};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// STYLE
// =============================================================================

/// Naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// `ns-Component-descendent--modifier.is-state`
    #[default]
    Suit,
    /// `ns--block__element_modifier`
    Bem,
}

impl Style {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Suit => STYLE_SUIT,
            Self::Bem => STYLE_BEM,
        }
    }

    /// Built-in separator table for this style.
    pub const fn default_separators(&self) -> SeparatorTable {
        match self {
            Self::Suit => SUIT_SEPARATORS,
            Self::Bem => BEM_SEPARATORS,
        }
    }
}

impl FromStr for Style {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STYLE_SUIT => Ok(Self::Suit),
            STYLE_BEM => Ok(Self::Bem),
            other => Err(TransformError::InvalidStyle(format!("{:?}", other))),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Settings for one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub style: Style,
    /// Separators replacing the style's defaults, by kind.
    pub separators: BTreeMap<SeparatorKind, String>,
    pub shortcuts: Shortcuts,
    /// Namespace for components with no enclosing or file-level namespace.
    pub default_namespace: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_separator(mut self, kind: SeparatorKind, value: impl Into<String>) -> Self {
        self.separators.insert(kind, value.into());
        self
    }

    pub fn with_shortcut(mut self, kind: RuleKind, keyword: impl Into<String>) -> Self {
        self.shortcuts.set(kind, keyword);
        self
    }

    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.default_namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// Resolve the convention for a run.
    ///
    /// Starts from a copy of the style's default table; the constant tables
    /// are never modified.
    pub fn convention(&self) -> Convention {
        let mut separators = Separators::from(self.style.default_separators());
        for (kind, value) in &self.separators {
            separators.set(*kind, value.clone());
        }
        Convention::new(self.style, separators)
    }

    /// Read options from a JSON value.
    ///
    /// `null` yields the defaults. Fails on an unknown style, a non-string
    /// separator, or a value that is not an options object.
    pub fn from_value(value: &Value) -> Result<Self, TransformError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let raw = RawOptions::deserialize(value)
            .map_err(|e| TransformError::InvalidOptions(e.to_string()))?;
        raw.resolve()
    }
}

// =============================================================================
// RAW OPTIONS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    #[serde(default)]
    style: Value,
    #[serde(default)]
    separators: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    shortcuts: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    default_namespace: Option<String>,
}

impl RawOptions {
    fn resolve(self) -> Result<Options, TransformError> {
        let mut options = Options::default();

        options.style = match &self.style {
            Value::Null => Style::default(),
            Value::String(s) if s.is_empty() => Style::default(),
            Value::String(s) => s.parse()?,
            other => return Err(TransformError::InvalidStyle(other.to_string())),
        };

        for (name, value) in self.separators.unwrap_or_default() {
            let Value::String(separator) = value else {
                return Err(TransformError::InvalidSeparator { name });
            };
            match SeparatorKind::from_key(&name) {
                Some(kind) => {
                    options.separators.insert(kind, separator);
                }
                None => debug!(name = %name, "ignoring unknown separator"),
            }
        }

        for (name, value) in self.shortcuts.unwrap_or_default() {
            match (RuleKind::from_keyword(&name), value) {
                (Some(kind), Value::String(keyword)) => options.shortcuts.set(kind, keyword),
                (Some(_), _) => debug!(kind = %name, "ignoring non-string shortcut"),
                (None, _) => debug!(kind = %name, "ignoring shortcut for unknown rule kind"),
            }
        }

        options.default_namespace = self.default_namespace.filter(|ns| !ns.is_empty());
        Ok(options)
    }
}

// =============================================================================
// TESTS
// =============================================================================
