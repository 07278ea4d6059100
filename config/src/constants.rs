//! # Configuration Constants
//!
//! Centralized constants for the bemify pipeline.
//!
//! ## Categories
//!
//! - **Styles**: Names of the supported naming conventions
//! - **Separators**: Default separator tables per convention
//! - **Utilities**: Class prefix and size-variant abbreviations
//! - **Limits**: Stack growth sizes for recursive passes
//! - **Output**: Printer formatting

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

/// Option value selecting the SUIT convention.
pub const STYLE_SUIT: &str = "suit";

/// Option value selecting the BEM convention.
pub const STYLE_BEM: &str = "bem";

/// Convention used when the options do not name one.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_STYLE, STYLE_SUIT};
///
/// let requested: Option<&str> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_STYLE), STYLE_SUIT);
/// ```
pub const DEFAULT_STYLE: &str = STYLE_SUIT;

// =============================================================================
// SEPARATOR CONSTANTS
// =============================================================================

/// Default separator strings for one naming convention.
///
/// These tables are process-wide constants. A run that overrides a separator
/// copies the table first; nothing ever writes through to these values.
///
/// # Example
///
/// ```rust
/// use config::constants::SUIT_SEPARATORS;
///
/// let mut table = SUIT_SEPARATORS;
/// table.modifier = "__";
/// assert_eq!(SUIT_SEPARATORS.modifier, "--");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorTable {
    /// Joins a namespace onto a component name.
    pub namespace: &'static str,
    /// Joins a descendent name onto its parent class.
    pub descendent: &'static str,
    /// Joins a modifier name onto its parent class.
    pub modifier: &'static str,
    /// Joins a state name onto a selector.
    pub state: &'static str,
}

/// SUIT separators: `ns-Component`, `Component-descendent`,
/// `Component--modifier`, `.Component.is-state`.
pub const SUIT_SEPARATORS: SeparatorTable = SeparatorTable {
    namespace: "-",
    descendent: "-",
    modifier: "--",
    state: ".is-",
};

/// BEM separators: `ns--block`, `block__element`, `block_modifier`.
///
/// BEM has no state syntax; the state entry is only consulted if state
/// rewriting is enabled, which it never is for BEM.
pub const BEM_SEPARATORS: SeparatorTable = SeparatorTable {
    namespace: "--",
    descendent: "__",
    modifier: "_",
    state: ".is-",
};

// =============================================================================
// UTILITY CONSTANTS
// =============================================================================

/// Prefix of every generated utility class.
pub const UTILITY_CLASS_PREFIX: &str = "u-";

/// Joins a size abbreviation onto the utility name.
pub const UTILITY_VARIANT_SEPARATOR: &str = "-";

/// Maximum tokens in a single utility spec (`name variant`).
pub const MAX_UTILITY_TOKENS: usize = 2;

/// Recognized utility size variants and their class abbreviations.
pub const UTILITY_VARIANTS: [(&str, &str); 3] = [
    ("small", "sm"),
    ("medium", "md"),
    ("large", "lg"),
];

/// Looks up the class abbreviation for a utility size variant.
///
/// # Example
///
/// ```rust
/// use config::constants::utility_variant_abbreviation;
///
/// assert_eq!(utility_variant_abbreviation("medium"), Some("md"));
/// assert_eq!(utility_variant_abbreviation("huge"), None);
/// ```
pub fn utility_variant_abbreviation(variant: &str) -> Option<&'static str> {
    UTILITY_VARIANTS
        .iter()
        .find(|(name, _)| *name == variant)
        .map(|(_, abbr)| *abbr)
}

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which recursive passes grow a new stack segment.
///
/// The `stacker` crate is used to handle deeply nested stylesheets safely.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated by `stacker`.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Indentation emitted per nesting level by the printer.
pub const PRINT_INDENT: &str = "  ";

/// Prefix of identifiers given to inputs that were not read from a file.
///
/// The full identifier is `<input css N>` with `N` counting from 1.
pub const ANONYMOUS_INPUT_PREFIX: &str = "<input css";
