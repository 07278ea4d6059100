//! # Config Crate
//!
//! Centralized configuration constants for the bemify pipeline.
//! Separator tables, utility naming tables and recursion limits are defined
//! here once so the parser, the transform engine and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SUIT_SEPARATORS, BEM_SEPARATORS};
//!
//! assert_eq!(SUIT_SEPARATORS.modifier, "--");
//! assert_eq!(BEM_SEPARATORS.modifier, "_");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable Defaults**: Per-run overrides are applied to copies, never here
//! - **SUIT/BEM Compatible**: Defaults match the published naming conventions

pub mod constants;
