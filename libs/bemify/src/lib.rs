//! # Bemify
//!
//! Rewrites custom at-rules into SUIT or BEM class-selector rules.
//!
//! ## Architecture
//!
//! ```text
//! Options → Convention ─┐
//!                       ▼
//! Stylesheet → utility → component-namespace → component → when → Stylesheet
//! ```
//!
//! The passes work through the [`StyleTree`] trait, implemented here for
//! [`stylesheet::Stylesheet`].
//!
//! ## Example
//!
//! ```rust
//! use bemify::{process, Options, Style};
//!
//! let css = "@component-namespace ns;\n@component Button { @descendent icon { color: red } }";
//! let out = process(css, &Options::new().with_style(Style::Bem)).unwrap();
//! assert_eq!(out.css, ".ns--Button {}\n.ns--Button__icon {\n  color: red;\n}");
//! ```

pub mod alias;
pub mod convention;
pub mod diagnostic;
pub mod error;
pub mod expand;
pub mod host;
pub mod options;
pub mod transform;

pub use alias::{RuleKind, Shortcuts};
pub use convention::{Convention, SeparatorKind, Separators};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{SyntaxError, TransformError};
pub use expand::namespace::NamespaceMap;
pub use expand::Stats;
pub use host::StyleTree;
pub use options::{Options, Style};
pub use transform::{process, process_inputs, transform, Processed, Report};
