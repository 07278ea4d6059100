//! # Transform Errors
//!
//! Fatal errors. Any of these aborts the run.

use std::fmt;
use stylesheet::{Location, ParseError};
use thiserror::Error;

/// Errors that abort a transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// `style` was something other than `suit` or `bem`.
    #[error("opts.style may only be \"suit\" or \"bem\", got {0}")]
    InvalidStyle(String),

    /// A separator override was not a string.
    #[error("opts.separators.{name} must be a string")]
    InvalidSeparator { name: String },

    /// The options object could not be read.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A custom at-rule cannot be lowered.
    #[error("{0}")]
    Syntax(SyntaxError),

    /// Input text could not be parsed.
    #[error("{input}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },
}

/// An offending node and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub reason: String,
    pub location: Option<Location>,
}

impl SyntaxError {
    pub fn new(reason: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            reason: reason.into(),
            location,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

impl From<SyntaxError> for TransformError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let error = TransformError::from(SyntaxError::new(
            "No names supplied to @utility",
            Some(Location {
                input: "<input css 1>".to_string(),
                line: 1,
                column: 1,
            }),
        ));
        assert_eq!(error.to_string(), "<input css 1>:1:1: No names supplied to @utility");
    }

    #[test]
    fn test_separator_error_display() {
        let error = TransformError::InvalidSeparator {
            name: "modifier".to_string(),
        };
        assert_eq!(error.to_string(), "opts.separators.modifier must be a string");
    }
}
