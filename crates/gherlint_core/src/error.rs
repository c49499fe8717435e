//! Linter error types.

use thiserror::Error;

/// Errors that can occur while configuring or running a session.
///
/// Structural problems in a document are not errors; they surface as
/// `parse-error` diagnostics.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File error (missing, not a regular file, too large).
    #[error("File error: {0}")]
    File(String),

    /// The configuration names a rule the registry does not know.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// A rule rejected its options.
    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidOptions { rule: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates an invalid options error.
    pub fn invalid_options(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
