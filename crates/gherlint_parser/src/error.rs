//! Parse error types.

use gherlint_ast::TextPosition;
use thiserror::Error;

/// Errors that can occur during parsing.
///
/// A parse error never aborts a session; it travels next to the (featureless)
/// document in a [`ParseOutcome`](crate::ParseOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text violates Gherkin structure.
    #[error("{}", display_syntax(.message, .position))]
    Syntax {
        /// Error message.
        message: String,
        /// Where the offending line starts; `None` for document-level errors.
        position: Option<TextPosition>,
    },
}

fn display_syntax(message: &str, position: &Option<TextPosition>) -> String {
    match position {
        Some(position) => format!("({position}): {message}"),
        None => message.to_string(),
    }
}

impl ParseError {
    /// Creates an error positioned on a line.
    pub fn syntax_at(message: impl Into<String>, position: TextPosition) -> Self {
        Self::Syntax {
            message: message.into(),
            position: Some(position),
        }
    }

    /// Creates a document-level error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            position: None,
        }
    }

    /// Returns the error message without position.
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. } => message,
        }
    }

    /// Returns the error position, if any.
    pub fn position(&self) -> Option<TextPosition> {
        match self {
            Self::Syntax { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let err = ParseError::syntax_at("unexpected step", TextPosition::new(3, 5));
        assert_eq!(err.to_string(), "(3:5): unexpected step");
        assert_eq!(err.position(), Some(TextPosition::new(3, 5)));
    }

    #[test]
    fn test_display_document_level() {
        let err = ParseError::document("no feature");
        assert_eq!(err.to_string(), "no feature");
        assert_eq!(err.message(), "no feature");
        assert!(err.position().is_none());
    }
}
