//! Parser trait definition.

use gherlint_ast::Document;

use crate::ParseError;

/// Result of parsing one source unit.
///
/// Parsing always yields a document: on a structural error the document has
/// no feature but still carries its comments and resolved language.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: Document,
    pub error: Option<ParseError>,
}

impl ParseOutcome {
    /// Returns true if the source parsed without a structural error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Trait for parsing source text into a [`Document`].
///
/// # Example
///
/// ```rust
/// use gherlint_parser::{GherkinParser, Parser};
///
/// let parser = GherkinParser::new();
/// assert!(parser.can_parse("feature"));
///
/// let outcome = parser.parse("login.feature", "Feature: Login\n");
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.document.feature.unwrap().name, "Login");
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["feature"]`).
    fn extensions(&self) -> &[&str];

    /// Parses source text.
    ///
    /// # Arguments
    ///
    /// * `source_id` - Identifier recorded on the document (path or URI)
    /// * `source` - The source text to parse
    fn parse(&self, source_id: &str, source: &str) -> ParseOutcome;

    /// Parses raw bytes, replacing invalid UTF-8 sequences.
    fn parse_bytes(&self, source_id: &str, bytes: &[u8]) -> ParseOutcome {
        self.parse(source_id, &String::from_utf8_lossy(bytes))
    }

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
