//! Source position type.
//!
//! Every node of the document tree (except the synthetic root) records where
//! its opening keyword, tag marker or delimiter appears in the source text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// Both the line and the column are 1-indexed. Columns count Unicode scalar
/// values, not bytes, and are measured after a leading byte-order mark has
/// been stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextPosition {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl TextPosition {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Position of the first character of the given line.
    #[inline]
    pub const fn line_start(line: u32) -> Self {
        Self { line, column: 1 }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_position() {
        let pos = TextPosition::new(3, 5);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_line_start() {
        assert_eq!(TextPosition::line_start(7), TextPosition::new(7, 1));
    }

    #[rstest]
    #[case(TextPosition::new(1, 9), TextPosition::new(2, 1))]
    #[case(TextPosition::new(2, 1), TextPosition::new(2, 3))]
    #[case(TextPosition::line_start(5), TextPosition::new(5, 2))]
    fn test_ordering_is_line_then_column(
        #[case] earlier: TextPosition,
        #[case] later: TextPosition,
    ) {
        assert!(earlier < later);
        assert_ne!(earlier, later);
    }

    #[test]
    fn test_display() {
        assert_eq!(TextPosition::new(12, 3).to_string(), "12:3");
    }

    #[test]
    fn test_position_serialization() {
        let pos = TextPosition::new(10, 5);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"line":10,"column":5}"#);
    }

    #[test]
    fn test_position_deserialization() {
        let json = r#"{"line": 2, "column": 15}"#;
        let pos: TextPosition = serde_json::from_str(json).unwrap();
        assert_eq!(pos, TextPosition::new(2, 15));
    }
}
