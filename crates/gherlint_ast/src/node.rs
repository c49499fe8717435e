//! Document tree node definitions.
//!
//! Nodes are plain owned values built once by the parser. Child lists keep
//! declaration order, and nothing in this crate mutates a node after it has
//! been constructed.

use serde::{Deserialize, Serialize};

use crate::{KeywordType, TextPosition};

/// Root of one parsed source unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (path or URI).
    pub source_id: String,
    /// Resolved dialect code; never empty.
    pub language: String,
    /// The feature, absent for empty input or after a structural parse error.
    pub feature: Option<Feature>,
    /// Every comment in the file, in source order.
    pub comments: Vec<Comment>,
}

impl Document {
    /// Creates a document without a feature.
    pub fn empty(source_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            language: language.into(),
            feature: None,
            comments: Vec::new(),
        }
    }

    /// Returns true if a feature was parsed.
    #[inline]
    pub fn has_feature(&self) -> bool {
        self.feature.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub position: TextPosition,
    /// Literal keyword, without the trailing colon.
    pub keyword: String,
    pub language: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub background: Option<Background>,
    /// Top-level scenarios; scenarios nested in rules are not included.
    pub scenarios: Vec<Scenario>,
    pub rules: Vec<Rule>,
}

impl Feature {
    /// Iterates over top-level scenarios followed by the scenarios of each rule.
    pub fn all_scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios
            .iter()
            .chain(self.rules.iter().flat_map(|rule| rule.scenarios.iter()))
    }

    /// Iterates over the feature background and every rule background.
    pub fn all_backgrounds(&self) -> impl Iterator<Item = &Background> {
        self.background
            .iter()
            .chain(self.rules.iter().filter_map(|rule| rule.background.as_ref()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub position: TextPosition,
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub background: Option<Background>,
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub position: TextPosition,
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub position: TextPosition,
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub steps: Vec<Step>,
    pub examples: Vec<Examples>,
    /// Declared with an outline keyword, or owns at least one Examples section.
    pub is_outline: bool,
}

/// A single step line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub position: TextPosition,
    /// Literal keyword including its trailing separator (e.g. `"Given "`).
    pub keyword: String,
    pub keyword_type: KeywordType,
    pub text: String,
    pub data_table: Option<DataTable>,
    pub doc_string: Option<DocString>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Examples {
    pub position: TextPosition,
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    /// Row 0 is the header, the remaining rows are data.
    pub table: Option<DataTable>,
}

impl Examples {
    /// Header row of the table, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.table
            .as_ref()
            .and_then(|table| table.rows.first())
            .map(Vec::as_slice)
    }

    /// Data rows (everything after the header).
    pub fn body(&self) -> &[Vec<String>] {
        match &self.table {
            Some(table) if !table.rows.is_empty() => &table.rows[1..],
            _ => &[],
        }
    }
}

/// Table rows as cell strings. Rows may have differing widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Position of the first row.
    pub position: TextPosition,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Returns true if every row has the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        self.rows
            .first()
            .is_none_or(|first| self.rows.iter().all(|row| row.len() == first.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocString {
    /// Position of the opening delimiter.
    pub position: TextPosition,
    /// Text following the opening delimiter; empty when absent.
    pub content_type: String,
    pub content: String,
    /// `"""` or ```` ``` ````.
    pub delimiter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Position of the `@` marker.
    pub position: TextPosition,
    /// Name without the `@` marker.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    pub position: TextPosition,
    /// Full raw line text, including indentation and the `#` marker.
    pub text: String,
}

/// Resolves the role of each step, letting conjunction and bullet steps
/// inherit the nearest preceding primary role.
///
/// Steps that have nothing to inherit from keep their own classification.
pub fn effective_keyword_types(steps: &[Step]) -> Vec<KeywordType> {
    let mut current: Option<KeywordType> = None;
    steps
        .iter()
        .map(|step| {
            if step.keyword_type.is_primary() {
                current = Some(step.keyword_type);
                step.keyword_type
            } else {
                current.unwrap_or(step.keyword_type)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(line: u32, keyword: &str, keyword_type: KeywordType) -> Step {
        Step {
            position: TextPosition::new(line, 5),
            keyword: keyword.to_string(),
            keyword_type,
            text: "something".to_string(),
            data_table: None,
            doc_string: None,
        }
    }

    fn scenario(line: u32, name: &str) -> Scenario {
        Scenario {
            position: TextPosition::new(line, 3),
            keyword: "Scenario".to_string(),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            steps: Vec::new(),
            examples: Vec::new(),
            is_outline: false,
        }
    }

    #[test]
    fn test_effective_keyword_types_inherits() {
        let steps = vec![
            step(3, "Given ", KeywordType::Context),
            step(4, "And ", KeywordType::Conjunction),
            step(5, "When ", KeywordType::Action),
            step(6, "* ", KeywordType::Unknown),
            step(7, "Then ", KeywordType::Outcome),
            step(8, "But ", KeywordType::Conjunction),
        ];

        assert_eq!(
            effective_keyword_types(&steps),
            vec![
                KeywordType::Context,
                KeywordType::Context,
                KeywordType::Action,
                KeywordType::Action,
                KeywordType::Outcome,
                KeywordType::Outcome,
            ]
        );
    }

    #[test]
    fn test_effective_keyword_types_leading_conjunction() {
        let steps = vec![
            step(3, "And ", KeywordType::Conjunction),
            step(4, "Then ", KeywordType::Outcome),
        ];

        assert_eq!(
            effective_keyword_types(&steps),
            vec![KeywordType::Conjunction, KeywordType::Outcome]
        );
    }

    #[test]
    fn test_all_scenarios_includes_rules() {
        let feature = Feature {
            position: TextPosition::new(1, 1),
            keyword: "Feature".to_string(),
            language: "en".to_string(),
            name: "F".to_string(),
            description: String::new(),
            tags: Vec::new(),
            background: None,
            scenarios: vec![scenario(2, "top")],
            rules: vec![Rule {
                position: TextPosition::new(4, 3),
                keyword: "Rule".to_string(),
                name: "R".to_string(),
                description: String::new(),
                tags: Vec::new(),
                background: None,
                scenarios: vec![scenario(5, "nested")],
            }],
        };

        let names: Vec<&str> = feature.all_scenarios().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["top", "nested"]);
        assert_eq!(feature.all_backgrounds().count(), 0);
    }

    #[test]
    fn test_examples_header_and_body() {
        let examples = Examples {
            position: TextPosition::new(8, 5),
            keyword: "Examples".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            table: Some(DataTable {
                position: TextPosition::new(9, 7),
                rows: vec![
                    vec!["a".to_string(), "b".to_string()],
                    vec!["1".to_string(), "2".to_string()],
                ],
            }),
        };

        assert_eq!(
            examples.header(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(examples.body().len(), 1);
    }

    #[test]
    fn test_examples_without_table() {
        let examples = Examples {
            position: TextPosition::new(8, 5),
            keyword: "Examples".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            table: None,
        };

        assert!(examples.header().is_none());
        assert!(examples.body().is_empty());
    }

    #[test]
    fn test_ragged_table_is_not_rectangular() {
        let table = DataTable {
            position: TextPosition::new(1, 1),
            rows: vec![vec!["a".to_string()], vec!["b".to_string(), "c".to_string()]],
        };
        assert!(!table.is_rectangular());
    }

    #[test]
    fn test_document_empty() {
        let doc = Document::empty("a.feature", "en");
        assert!(!doc.has_feature());
        assert_eq!(doc.language, "en");
        assert!(doc.comments.is_empty());
    }
}
