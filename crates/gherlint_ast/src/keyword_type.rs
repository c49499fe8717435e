//! Semantic step roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic role of a step, independent of the literal keyword used.
///
/// The parser assigns this purely from the step's own keyword. A
/// [`KeywordType::Conjunction`] carries no meaning of its own; see
/// [`effective_keyword_types`](crate::effective_keyword_types) for the
/// inherited interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeywordType {
    /// Given-class keyword.
    Context,
    /// When-class keyword.
    Action,
    /// Then-class keyword.
    Outcome,
    /// And/But-class keyword.
    Conjunction,
    /// Bullet (`*`) or unrecognized keyword.
    Unknown,
}

impl KeywordType {
    /// Returns the canonical upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeywordType::Context => "CONTEXT",
            KeywordType::Action => "ACTION",
            KeywordType::Outcome => "OUTCOME",
            KeywordType::Conjunction => "CONJUNCTION",
            KeywordType::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for Given/When/Then-class keywords.
    pub const fn is_primary(&self) -> bool {
        matches!(
            self,
            KeywordType::Context | KeywordType::Action | KeywordType::Outcome
        )
    }
}

impl fmt::Display for KeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
