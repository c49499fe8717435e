//! # gherlint_ast
//!
//! Document tree definitions for Gherlint.
//!
//! This crate provides the immutable tree produced by the Gherkin parser and
//! the single traversal protocol every analysis consumes.
//!
//! ## Architecture
//!
//! - One [`Document`] per source unit, owning an optional [`Feature`]
//! - Child lists keep declaration order
//! - Every node except the root records a 1-based [`TextPosition`]
//! - Comments are collected file-wide, outside the structural nesting
//!
//! ## Example
//!
//! ```rust
//! use gherlint_ast::{Document, TextPosition, Comment};
//!
//! let mut document = Document::empty("login.feature", "en");
//! document.comments.push(Comment {
//!     position: TextPosition::new(1, 1),
//!     text: "# draft".to_string(),
//! });
//! assert!(!document.has_feature());
//! ```

mod keyword_type;
mod node;
mod position;
pub mod visitor;

pub use keyword_type::KeywordType;
pub use node::{
    Background, Comment, DataTable, DocString, Document, Examples, Feature, Rule, Scenario, Step,
    Tag, effective_keyword_types,
};
pub use position::TextPosition;

// Re-export commonly used visitor items for convenience
pub use visitor::{Visitor, walk};
