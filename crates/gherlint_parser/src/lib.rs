//! # gherlint_parser
//!
//! Gherkin parsing for Gherlint.
//!
//! This crate provides:
//! - A `Parser` trait for source-to-document conversion
//! - The keyword dialect table (`dialect`)
//! - A line classifier (`token`)
//! - The built-in `GherkinParser`
//!
//! ## Architecture
//!
//! The parser picks a dialect from an optional `# language:` line, classifies
//! every line against it and builds the document tree in one pass. Parsing
//! never fails outright: a structural error yields a document without a
//! feature plus a [`ParseError`].
//!
//! ## Example
//!
//! ```rust
//! use gherlint_parser::{GherkinParser, Parser};
//!
//! let parser = GherkinParser::new();
//! let outcome = parser.parse("cart.feature", "Feature: Cart\n  Scenario: Empty\n    Given no items\n");
//!
//! let feature = outcome.document.feature.unwrap();
//! assert_eq!(feature.scenarios[0].steps[0].text, "no items");
//! ```

pub mod dialect;
mod error;
mod gherkin;
pub mod token;
mod traits;

pub use dialect::{DEFAULT_LANGUAGE, Dialect};
pub use error::ParseError;
pub use gherkin::GherkinParser;
pub use traits::{ParseOutcome, Parser};
