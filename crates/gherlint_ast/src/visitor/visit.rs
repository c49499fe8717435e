//! Visitor trait for traversing a [`Document`].
//!
//! Every hook has a no-op default, so an implementation overrides only the
//! events it cares about. The walk itself is driven by
//! [`walk`](super::walk), which calls every hook unconditionally.
//!
//! # Example
//!
//! ```rust
//! use gherlint_ast::{Document, Scenario};
//! use gherlint_ast::visitor::{Visitor, walk};
//!
//! /// Collects scenario names in traversal order.
//! struct NameCollector<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for NameCollector<'a> {
//!     fn enter_scenario(&mut self, scenario: &'a Scenario) {
//!         self.names.push(&scenario.name);
//!     }
//! }
//!
//! let document = Document::empty("empty.feature", "en");
//! let mut collector = NameCollector { names: Vec::new() };
//! walk(&document, &mut collector);
//! assert!(collector.names.is_empty());
//! ```

use crate::{Background, Comment, Document, Examples, Feature, Rule, Scenario, Step, Tag};

/// Read-only traversal callbacks.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to the document being walked, so a
/// visitor may keep references to nodes for the duration of the walk.
#[allow(unused_variables)]
pub trait Visitor<'a> {
    /// Called first, before anything else in the document.
    fn enter_document(&mut self, document: &'a Document) {}

    /// Called last, after every comment has been visited.
    fn leave_document(&mut self, document: &'a Document) {}

    fn enter_feature(&mut self, feature: &'a Feature) {}

    fn leave_feature(&mut self, feature: &'a Feature) {}

    fn enter_rule(&mut self, rule: &'a Rule) {}

    fn leave_rule(&mut self, rule: &'a Rule) {}

    fn enter_background(&mut self, background: &'a Background) {}

    fn leave_background(&mut self, background: &'a Background) {}

    fn enter_scenario(&mut self, scenario: &'a Scenario) {}

    fn leave_scenario(&mut self, scenario: &'a Scenario) {}

    /// Steps are leaves; their data table or doc string is reachable from
    /// the step itself.
    fn enter_step(&mut self, step: &'a Step) {}

    fn leave_step(&mut self, step: &'a Step) {}

    fn enter_examples(&mut self, examples: &'a Examples) {}

    fn leave_examples(&mut self, examples: &'a Examples) {}

    /// Tags are visited right after their owner is entered.
    fn enter_tag(&mut self, tag: &'a Tag) {}

    fn leave_tag(&mut self, tag: &'a Tag) {}

    /// Comments are visited after the feature subtree, in source order.
    fn visit_comment(&mut self, comment: &'a Comment) {}
}
