//! Visitor pattern for document traversal.
//!
//! - [`Visitor`] - capability-set trait with one optional hook per event
//! - [`walk`] - drives a visitor over a whole [`Document`](crate::Document)
//!
//! The remaining `walk_*` functions expose the same traversal for a single
//! subtree, which is handy when an analysis only cares about one rule or
//! scenario.
//!
//! # Example
//!
//! ```rust
//! use gherlint_ast::{Document, Step};
//! use gherlint_ast::visitor::{Visitor, walk};
//!
//! #[derive(Default)]
//! struct StepCounter {
//!     steps: usize,
//! }
//!
//! impl<'a> Visitor<'a> for StepCounter {
//!     fn enter_step(&mut self, _step: &'a Step) {
//!         self.steps += 1;
//!     }
//! }
//!
//! let document = Document::empty("empty.feature", "en");
//! let mut counter = StepCounter::default();
//! walk(&document, &mut counter);
//! assert_eq!(counter.steps, 0);
//! ```

mod visit;
mod walk;

pub use visit::Visitor;
pub use walk::{walk, walk_background, walk_examples, walk_feature, walk_rule, walk_scenario};
