//! The analysis interface.
//!
//! An analysis is a stateful object driven by a session: `observe` is called
//! once per document, in session order, and `finalize` once after the last
//! document. Per-document findings go through the [`AnalysisContext`];
//! findings that need the whole session are returned from `finalize`.
//!
//! # Example
//!
//! ```rust
//! use gherlint_ast::{Scenario, Visitor, walk};
//! use gherlint_core::{Analysis, AnalysisContext};
//!
//! /// Flags scenarios without a name.
//! struct NamedScenarios;
//!
//! struct Pass<'c, 'a> {
//!     cx: &'c mut AnalysisContext<'a>,
//! }
//!
//! impl<'a> Visitor<'a> for Pass<'_, 'a> {
//!     fn enter_scenario(&mut self, scenario: &'a Scenario) {
//!         if scenario.name.trim().is_empty() {
//!             self.cx.report_at(scenario.position, "Name this Scenario.");
//!         }
//!     }
//! }
//!
//! impl Analysis for NamedScenarios {
//!     fn rule_id(&self) -> &str {
//!         "scenario-name-required"
//!     }
//!
//!     fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
//!         let document = cx.document();
//!         walk(document, &mut Pass { cx });
//!     }
//! }
//! ```

use crate::context::AnalysisContext;
use crate::diagnostic::CrossDocumentDiagnostic;

/// A check run over every document of a session.
///
/// Implementations must be `Send` so a parallel session can drive each
/// analysis on its own worker.
pub trait Analysis: Send {
    /// Rule id every finding of this analysis is bound to.
    fn rule_id(&self) -> &str;

    /// Inspects one document.
    fn observe(&mut self, cx: &mut AnalysisContext<'_>);

    /// Emits findings that span the whole session.
    ///
    /// Called exactly once, after the last document.
    fn finalize(&mut self) -> Vec<CrossDocumentDiagnostic> {
        Vec::new()
    }

    /// Builds a cross-document finding bound to this analysis.
    fn finding(
        &self,
        source_id: &str,
        line: u32,
        message: impl Into<String>,
    ) -> CrossDocumentDiagnostic
    where
        Self: Sized,
    {
        CrossDocumentDiagnostic::new(self.rule_id(), source_id, line, message)
    }
}
