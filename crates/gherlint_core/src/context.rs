//! Per-document analysis context.
//!
//! An [`AnalysisContext`] is handed to one analysis for one document. It
//! exposes the parsed tree and the raw text, and collects the diagnostics the
//! analysis emits, already bound to its rule id and configured severity.

use gherlint_ast::{Document, TextPosition};

use crate::diagnostic::{Diagnostic, DiagnosticLocation, Severity};

/// Read access to one document plus a diagnostic sink.
///
/// # Example
///
/// ```rust
/// use gherlint_ast::{Document, TextPosition};
/// use gherlint_core::{AnalysisContext, Severity};
///
/// let document = Document::empty("a.feature", "en");
/// let mut cx = AnalysisContext::new(&document, "", "demo", Severity::Warning);
/// cx.report_line(1, "something on line one");
///
/// let diagnostics = cx.into_diagnostics();
/// assert_eq!(diagnostics[0].rule_id, "demo");
/// assert_eq!(diagnostics[0].severity, Severity::Warning);
/// ```
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    document: &'a Document,
    source: &'a str,
    rule_id: &'a str,
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        document: &'a Document,
        source: &'a str,
        rule_id: &'a str,
        severity: Severity,
    ) -> Self {
        Self {
            document,
            source,
            rule_id,
            severity,
            diagnostics: Vec::new(),
        }
    }

    /// The parsed document. The reference outlives the context borrow, so a
    /// visitor can hold both.
    #[inline]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    #[inline]
    pub fn source_id(&self) -> &'a str {
        &self.document.source_id
    }

    /// Raw source text, byte-order mark included.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn rule_id(&self) -> &'a str {
        self.rule_id
    }

    /// Reports an issue at a node position.
    pub fn report_at(&mut self, position: TextPosition, message: impl Into<String>) {
        self.push(
            DiagnosticLocation::Position {
                position,
                end_column: None,
            },
            message.into(),
            None,
        );
    }

    pub fn report_at_with_cost(
        &mut self,
        position: TextPosition,
        message: impl Into<String>,
        cost: f64,
    ) {
        self.push(
            DiagnosticLocation::Position {
                position,
                end_column: None,
            },
            message.into(),
            Some(cost),
        );
    }

    /// Reports an issue spanning `start_column..end_column` on one line.
    pub fn report_range(
        &mut self,
        line: u32,
        start_column: u32,
        end_column: u32,
        message: impl Into<String>,
    ) {
        self.push(
            range(line, start_column, end_column),
            message.into(),
            None,
        );
    }

    pub fn report_range_with_cost(
        &mut self,
        line: u32,
        start_column: u32,
        end_column: u32,
        message: impl Into<String>,
        cost: f64,
    ) {
        self.push(
            range(line, start_column, end_column),
            message.into(),
            Some(cost),
        );
    }

    /// Reports an issue on a whole line.
    pub fn report_line(&mut self, line: u32, message: impl Into<String>) {
        self.push(DiagnosticLocation::Line(line), message.into(), None);
    }

    pub fn report_line_with_cost(&mut self, line: u32, message: impl Into<String>, cost: f64) {
        self.push(DiagnosticLocation::Line(line), message.into(), Some(cost));
    }

    /// Reports an issue on the document as a whole.
    pub fn report_document(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLocation::Document, message.into(), None);
    }

    pub fn report_document_with_cost(&mut self, message: impl Into<String>, cost: f64) {
        self.push(DiagnosticLocation::Document, message.into(), Some(cost));
    }

    /// Diagnostics emitted so far, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn push(&mut self, location: DiagnosticLocation, message: String, cost: Option<f64>) {
        let mut diagnostic =
            Diagnostic::new(self.rule_id, message, location).with_severity(self.severity);
        diagnostic.cost = cost;
        self.diagnostics.push(diagnostic);
    }
}

fn range(line: u32, start_column: u32, end_column: u32) -> DiagnosticLocation {
    DiagnosticLocation::Position {
        position: TextPosition::new(line, start_column),
        end_column: Some(end_column.max(start_column)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emission_primitives_keep_order() {
        let document = Document::empty("a.feature", "en");
        let mut cx = AnalysisContext::new(&document, "Feature: A\n", "demo", Severity::Info);

        cx.report_at(TextPosition::new(2, 3), "at");
        cx.report_range(3, 5, 9, "range");
        cx.report_line(4, "line");
        cx.report_document("document");

        let locations: Vec<DiagnosticLocation> =
            cx.diagnostics().iter().map(|d| d.location).collect();
        assert_eq!(
            locations,
            vec![
                DiagnosticLocation::Position {
                    position: TextPosition::new(2, 3),
                    end_column: None
                },
                DiagnosticLocation::Position {
                    position: TextPosition::new(3, 5),
                    end_column: Some(9)
                },
                DiagnosticLocation::Line(4),
                DiagnosticLocation::Document,
            ]
        );
        assert!(cx.diagnostics().iter().all(|d| d.rule_id == "demo"));
        assert!(cx.diagnostics().iter().all(|d| d.severity == Severity::Info));
        assert!(cx.diagnostics().iter().all(|d| d.cost.is_none()));
    }

    #[test]
    fn test_cost_variants() {
        let document = Document::empty("a.feature", "en");
        let mut cx = AnalysisContext::new(&document, "", "demo", Severity::Error);

        cx.report_at_with_cost(TextPosition::new(1, 1), "a", 1.0);
        cx.report_range_with_cost(1, 2, 4, "b", 2.0);
        cx.report_line_with_cost(1, "c", 3.0);
        cx.report_document_with_cost("d", 4.0);

        let costs: Vec<Option<f64>> = cx.into_diagnostics().iter().map(|d| d.cost).collect();
        assert_eq!(costs, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let document = Document::empty("a.feature", "en");
        let mut cx = AnalysisContext::new(&document, "", "demo", Severity::Error);
        cx.report_range(2, 8, 3, "inverted");

        assert_eq!(
            cx.diagnostics()[0].location,
            DiagnosticLocation::Position {
                position: TextPosition::new(2, 8),
                end_column: Some(8)
            }
        );
    }

    #[test]
    fn test_accessors() {
        let document = Document::empty("login.feature", "fr");
        let cx = AnalysisContext::new(&document, "\u{feff}raw", "demo", Severity::Error);

        assert_eq!(cx.source_id(), "login.feature");
        assert_eq!(cx.source(), "\u{feff}raw");
        assert_eq!(cx.rule_id(), "demo");
        assert_eq!(cx.document().language, "fr");
    }
}
