//! Analysis results.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{CrossDocumentDiagnostic, Diagnostic, Severity};

/// Result of analyzing a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub source_id: String,

    /// Resolved dialect code.
    pub language: String,

    /// Diagnostics in emission order: the parse error first, then each
    /// analysis in registration order.
    pub diagnostics: Vec<Diagnostic>,

    /// Whether the document parsed without a structural error.
    pub parsed: bool,
}

impl DocumentReport {
    /// Returns true if there are any error-level diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, Severity::Error))
    }
}

/// An analysis that panicked and was isolated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnalysisFault {
    /// Document being observed, or `None` if the fault happened in `finalize`.
    pub source_id: Option<String>,
    pub rule_id: String,
    pub message: String,
}

/// Result of a whole session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// One report per analyzed document, in analysis order.
    pub documents: Vec<DocumentReport>,

    /// Cross-document findings sorted by source, line, rule and message.
    pub cross_document: Vec<CrossDocumentDiagnostic>,

    /// Isolated analysis faults, sorted.
    pub faults: Vec<AnalysisFault>,
}

impl SessionReport {
    /// Returns the report of a document.
    pub fn document(&self, source_id: &str) -> Option<&DocumentReport> {
        self.documents.iter().find(|d| d.source_id == source_id)
    }

    /// Per-document diagnostics of a source; empty if the source is unknown.
    pub fn diagnostics_for(&self, source_id: &str) -> &[Diagnostic] {
        self.document(source_id)
            .map(|d| d.diagnostics.as_slice())
            .unwrap_or(&[])
    }

    /// Cross-document findings attributed to a source.
    pub fn cross_document_for<'a>(
        &'a self,
        source_id: &'a str,
    ) -> impl Iterator<Item = &'a CrossDocumentDiagnostic> + 'a {
        self.cross_document
            .iter()
            .filter(move |d| d.source_id == source_id)
    }

    /// Total number of per-document and cross-document diagnostics.
    pub fn total_diagnostics(&self) -> usize {
        self.documents
            .iter()
            .map(|d| d.diagnostics.len())
            .sum::<usize>()
            + self.cross_document.len()
    }

    /// Returns true if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.documents.iter().any(DocumentReport::has_errors)
            || self
                .cross_document
                .iter()
                .any(|d| matches!(d.severity, Severity::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLocation;

    fn report(source_id: &str, diagnostics: Vec<Diagnostic>) -> DocumentReport {
        DocumentReport {
            source_id: source_id.to_string(),
            language: "en".to_string(),
            diagnostics,
            parsed: true,
        }
    }

    #[test]
    fn test_document_report_has_errors() {
        let warning = Diagnostic::new("r", "m", DiagnosticLocation::Document)
            .with_severity(Severity::Warning);
        assert!(!report("a", vec![warning.clone()]).has_errors());

        let error = Diagnostic::new("r", "m", DiagnosticLocation::Line(1));
        assert!(report("a", vec![warning, error]).has_errors());
    }

    #[test]
    fn test_session_report_lookup_and_totals() {
        let session = SessionReport {
            documents: vec![
                report(
                    "a",
                    vec![Diagnostic::new("r", "m", DiagnosticLocation::Line(1))],
                ),
                report("b", Vec::new()),
            ],
            cross_document: vec![
                CrossDocumentDiagnostic::new("x", "b", 2, "dup")
                    .with_severity(Severity::Warning),
            ],
            faults: Vec::new(),
        };

        assert_eq!(session.diagnostics_for("a").len(), 1);
        assert!(session.diagnostics_for("b").is_empty());
        assert!(session.diagnostics_for("missing").is_empty());
        assert_eq!(session.cross_document_for("b").count(), 1);
        assert_eq!(session.cross_document_for("a").count(), 0);
        assert_eq!(session.total_diagnostics(), 2);
        assert!(session.has_errors());
    }
}
