//! `no-byte-order-mark`: flags a UTF-8 BOM at the start of the file.

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::registry::RuleMetadata;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "no-byte-order-mark",
    name: "Files should not start with a byte order mark",
    description: "A UTF-8 byte order mark is invisible in most editors and confuses some tools.",
    default_severity: Severity::Warning,
    default_enabled: true,
    params: &[],
};

pub struct NoByteOrderMark;

impl Analysis for NoByteOrderMark {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        if cx.source().starts_with('\u{feff}') {
            cx.report_line(
                1,
                "Remove the UTF-8 Byte Order Mark (BOM) from the beginning of this file.",
            );
        }
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(NoByteOrderMark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLocation;
    use crate::rules::test_support::run;

    #[test]
    fn test_reports_bom_on_line_one() {
        let (per_document, _) = run(
            &mut NoByteOrderMark,
            &[("bom.feature", "\u{feff}Feature: F\n")],
        );
        assert_eq!(per_document[0].len(), 1);
        assert_eq!(per_document[0][0].location, DiagnosticLocation::Line(1));
    }

    #[test]
    fn test_clean_file() {
        let (per_document, cross) = run(
            &mut NoByteOrderMark,
            &[("a.feature", "Feature: F\n"), ("empty.feature", "")],
        );
        assert!(per_document.iter().all(Vec::is_empty));
        assert!(cross.is_empty());
    }
}
