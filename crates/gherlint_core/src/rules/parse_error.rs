//! `parse-error`: structural parse failures.
//!
//! The session emits these itself from the parser's error; the analysis is
//! only a marker that lets configuration enable, disable or re-grade them.

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::{PARSE_ERROR_RULE, Severity};
use crate::error::LinterError;
use crate::registry::RuleMetadata;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: PARSE_ERROR_RULE,
    name: "Gherkin parser failure",
    description: "Reports files that cannot be parsed as Gherkin.",
    default_severity: Severity::Error,
    default_enabled: true,
    params: &[],
};

pub struct ParseErrorMarker;

impl Analysis for ParseErrorMarker {
    fn rule_id(&self) -> &str {
        PARSE_ERROR_RULE
    }

    fn observe(&mut self, _cx: &mut AnalysisContext<'_>) {}
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(ParseErrorMarker))
}
