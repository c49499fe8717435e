//! `unique-feature-name`: Feature names must be unique across a session.

use gherlint_ast::TextPosition;

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::{CrossDocumentDiagnostic, Severity};
use crate::error::LinterError;
use crate::registry::RuleMetadata;
use crate::rules::Occurrences;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "unique-feature-name",
    name: "Feature names should be unique",
    description: "Features sharing a name are hard to tell apart in reports.",
    default_severity: Severity::Warning,
    default_enabled: true,
    params: &[],
};

#[derive(Default)]
pub struct UniqueFeatureName {
    names: Occurrences<(String, TextPosition)>,
}

impl Analysis for UniqueFeatureName {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        let Some(feature) = &cx.document().feature else {
            return;
        };
        if !feature.name.trim().is_empty() {
            self.names
                .record(&feature.name, (cx.source_id().to_string(), feature.position));
        }
    }

    fn finalize(&mut self) -> Vec<CrossDocumentDiagnostic> {
        self.names
            .repeats()
            .map(|(name, (first_source, _), (source_id, position))| {
                self.finding(
                    source_id,
                    position.line,
                    format!(
                        "Rename this Feature. The name \"{name}\" is already used in {first_source}."
                    ),
                )
            })
            .collect()
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(UniqueFeatureName::default()))
}
