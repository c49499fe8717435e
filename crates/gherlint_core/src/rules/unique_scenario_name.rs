//! `unique-scenario-name`: Scenario names must be unique across a session.

use gherlint_ast::{Scenario, TextPosition, Visitor, walk};

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::{CrossDocumentDiagnostic, Severity};
use crate::error::LinterError;
use crate::registry::RuleMetadata;
use crate::rules::Occurrences;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "unique-scenario-name",
    name: "Scenario names should be unique",
    description: "Scenarios sharing a name produce ambiguous test reports.",
    default_severity: Severity::Warning,
    default_enabled: true,
    params: &[],
};

#[derive(Default)]
pub struct UniqueScenarioName {
    names: Occurrences<(String, TextPosition)>,
}

struct Pass<'s, 'a> {
    source_id: &'a str,
    names: &'s mut Occurrences<(String, TextPosition)>,
}

impl<'a> Visitor<'a> for Pass<'_, 'a> {
    fn enter_scenario(&mut self, scenario: &'a Scenario) {
        if !scenario.name.trim().is_empty() {
            self.names.record(
                &scenario.name,
                (self.source_id.to_string(), scenario.position),
            );
        }
    }
}

impl Analysis for UniqueScenarioName {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        let mut pass = Pass {
            source_id: cx.source_id(),
            names: &mut self.names,
        };
        walk(cx.document(), &mut pass);
    }

    fn finalize(&mut self) -> Vec<CrossDocumentDiagnostic> {
        self.names
            .repeats()
            .map(|(name, (first_source, _), (source_id, position))| {
                self.finding(
                    source_id,
                    position.line,
                    format!(
                        "Rename this Scenario. The name \"{name}\" is already used in {first_source}."
                    ),
                )
            })
            .collect()
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(UniqueScenarioName::default()))
}
