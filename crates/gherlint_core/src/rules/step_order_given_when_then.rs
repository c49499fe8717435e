//! `step-order-given-when-then`: steps of a scenario must not go back to an
//! earlier phase.
//!
//! Conjunction and bullet steps stay in the current phase. Background steps
//! are not checked.

use gherlint_ast::{KeywordType, Scenario, Visitor, walk};

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::registry::RuleMetadata;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "step-order-given-when-then",
    name: "Steps should follow the Given/When/Then order",
    description: "A Given after a When or Then, or a When after a Then, breaks the scenario's narrative.",
    default_severity: Severity::Error,
    default_enabled: true,
    params: &[],
};

pub struct StepOrder;

struct Pass<'c, 'a> {
    cx: &'c mut AnalysisContext<'a>,
}

impl<'a> Visitor<'a> for Pass<'_, 'a> {
    fn enter_scenario(&mut self, scenario: &'a Scenario) {
        let mut phase = 0;
        for step in &scenario.steps {
            let Some(step_phase) = phase_of(step.keyword_type) else {
                continue;
            };
            if step_phase < phase {
                self.cx.report_at(
                    step.position,
                    format!(
                        "Unexpected {} step. Reorder the steps of this scenario to follow Given/When/Then order.",
                        step.keyword.trim()
                    ),
                );
            } else {
                phase = step_phase;
            }
        }
    }
}

fn phase_of(keyword_type: KeywordType) -> Option<u8> {
    match keyword_type {
        KeywordType::Context => Some(0),
        KeywordType::Action => Some(1),
        KeywordType::Outcome => Some(2),
        KeywordType::Conjunction | KeywordType::Unknown => None,
    }
}

impl Analysis for StepOrder {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        let document = cx.document();
        walk(document, &mut Pass { cx });
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(StepOrder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;
    use gherlint_ast::TextPosition;
    use pretty_assertions::assert_eq;

    fn positions(source: &str) -> Vec<(TextPosition, String)> {
        let (mut per_document, _) = run(&mut StepOrder, &[("steps.feature", source)]);
        per_document
            .remove(0)
            .into_iter()
            .filter_map(|d| match d.location {
                crate::diagnostic::DiagnosticLocation::Position { position, .. } => {
                    Some((position, d.message))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ordered_steps_pass() {
        let source = "Feature: F\n  Scenario: S\n    Given a\n    And b\n    When c\n    Then d\n    But e\n";
        assert!(positions(source).is_empty());
    }

    #[test]
    fn test_reports_step_going_backwards() {
        let source = "Feature: F\n\
                      \x20 Scenario: S\n\
                      \x20   When a\n\
                      \x20   Then b\n\
                      \x20   Given c\n\
                      \x20   When d\n";
        assert_eq!(
            positions(source),
            vec![
                (
                    TextPosition::new(5, 5),
                    "Unexpected Given step. Reorder the steps of this scenario to follow Given/When/Then order."
                        .to_string()
                ),
                (
                    TextPosition::new(6, 5),
                    "Unexpected When step. Reorder the steps of this scenario to follow Given/When/Then order."
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_phase_resets_per_scenario_and_covers_rules() {
        let source = "Feature: F\n\
                      \x20 Scenario: one\n\
                      \x20   Then a\n\
                      \x20 Rule: R\n\
                      \x20   Scenario: two\n\
                      \x20     Given b\n\
                      \x20     Then c\n\
                      \x20     When d\n";
        let found: Vec<u32> = positions(source).iter().map(|(p, _)| p.line).collect();
        assert_eq!(found, vec![8]);
    }

    #[test]
    fn test_bullets_do_not_change_phase() {
        let source = "Feature: F\n  Scenario: S\n    Then a\n    * b\n    Then c\n";
        assert!(positions(source).is_empty());
    }

    #[test]
    fn test_background_is_not_checked() {
        let source = "Feature: F\n  Background:\n    Then a\n    Given b\n  Scenario: S\n    Given c\n";
        assert!(positions(source).is_empty());
    }
}
