//! `unique-rule-name`: Rule names must be unique within a feature.

use gherlint_ast::{Feature, Rule, TextPosition, Visitor, walk};

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::registry::RuleMetadata;
use crate::rules::Occurrences;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "unique-rule-name",
    name: "Rule names should be unique in a feature",
    description: "Two Rules with the same name in one Feature are indistinguishable in reports.",
    default_severity: Severity::Warning,
    default_enabled: true,
    params: &[],
};

pub struct UniqueRuleName;

struct Pass<'c, 'a> {
    cx: &'c mut AnalysisContext<'a>,
    names: Occurrences<TextPosition>,
}

impl<'a> Visitor<'a> for Pass<'_, 'a> {
    fn enter_feature(&mut self, _feature: &'a Feature) {
        self.names.clear();
    }

    fn enter_rule(&mut self, rule: &'a Rule) {
        if !rule.name.trim().is_empty() {
            self.names.record(&rule.name, rule.position);
        }
    }

    fn leave_feature(&mut self, _feature: &'a Feature) {
        for (name, _, position) in self.names.repeats() {
            self.cx.report_at(
                *position,
                format!("Rename this Rule. The name \"{name}\" is already used in this Feature."),
            );
        }
    }
}

impl Analysis for UniqueRuleName {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        let document = cx.document();
        let mut pass = Pass {
            cx,
            names: Occurrences::default(),
        };
        walk(document, &mut pass);
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(UniqueRuleName))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    #[test]
    fn test_reports_second_and_later_rules() {
        let source = "Feature: F\n\
                      \x20 Rule: Refunds\n\
                      \x20 Rule: Payments\n\
                      \x20 Rule: Refunds\n\
                      \x20 Rule: Refunds\n\
                      \x20 Rule:\n\
                      \x20 Rule:\n";
        let (per_document, cross) = run(&mut UniqueRuleName, &[("r.feature", source)]);
        let lines: Vec<Option<u32>> = per_document[0].iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![Some(4), Some(5)]);
        assert_eq!(
            per_document[0][0].message,
            "Rename this Rule. The name \"Refunds\" is already used in this Feature."
        );
        assert!(cross.is_empty());
    }

    #[test]
    fn test_names_do_not_leak_between_documents() {
        let source = "Feature: F\n  Rule: Shared\n";
        let (per_document, _) = run(
            &mut UniqueRuleName,
            &[("a.feature", source), ("b.feature", source)],
        );
        assert!(per_document.iter().all(Vec::is_empty));
    }
}
