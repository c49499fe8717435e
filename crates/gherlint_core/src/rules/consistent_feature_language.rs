//! `consistent-feature-language`: every feature of a session should use the
//! language of the first one.

use crate::analysis::Analysis;
use crate::context::AnalysisContext;
use crate::diagnostic::{CrossDocumentDiagnostic, Severity};
use crate::error::LinterError;
use crate::registry::RuleMetadata;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "consistent-feature-language",
    name: "Feature files should use the same language",
    description: "Mixing Gherkin dialects in one project makes the feature files harder to read.",
    default_severity: Severity::Warning,
    default_enabled: false,
    params: &[],
};

struct LanguageOccurrence {
    language: String,
    source_id: String,
    line: u32,
}

#[derive(Default)]
pub struct ConsistentFeatureLanguage {
    occurrences: Vec<LanguageOccurrence>,
}

impl Analysis for ConsistentFeatureLanguage {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        if let Some(feature) = &cx.document().feature {
            self.occurrences.push(LanguageOccurrence {
                language: feature.language.clone(),
                source_id: cx.source_id().to_string(),
                line: feature.position.line,
            });
        }
    }

    fn finalize(&mut self) -> Vec<CrossDocumentDiagnostic> {
        let Some(expected) = self.occurrences.first().map(|o| o.language.as_str()) else {
            return Vec::new();
        };
        self.occurrences
            .iter()
            .filter(|o| o.language != expected)
            .map(|o| {
                self.finding(
                    &o.source_id,
                    o.line,
                    format!(
                        "Use the language \"{}\" for consistency. This Feature uses \"{}\".",
                        expected, o.language
                    ),
                )
            })
            .collect()
    }
}

pub fn create(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    Ok(Box::new(ConsistentFeatureLanguage::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_feature_sets_the_language() {
        let mut analysis = ConsistentFeatureLanguage::default();
        let (_, cross) = run(
            &mut analysis,
            &[
                ("en.feature", "Feature: A\n"),
                ("fr.feature", "# language: fr\nFonctionnalité: B\n"),
                ("en2.feature", "Feature: C\n"),
            ],
        );

        assert_eq!(
            cross,
            vec![CrossDocumentDiagnostic::new(
                "consistent-feature-language",
                "fr.feature",
                2,
                "Use the language \"en\" for consistency. This Feature uses \"fr\"."
            )]
        );
    }

    #[test]
    fn test_no_features_no_findings() {
        let mut analysis = ConsistentFeatureLanguage::default();
        let (_, cross) = run(&mut analysis, &[("empty.feature", "")]);
        assert!(cross.is_empty());
    }
}
