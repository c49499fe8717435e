//! `feature-file-max-lines`: flags files longer than a configured limit.

use serde::Deserialize;

use crate::analysis::Analysis;
use crate::config::parse_options;
use crate::context::AnalysisContext;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::registry::{RuleMetadata, RuleParam};

const DEFAULT_MAX_LINES: usize = 300;

pub static METADATA: RuleMetadata = RuleMetadata {
    id: "feature-file-max-lines",
    name: "Feature files should not be too long",
    description: "Long feature files are hard to navigate; split them by capability.",
    default_severity: Severity::Info,
    default_enabled: false,
    params: &[RuleParam {
        key: "maxLines",
        description: "Maximum number of lines allowed in a feature file",
        default: "300",
    }],
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub max_lines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

pub struct FeatureFileMaxLines {
    options: Options,
}

impl FeatureFileMaxLines {
    pub fn new(options: Options) -> Self {
        Self { options }
    }
}

impl Analysis for FeatureFileMaxLines {
    fn rule_id(&self) -> &str {
        METADATA.id
    }

    fn observe(&mut self, cx: &mut AnalysisContext<'_>) {
        let count = count_lines(cx.source());
        if count > self.options.max_lines {
            cx.report_document(format!(
                "This file has {} lines, which exceeds the limit of {}. Split it into smaller feature files.",
                count, self.options.max_lines
            ));
        }
    }
}

/// Counts lines; a final newline does not start another line.
fn count_lines(source: &str) -> usize {
    if source.is_empty() {
        return 0;
    }
    let newlines = source.bytes().filter(|&b| b == b'\n').count();
    if source.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

pub fn create(options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
    let options: Options = parse_options(METADATA.id, options)?;
    Ok(Box::new(FeatureFileMaxLines::new(options)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLocation;
    use crate::rules::test_support::run;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("one", 1)]
    #[case("one\n", 1)]
    #[case("one\ntwo", 2)]
    #[case("one\n\n", 2)]
    #[case("one\r\ntwo\r\n", 2)]
    fn test_count_lines(#[case] source: &str, #[case] expected: usize) {
        assert_eq!(count_lines(source), expected);
    }

    #[test]
    fn test_reports_long_file_at_document_level() {
        let mut analysis = FeatureFileMaxLines::new(Options { max_lines: 2 });
        let (per_document, _) = run(
            &mut analysis,
            &[
                ("short.feature", "Feature: F\n  Scenario: S\n"),
                ("long.feature", "Feature: F\n  Scenario: S\n    Given a\n"),
            ],
        );

        assert!(per_document[0].is_empty());
        assert_eq!(per_document[1].len(), 1);
        assert_eq!(per_document[1][0].location, DiagnosticLocation::Document);
        assert_eq!(
            per_document[1][0].message,
            "This file has 3 lines, which exceeds the limit of 2. Split it into smaller feature files."
        );
    }

    #[test]
    fn test_create_with_options() {
        assert!(create(&serde_json::Value::Null).is_ok());
        assert!(create(&serde_json::json!({ "maxLines": 10 })).is_ok());
        assert!(create(&serde_json::json!({ "maxLines": -1 })).is_err());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(Options::default().max_lines, 300);
        assert_eq!(METADATA.params[0].default, "300");
    }
}
