//! Built-in analyses.
//!
//! Each module exposes a `METADATA` static and a `create` factory. The
//! per-document rules read the tree or the raw text; the `unique-*` and
//! `consistent-*` rules accumulate across documents and report from
//! `finalize`.

use std::collections::HashMap;

use crate::registry::{RuleFactory, RuleMetadata};

pub mod consistent_feature_language;
pub mod feature_file_max_lines;
pub mod no_byte_order_mark;
pub mod parse_error;
pub mod step_order_given_when_then;
pub mod unique_feature_name;
pub mod unique_rule_name;
pub mod unique_scenario_name;

/// Built-in rules in registration order.
pub fn builtin() -> Vec<(&'static RuleMetadata, RuleFactory)> {
    vec![
        (&parse_error::METADATA, parse_error::create as RuleFactory),
        (&no_byte_order_mark::METADATA, no_byte_order_mark::create),
        (&feature_file_max_lines::METADATA, feature_file_max_lines::create),
        (
            &step_order_given_when_then::METADATA,
            step_order_given_when_then::create,
        ),
        (&unique_rule_name::METADATA, unique_rule_name::create),
        (&unique_feature_name::METADATA, unique_feature_name::create),
        (&unique_scenario_name::METADATA, unique_scenario_name::create),
        (
            &consistent_feature_language::METADATA,
            consistent_feature_language::create,
        ),
    ]
}

/// Groups occurrences by name, keeping first-seen order of names and of
/// occurrences within each name.
#[derive(Debug)]
pub(crate) struct Occurrences<T> {
    entries: Vec<(String, Vec<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Default for Occurrences<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Occurrences<T> {
    pub(crate) fn record(&mut self, name: &str, occurrence: T) {
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].1.push(occurrence),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), vec![occurrence]));
            }
        }
    }

    /// Yields `(name, first, repeat)` for every occurrence after the first.
    pub(crate) fn repeats(&self) -> impl Iterator<Item = (&str, &T, &T)> {
        self.entries.iter().flat_map(|(name, list)| {
            list.iter()
                .skip(1)
                .filter_map(move |repeat| list.first().map(|first| (name.as_str(), first, repeat)))
        })
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers for driving a single analysis over source text.

    use gherlint_parser::{GherkinParser, Parser};

    use crate::analysis::Analysis;
    use crate::context::AnalysisContext;
    use crate::diagnostic::{CrossDocumentDiagnostic, Diagnostic, Severity};

    /// Runs `analysis` over each `(source_id, text)` and returns the
    /// per-document diagnostics plus the finalize output.
    pub(crate) fn run(
        analysis: &mut dyn Analysis,
        sources: &[(&str, &str)],
    ) -> (Vec<Vec<Diagnostic>>, Vec<CrossDocumentDiagnostic>) {
        let parser = GherkinParser::new();
        let mut per_document = Vec::new();
        for (source_id, text) in sources {
            let outcome = parser.parse(source_id, text);
            let rule_id = analysis.rule_id().to_string();
            let mut cx =
                AnalysisContext::new(&outcome.document, text, &rule_id, Severity::Error);
            analysis.observe(&mut cx);
            per_document.push(cx.into_diagnostics());
        }
        let mut cross = analysis.finalize();
        cross.sort();
        (per_document, cross)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gherlint_ast::TextPosition;

    #[test]
    fn test_occurrences_repeats() {
        let mut occurrences = Occurrences::default();
        occurrences.record("a", 1);
        occurrences.record("b", 2);
        occurrences.record("a", 3);
        occurrences.record("a", 4);

        let repeats: Vec<(&str, i32, i32)> = occurrences
            .repeats()
            .map(|(name, first, repeat)| (name, *first, *repeat))
            .collect();
        assert_eq!(repeats, vec![("a", 1, 3), ("a", 1, 4)]);

        occurrences.clear();
        assert_eq!(occurrences.repeats().count(), 0);
    }

    #[test]
    fn test_occurrences_of_positions() {
        let mut occurrences: Occurrences<(String, TextPosition)> = Occurrences::default();
        occurrences.record("Login", ("a.feature".to_string(), TextPosition::new(1, 1)));
        occurrences.record("Logout", ("a.feature".to_string(), TextPosition::new(5, 3)));
        occurrences.record("Login", ("b.feature".to_string(), TextPosition::new(2, 1)));

        let repeats: Vec<(&str, &str, &str, u32)> = occurrences
            .repeats()
            .map(|(name, (first, _), (source, position))| {
                (name, first.as_str(), source.as_str(), position.line)
            })
            .collect();
        assert_eq!(repeats, vec![("Login", "a.feature", "b.feature", 2)]);
    }

    #[test]
    fn test_occurrences_keep_first_seen_order_at_scale() {
        let mut occurrences: Occurrences<usize> = Occurrences::default();
        for n in 0..2000 {
            occurrences.record(&format!("name-{}", n % 1000), n);
        }
        occurrences.record("name-0", 5000);

        let repeats: Vec<(&str, usize)> = occurrences
            .repeats()
            .map(|(name, _, repeat)| (name, *repeat))
            .take(3)
            .collect();
        assert_eq!(
            repeats,
            vec![("name-0", 1000), ("name-0", 5000), ("name-1", 1001)]
        );
        assert_eq!(occurrences.repeats().count(), 1001);

        occurrences.clear();
        occurrences.record("name-0", 1);
        assert_eq!(occurrences.repeats().count(), 0);
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let mut ids: Vec<&str> = builtin().iter().map(|(m, _)| m.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
