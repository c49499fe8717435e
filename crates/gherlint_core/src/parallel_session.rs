//! Parallel analysis of a fixed set of documents.
//!
//! Documents are parsed concurrently. Afterwards every analysis runs on its
//! own worker and observes the documents strictly in input order, so each
//! analysis sees the same sequence as in a [`Session`](crate::Session) and
//! the report is identical to the sequential one.

use std::path::PathBuf;

use gherlint_parser::{GherkinParser, ParseOutcome, Parser};
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::LinterConfig;
use crate::diagnostic::{CrossDocumentDiagnostic, Diagnostic};
use crate::error::LinterError;
use crate::registry::{ActiveRule, RuleRegistry};
use crate::result::SessionReport;
use crate::session::{
    build_report, document_report, finalize_rule, observe_document, parse_error_severity,
    push_parse_error, read_source,
};

/// One input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub source_id: String,
    pub text: String,
}

impl SourceText {
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for SourceText {
    fn from((source_id, text): (S, T)) -> Self {
        Self::new(source_id, text)
    }
}

/// Diagnostics of one analysis: one entry per document, plus its
/// cross-document findings.
type RuleColumn = (Vec<Vec<Diagnostic>>, Vec<CrossDocumentDiagnostic>);

/// A session that runs analyses concurrently.
pub struct ParallelSession {
    parser: GherkinParser,
    rules: Vec<ActiveRule>,
}

impl ParallelSession {
    pub fn new(rules: Vec<ActiveRule>) -> Self {
        Self {
            parser: GherkinParser::new(),
            rules,
        }
    }

    /// Creates a parallel session with the built-in rules selected by a
    /// configuration.
    pub fn from_config(config: &LinterConfig) -> Result<Self, LinterError> {
        Ok(Self::new(RuleRegistry::builtin().instantiate(config)?))
    }

    pub fn with_parser(mut self, parser: GherkinParser) -> Self {
        self.parser = parser;
        self
    }

    /// Analyzes every source and returns the session report.
    pub fn run(mut self, sources: &[SourceText]) -> SessionReport {
        let parser = &self.parser;
        let outcomes: Vec<ParseOutcome> = sources
            .par_iter()
            .map(|source| parser.parse(&source.source_id, &source.text))
            .collect();
        debug!(documents = outcomes.len(), "Parsed sources");

        let parse_severity = parse_error_severity(&self.rules);
        let faults = Mutex::new(Vec::new());

        let columns: Vec<RuleColumn> = self
            .rules
            .par_iter_mut()
            .map(|rule| {
                let per_document: Vec<Vec<Diagnostic>> = outcomes
                    .iter()
                    .zip(sources)
                    .map(|(outcome, source)| {
                        observe_document(rule, &outcome.document, &source.text)
                            .unwrap_or_else(|fault| {
                                faults.lock().push(fault);
                                Vec::new()
                            })
                    })
                    .collect();
                let cross_document = finalize_rule(rule).unwrap_or_else(|fault| {
                    faults.lock().push(fault);
                    Vec::new()
                });
                (per_document, cross_document)
            })
            .collect();

        let (mut per_rule, cross_by_rule): (Vec<Vec<Vec<Diagnostic>>>, Vec<_>) =
            columns.into_iter().unzip();

        let documents = outcomes
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| {
                let mut diagnostics = Vec::new();
                push_parse_error(&mut diagnostics, &outcome, parse_severity);
                for column in &mut per_rule {
                    diagnostics.append(&mut column[index]);
                }
                document_report(outcome, diagnostics)
            })
            .collect();

        let cross_document: Vec<CrossDocumentDiagnostic> =
            cross_by_rule.into_iter().flatten().collect();

        build_report(documents, cross_document, faults.into_inner())
    }

    /// Reads and analyzes files. Files that cannot be read are returned next
    /// to the report and take no part in the session.
    pub fn run_paths(self, paths: &[PathBuf]) -> (SessionReport, Vec<(PathBuf, LinterError)>) {
        let results: Vec<Result<SourceText, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| {
                read_source(path)
                    .map(|text| SourceText::new(path.to_string_lossy(), text))
                    .map_err(|e| (path.clone(), e))
            })
            .collect();

        let mut sources = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(source) => sources.push(source),
                Err((path, error)) => {
                    warn!("Failed to read {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        (self.run(&sources), failures)
    }
}
