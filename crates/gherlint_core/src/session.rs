//! Sequential analysis session.
//!
//! A session parses each document as it arrives, lets every active analysis
//! observe it, and defers cross-document findings until [`Session::finish`].
//! Analyses run under `catch_unwind`: a panicking analysis loses its
//! findings for that call and the session carries on.

use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use gherlint_ast::Document;
use gherlint_parser::{GherkinParser, ParseError, ParseOutcome, Parser};
use tracing::{debug, info, warn};

use crate::config::LinterConfig;
use crate::context::AnalysisContext;
use crate::diagnostic::{
    CrossDocumentDiagnostic, Diagnostic, DiagnosticLocation, PARSE_ERROR_RULE, Severity,
};
use crate::error::LinterError;
use crate::registry::{ActiveRule, RuleRegistry};
use crate::result::{AnalysisFault, DocumentReport, SessionReport};

/// Largest file [`Session::analyze_path`] accepts.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// One analysis run over an ordered set of documents.
pub struct Session {
    parser: GherkinParser,
    rules: Vec<ActiveRule>,
    documents: Vec<DocumentReport>,
    faults: Vec<AnalysisFault>,
}

impl Session {
    /// Creates a session driving the given analyses, in order.
    pub fn new(rules: Vec<ActiveRule>) -> Self {
        Self {
            parser: GherkinParser::new(),
            rules,
            documents: Vec::new(),
            faults: Vec::new(),
        }
    }

    /// Creates a session with the built-in rules that are enabled by default.
    pub fn with_registry_defaults() -> Result<Self, LinterError> {
        Ok(Self::new(RuleRegistry::builtin().instantiate_defaults()?))
    }

    /// Creates a session with the built-in rules selected by a configuration.
    pub fn from_config(config: &LinterConfig) -> Result<Self, LinterError> {
        Ok(Self::new(RuleRegistry::builtin().instantiate(config)?))
    }

    /// Replaces the parser (e.g. to change the fallback language).
    pub fn with_parser(mut self, parser: GherkinParser) -> Self {
        self.parser = parser;
        self
    }

    /// Ids of the active analyses, in run order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(ActiveRule::id).collect()
    }

    /// Reports produced so far.
    pub fn documents(&self) -> &[DocumentReport] {
        &self.documents
    }

    /// Parses and analyzes one document.
    pub fn analyze(&mut self, source_id: &str, text: &str) -> &DocumentReport {
        let outcome = self.parser.parse(source_id, text);

        let mut diagnostics = Vec::new();
        push_parse_error(&mut diagnostics, &outcome, parse_error_severity(&self.rules));
        for rule in &mut self.rules {
            match observe_document(rule, &outcome.document, text) {
                Ok(found) => diagnostics.extend(found),
                Err(fault) => self.faults.push(fault),
            }
        }

        debug!(
            source_id,
            diagnostics = diagnostics.len(),
            "Analyzed document"
        );

        let index = self.documents.len();
        self.documents.push(document_report(outcome, diagnostics));
        &self.documents[index]
    }

    /// Analyzes raw bytes, replacing invalid UTF-8 sequences.
    pub fn analyze_bytes(&mut self, source_id: &str, bytes: &[u8]) -> &DocumentReport {
        let text = String::from_utf8_lossy(bytes);
        self.analyze(source_id, &text)
    }

    /// Reads and analyzes a file; its path becomes the source id.
    pub fn analyze_path(&mut self, path: &Path) -> Result<&DocumentReport, LinterError> {
        let text = read_source(path)?;
        let source_id = path.to_string_lossy();
        Ok(self.analyze(&source_id, &text))
    }

    /// Finalizes every analysis and returns the session report.
    pub fn finish(mut self) -> SessionReport {
        let mut cross_document = Vec::new();
        for rule in &mut self.rules {
            match finalize_rule(rule) {
                Ok(found) => cross_document.extend(found),
                Err(fault) => self.faults.push(fault),
            }
        }

        build_report(self.documents, cross_document, self.faults)
    }
}

/// Severity of the parse-error rule, if it is active.
pub(crate) fn parse_error_severity(rules: &[ActiveRule]) -> Option<Severity> {
    rules
        .iter()
        .find(|rule| rule.id() == PARSE_ERROR_RULE)
        .map(|rule| rule.severity)
}

pub(crate) fn push_parse_error(
    diagnostics: &mut Vec<Diagnostic>,
    outcome: &ParseOutcome,
    severity: Option<Severity>,
) {
    if let (Some(error), Some(severity)) = (&outcome.error, severity) {
        diagnostics.push(parse_error_diagnostic(error, severity));
    }
}

fn parse_error_diagnostic(error: &ParseError, severity: Severity) -> Diagnostic {
    let location = match error.position() {
        Some(position) => DiagnosticLocation::Position {
            position,
            end_column: None,
        },
        None => DiagnosticLocation::Document,
    };
    Diagnostic::new(PARSE_ERROR_RULE, error.message(), location).with_severity(severity)
}

pub(crate) fn document_report(outcome: ParseOutcome, diagnostics: Vec<Diagnostic>) -> DocumentReport {
    DocumentReport {
        source_id: outcome.document.source_id,
        language: outcome.document.language,
        diagnostics,
        parsed: outcome.error.is_none(),
    }
}

/// Lets one analysis observe one document, isolating panics.
pub(crate) fn observe_document(
    rule: &mut ActiveRule,
    document: &Document,
    source: &str,
) -> Result<Vec<Diagnostic>, AnalysisFault> {
    let severity = rule.severity;
    let analysis = &mut rule.analysis;
    let rule_id = analysis.rule_id().to_string();

    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut cx = AnalysisContext::new(document, source, &rule_id, severity);
        analysis.observe(&mut cx);
        cx.into_diagnostics()
    }))
    .map_err(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(
            rule = %rule_id,
            source_id = %document.source_id,
            "Analysis panicked, dropping its findings for this document: {}",
            message
        );
        AnalysisFault {
            source_id: Some(document.source_id.clone()),
            rule_id: rule_id.clone(),
            message,
        }
    })
}

/// Collects the cross-document findings of one analysis, isolating panics.
pub(crate) fn finalize_rule(
    rule: &mut ActiveRule,
) -> Result<Vec<CrossDocumentDiagnostic>, AnalysisFault> {
    let severity = rule.severity;
    let analysis = &mut rule.analysis;
    let rule_id = analysis.rule_id().to_string();

    match panic::catch_unwind(AssertUnwindSafe(|| analysis.finalize())) {
        Ok(found) => Ok(found
            .into_iter()
            .map(|finding| finding.with_severity(severity))
            .collect()),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(
                rule = %rule_id,
                "Analysis panicked during finalize, dropping its findings: {}",
                message
            );
            Err(AnalysisFault {
                source_id: None,
                rule_id,
                message,
            })
        }
    }
}

pub(crate) fn build_report(
    documents: Vec<DocumentReport>,
    mut cross_document: Vec<CrossDocumentDiagnostic>,
    mut faults: Vec<AnalysisFault>,
) -> SessionReport {
    cross_document.sort();
    faults.sort();

    let report = SessionReport {
        documents,
        cross_document,
        faults,
    };
    info!(
        documents = report.documents.len(),
        diagnostics = report.total_diagnostics(),
        faults = report.faults.len(),
        "Session finished"
    );
    report
}

/// Reads a source file, enforcing [`MAX_FILE_SIZE`].
pub(crate) fn read_source(path: &Path) -> Result<String, LinterError> {
    debug!("Reading {}", path.display());

    let metadata = fs::metadata(path).map_err(|e| {
        LinterError::file(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        ))
    })?;

    if !metadata.is_file() {
        return Err(LinterError::file(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LinterError::file(format!(
            "File size exceeds limit of {} bytes: {}",
            MAX_FILE_SIZE,
            path.display()
        )));
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
