//! Diagnostic types for analysis results.

use gherlint_ast::TextPosition;
use serde::{Deserialize, Serialize};

/// Rule id under which structural parse failures are reported.
pub const PARSE_ERROR_RULE: &str = "parse-error";

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

impl Severity {
    /// Parses a severity name.
    ///
    /// Besides `error`, `warning` and `info`, the quality-profile names
    /// `blocker`, `critical`, `major` and `minor` are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" | "blocker" | "critical" => Some(Severity::Error),
            "warning" | "warn" | "major" => Some(Severity::Warning),
            "info" | "minor" => Some(Severity::Info),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Where a diagnostic points, from most to least precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticLocation {
    /// A position, optionally extended to an end column on the same line.
    Position {
        position: TextPosition,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_column: Option<u32>,
    },
    /// A whole line (1-based).
    Line(u32),
    /// The document as a whole.
    Document,
}

/// A diagnostic bound to one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    pub location: DiagnosticLocation,

    /// Optional remediation cost hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        location: DiagnosticLocation,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            location,
            cost: None,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the remediation cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Line the diagnostic points at; `None` for document-level diagnostics.
    pub fn line(&self) -> Option<u32> {
        match self.location {
            DiagnosticLocation::Position { position, .. } => Some(position.line),
            DiagnosticLocation::Line(line) => Some(line),
            DiagnosticLocation::Document => None,
        }
    }

    /// Column the diagnostic starts at, if it has one.
    pub fn column(&self) -> Option<u32> {
        match self.location {
            DiagnosticLocation::Position { position, .. } => Some(position.column),
            _ => None,
        }
    }
}

/// A finding produced after every document of a session has been seen.
///
/// Ordering is by source, line, rule and message, which is the order a
/// session reports them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrossDocumentDiagnostic {
    /// Document the finding belongs to.
    pub source_id: String,
    pub line: u32,
    pub rule_id: String,
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

impl CrossDocumentDiagnostic {
    pub fn new(
        rule_id: impl Into<String>,
        source_id: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            line,
            rule_id: rule_id.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
