//! # gherlint_core
//!
//! Analysis engine for Gherkin feature files.
//!
//! This crate provides:
//! - The analysis extension point ([`Analysis`] and [`AnalysisContext`])
//! - The built-in rules and their registry
//! - Configuration loading
//! - Sequential and parallel sessions
//!
//! ## Example
//!
//! ```rust
//! use gherlint_core::Session;
//!
//! let mut session = Session::with_registry_defaults()?;
//! session.analyze("a.feature", "Feature: Login\n  Scenario: Valid\n    Given a user\n");
//! session.analyze("b.feature", "Feature: Login\n");
//!
//! let report = session.finish();
//! assert_eq!(report.cross_document.len(), 1);
//! assert_eq!(report.cross_document[0].source_id, "b.feature");
//! # Ok::<(), gherlint_core::LinterError>(())
//! ```

mod analysis;
mod config;
mod context;
mod diagnostic;
mod error;
mod parallel_session;
mod registry;
mod result;
pub mod rules;
mod session;

pub use analysis::Analysis;
pub use config::{LinterConfig, RuleOption, parse_options};
pub use context::AnalysisContext;
pub use diagnostic::{
    CrossDocumentDiagnostic, Diagnostic, DiagnosticLocation, PARSE_ERROR_RULE, Severity,
};
pub use error::LinterError;
pub use parallel_session::{ParallelSession, SourceText};
pub use registry::{ActiveRule, RuleFactory, RuleMetadata, RuleParam, RuleRegistry};
pub use result::{AnalysisFault, DocumentReport, SessionReport};
pub use session::{MAX_FILE_SIZE, Session};
