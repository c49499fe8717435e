//! Linter configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::LinterError;
use crate::diagnostic::Severity;

/// Configuration for a session.
///
/// ```json
/// {
///   "rules": {
///     "feature-file-max-lines": { "severity": "warning", "maxLines": 200 },
///     "consistent-feature-language": true,
///     "unique-scenario-name": "off"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/options), keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleOption>,
}

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "info", "off").
    Severity(String),
    /// Rule is enabled with specific options object.
    Options(serde_json::Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => !is_off(s),
            RuleOption::Options(value) => match value.get("severity") {
                Some(serde_json::Value::String(s)) => !is_off(s),
                Some(serde_json::Value::Bool(enabled)) => *enabled,
                _ => true,
            },
        }
    }

    /// Returns the configured severity, if any.
    ///
    /// `Ok(None)` means the rule keeps its default severity.
    pub fn severity(&self, rule_id: &str) -> Result<Option<Severity>, LinterError> {
        let name = match self {
            RuleOption::Enabled(_) => return Ok(None),
            RuleOption::Severity(s) => s.as_str(),
            RuleOption::Options(value) => match value.get("severity") {
                Some(serde_json::Value::String(s)) => s.as_str(),
                Some(serde_json::Value::Bool(_)) | None => return Ok(None),
                Some(other) => {
                    return Err(LinterError::invalid_options(
                        rule_id,
                        format!("severity must be a string, got {other}"),
                    ));
                }
            },
        };

        if is_off(name) {
            return Ok(None);
        }
        Severity::from_name(name).map(Some).ok_or_else(|| {
            LinterError::invalid_options(rule_id, format!("unknown severity '{name}'"))
        })
    }

    /// Gets the rule options as JSON value.
    pub fn options(&self) -> serde_json::Value {
        match self {
            RuleOption::Enabled(_) => serde_json::Value::Null,
            RuleOption::Severity(_) => serde_json::Value::Null,
            RuleOption::Options(v) => v.clone(),
        }
    }
}

fn is_off(severity: &str) -> bool {
    severity.trim().eq_ignore_ascii_case("off")
}

impl LinterConfig {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        serde_json::from_str(json).map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Sets the option of one rule.
    pub fn with_rule(mut self, rule_id: impl Into<String>, option: RuleOption) -> Self {
        self.rules.insert(rule_id.into(), option);
        self
    }

    /// Returns the configured option for a rule.
    pub fn rule(&self, rule_id: &str) -> Option<&RuleOption> {
        self.rules.get(rule_id)
    }
}

/// Deserializes typed rule options, falling back to defaults for `null`.
///
/// Unknown keys (including `severity`) are ignored.
pub fn parse_options<T>(rule_id: &str, value: &serde_json::Value) -> Result<T, LinterError>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    T::deserialize(value).map_err(|e| LinterError::invalid_options(rule_id, e.to_string()))
}
