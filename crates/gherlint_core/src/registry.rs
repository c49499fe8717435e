//! Rule registry.
//!
//! Maps rule ids to metadata and factories. The built-in registry is
//! assembled by ordinary code; registration order is the order analyses run
//! in and the order their diagnostics appear in a document report.

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::Analysis;
use crate::config::LinterConfig;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::rules;

/// Builds an analysis from its JSON options (`null` when unconfigured).
pub type RuleFactory = fn(&serde_json::Value) -> Result<Box<dyn Analysis>, LinterError>;

/// A configurable rule parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParam {
    pub key: &'static str,
    pub description: &'static str,
    /// Default value, as written in configuration.
    pub default: &'static str,
}

/// Static description of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_severity: Severity,
    pub default_enabled: bool,
    pub params: &'static [RuleParam],
}

struct RegisteredRule {
    metadata: &'static RuleMetadata,
    factory: RuleFactory,
}

/// An instantiated analysis with its resolved severity.
pub struct ActiveRule {
    pub metadata: &'static RuleMetadata,
    pub severity: Severity,
    pub analysis: Box<dyn Analysis>,
}

impl ActiveRule {
    pub fn new(
        metadata: &'static RuleMetadata,
        severity: Severity,
        analysis: Box<dyn Analysis>,
    ) -> Self {
        Self {
            metadata,
            severity,
            analysis,
        }
    }

    #[inline]
    pub fn id(&self) -> &'static str {
        self.metadata.id
    }
}

impl std::fmt::Debug for ActiveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveRule")
            .field("id", &self.metadata.id)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Registered rules, in registration order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (metadata, factory) in rules::builtin() {
            registry.register(metadata, factory);
        }
        registry
    }

    /// Registers a rule. A later registration with the same id replaces the
    /// earlier one in place.
    pub fn register(&mut self, metadata: &'static RuleMetadata, factory: RuleFactory) {
        let entry = RegisteredRule { metadata, factory };
        match self.rules.iter_mut().find(|r| r.metadata.id == metadata.id) {
            Some(existing) => *existing = entry,
            None => self.rules.push(entry),
        }
    }

    /// Returns metadata for a rule id.
    pub fn get(&self, id: &str) -> Option<&'static RuleMetadata> {
        self.rules
            .iter()
            .find(|r| r.metadata.id == id)
            .map(|r| r.metadata)
    }

    /// Iterates over metadata in registration order.
    pub fn metadata(&self) -> impl Iterator<Item = &'static RuleMetadata> + '_ {
        self.rules.iter().map(|r| r.metadata)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Instantiates the rules enabled by a configuration.
    ///
    /// A rule runs if it is enabled by default and not disabled in the
    /// configuration, or if the configuration enables it. Unknown rule ids and
    /// options a rule rejects are errors.
    pub fn instantiate(&self, config: &LinterConfig) -> Result<Vec<ActiveRule>, LinterError> {
        let known: HashSet<&str> = self.rules.iter().map(|r| r.metadata.id).collect();
        let mut unknown: Vec<&str> = config
            .rules
            .keys()
            .map(String::as_str)
            .filter(|id| !known.contains(id))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(LinterError::UnknownRule(unknown.join(", ")));
        }

        let mut active = Vec::new();
        for rule in &self.rules {
            let metadata = rule.metadata;
            let option = config.rule(metadata.id);

            let enabled = option.map_or(metadata.default_enabled, |o| o.is_enabled());
            if !enabled {
                debug!(rule = metadata.id, "Rule disabled");
                continue;
            }

            let severity = match option {
                Some(option) => option.severity(metadata.id)?,
                None => None,
            }
            .unwrap_or(metadata.default_severity);
            let options = option.map(|o| o.options()).unwrap_or_default();
            let analysis = (rule.factory)(&options)?;

            active.push(ActiveRule::new(metadata, severity, analysis));
        }

        debug!(count = active.len(), "Instantiated rules");
        Ok(active)
    }

    /// Instantiates the rules enabled by default.
    pub fn instantiate_defaults(&self) -> Result<Vec<ActiveRule>, LinterError> {
        self.instantiate(&LinterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleOption;
    use crate::context::AnalysisContext;
    use crate::diagnostic::PARSE_ERROR_RULE;
    use pretty_assertions::assert_eq;

    fn ids(rules: &[ActiveRule]) -> Vec<&'static str> {
        rules.iter().map(ActiveRule::id).collect()
    }

    #[test]
    fn test_builtin_registration_order() {
        let registry = RuleRegistry::builtin();
        let ids: Vec<&str> = registry.metadata().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                PARSE_ERROR_RULE,
                "no-byte-order-mark",
                "feature-file-max-lines",
                "step-order-given-when-then",
                "unique-rule-name",
                "unique-feature-name",
                "unique-scenario-name",
                "consistent-feature-language",
            ]
        );
    }

    #[test]
    fn test_instantiate_defaults() {
        let rules = RuleRegistry::builtin().instantiate_defaults().unwrap();
        assert_eq!(
            ids(&rules),
            vec![
                PARSE_ERROR_RULE,
                "no-byte-order-mark",
                "step-order-given-when-then",
                "unique-rule-name",
                "unique-feature-name",
                "unique-scenario-name",
            ]
        );
        assert_eq!(rules[0].severity, Severity::Error);
        assert_eq!(rules[1].severity, Severity::Warning);
    }

    #[test]
    fn test_instantiate_with_config() {
        let config = LinterConfig::new()
            .with_rule("unique-scenario-name", RuleOption::Enabled(false))
            .with_rule(
                "feature-file-max-lines",
                RuleOption::Options(serde_json::json!({ "maxLines": 10, "severity": "error" })),
            )
            .with_rule(
                "no-byte-order-mark",
                RuleOption::Severity("info".to_string()),
            );

        let rules = RuleRegistry::builtin().instantiate(&config).unwrap();
        let active = ids(&rules);
        assert!(!active.contains(&"unique-scenario-name"));
        assert!(active.contains(&"feature-file-max-lines"));

        let max_lines = rules
            .iter()
            .find(|r| r.id() == "feature-file-max-lines")
            .unwrap();
        assert_eq!(max_lines.severity, Severity::Error);

        let bom = rules.iter().find(|r| r.id() == "no-byte-order-mark").unwrap();
        assert_eq!(bom.severity, Severity::Info);
    }

    #[test]
    fn test_instantiate_unknown_rule() {
        let config = LinterConfig::new().with_rule("no-such-rule", RuleOption::Enabled(true));
        let err = RuleRegistry::builtin().instantiate(&config).unwrap_err();
        assert!(matches!(err, LinterError::UnknownRule(id) if id == "no-such-rule"));
    }

    #[test]
    fn test_instantiate_invalid_options() {
        let config = LinterConfig::new().with_rule(
            "feature-file-max-lines",
            RuleOption::Options(serde_json::json!({ "maxLines": "many" })),
        );
        let err = RuleRegistry::builtin().instantiate(&config).unwrap_err();
        assert!(matches!(err, LinterError::InvalidOptions { rule, .. } if rule == "feature-file-max-lines"));
    }

    struct Silent;

    impl Analysis for Silent {
        fn rule_id(&self) -> &str {
            "silent"
        }

        fn observe(&mut self, _cx: &mut AnalysisContext<'_>) {}
    }

    static SILENT: RuleMetadata = RuleMetadata {
        id: "silent",
        name: "Silent",
        description: "Never reports anything.",
        default_severity: Severity::Info,
        default_enabled: false,
        params: &[],
    };

    fn silent(_options: &serde_json::Value) -> Result<Box<dyn Analysis>, LinterError> {
        Ok(Box::new(Silent))
    }

    #[test]
    fn test_register_custom_rule() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());
        registry.register(&SILENT, silent);
        registry.register(&SILENT, silent);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("silent").map(|m| m.name), Some("Silent"));

        assert!(registry.instantiate_defaults().unwrap().is_empty());

        let config = LinterConfig::new().with_rule("silent", RuleOption::Enabled(true));
        let rules = registry.instantiate(&config).unwrap();
        assert_eq!(ids(&rules), vec!["silent"]);
        assert_eq!(rules[0].severity, Severity::Info);
    }
}
