//! Configuration types for oas-lint.

use crate::types::{Level, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Top-level configuration for oas-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing run (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    ///
    /// A rule is disabled by `enabled = false` or `severity = "off"`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules.get(rule_name).map_or(true, |c| {
            c.enabled.unwrap_or(true) && c.severity != Some(Level::Off)
        })
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules
            .get(rule_name)
            .and_then(|c| c.severity)
            .and_then(Level::severity)
    }

    /// Gets the configuration block for a rule, if any.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Returns the failure threshold, defaulting to [`Severity::Error`].
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Documents (paths or glob patterns) to lint when none are given on the command line.
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Level override for this rule; `off` disables it.
    #[serde(default)]
    pub severity: Option<Level>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets the configured level of an individual check within a rule.
    ///
    /// Returns `None` when the check is not configured. A value that is not
    /// one of `error`, `warning`, `info`, `hint` or `off` disables the check.
    #[must_use]
    pub fn check_level(&self, check: &str) -> Option<Level> {
        let value = self.options.get(check)?;
        let level = value.as_str().and_then(|s| s.parse::<Level>().ok());
        if level.is_none() {
            warn!("Unrecognized level {value} for check {check}, disabling it");
        }
        Some(level.unwrap_or(Level::Off))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.analyzer.include.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_rule_enabled("inline-response-schema"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "strict"
fail_on = "warning"

[analyzer]
include = ["openapi/*.yaml"]
exclude = ["**/generated/**"]

[rules.inline-response-schema]
severity = "info"

[rules.path-parameters]
missing_path_parameter = "error"
duplicate_path_parameter = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(config.analyzer.include, vec!["openapi/*.yaml"]);
        assert_eq!(
            config.rule_severity("inline-response-schema"),
            Some(Severity::Info)
        );

        let rule_config = config.rule_config("path-parameters").unwrap();
        assert_eq!(
            rule_config.check_level("duplicate_path_parameter"),
            Some(Level::Warning)
        );
        assert_eq!(rule_config.check_level("not_configured"), None);
    }

    #[test]
    fn off_or_disabled_rules_are_not_enabled() {
        let toml = r#"
[rules.operation-tags]
severity = "off"

[rules.openapi-tags]
enabled = false
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.is_rule_enabled("operation-tags"));
        assert!(!config.is_rule_enabled("openapi-tags"));
        assert_eq!(config.rule_severity("operation-tags"), None);
    }

    #[test]
    fn unrecognized_check_level_disables_check() {
        let toml = r#"
[rules.path-parameters]
duplicate_path_parameter = "loud"
missing_path_parameter = 3
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        let rule_config = config.rule_config("path-parameters").unwrap();
        assert_eq!(
            rule_config.check_level("duplicate_path_parameter"),
            Some(Level::Off)
        );
        assert_eq!(
            rule_config.check_level("missing_path_parameter"),
            Some(Level::Off)
        );
    }

    #[test]
    fn invalid_rule_severity_is_a_parse_error() {
        let toml = r#"
[rules.inline-response-schema]
severity = "fatal"
"#;
        assert!(matches!(
            Config::parse(toml),
            Err(ConfigError::Parse { .. })
        ));
    }
}
