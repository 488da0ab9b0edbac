//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::context::DocumentContext;
use crate::document::{Document, DocumentError};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error while discovering documents.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be loaded.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// A glob match could not be read.
    #[error("Failed to read glob match: {0}")]
    GlobMatch(#[from] glob::GlobError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether a document that fails to load aborts the run (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = Vec::new();
        for pattern in self
            .exclude_patterns
            .iter()
            .chain(config.analyzer.exclude.iter())
        {
            exclude_patterns.push(glob::Pattern::new(pattern)?);
        }

        Ok(Analyzer {
            rules: self.rules,
            exclude_patterns,
            config,
            default_rule_config: RuleConfig::default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that runs rules over documents.
///
/// Use [`Analyzer::builder()`] to construct an instance. Rules run in
/// registration order and each rule reports in traversal order, so the
/// resulting violation list is deterministic.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<glob::Pattern>,
    config: Config,
    default_rule_config: RuleConfig,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every enabled rule over a single document.
    #[must_use]
    pub fn analyze(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_config = self
                .rule_config(rule.name())
                .unwrap_or(&self.default_rule_config);
            let ctx = DocumentContext::new(document.source(), rule_config);

            let rule_violations = rule.check(&ctx, document.root());
            debug!("{} reported {} violations", rule.name(), rule_violations.len());
            violations.extend(self.apply_severity_override(rule.name(), rule_violations));
        }

        if let Some(source) = document.source() {
            for v in &mut violations {
                v.file = Some(source.to_path_buf());
            }
        }

        violations
    }

    /// Loads and analyzes each file in order.
    ///
    /// Files that fail to load are logged and skipped unless the analyzer was
    /// built with `fail_on_parse_error(true)`.
    ///
    /// # Errors
    ///
    /// Returns the first load error when failing on parse errors.
    pub fn analyze_files(&self, files: &[PathBuf]) -> Result<LintResult, AnalyzerError> {
        info!("Analyzing {} documents", files.len());

        let mut result = LintResult::new();
        for path in files {
            debug!("Analyzing: {}", path.display());

            match Document::from_file(path) {
                Ok(document) => {
                    result.violations.extend(self.analyze(&document));
                    result.documents_checked += 1;
                }
                Err(e) => {
                    warn!("{e}");
                    if self.fail_on_parse_error {
                        return Err(e.into());
                    }
                }
            }
        }

        info!(
            "Analysis complete: {} violations in {} documents",
            result.violations.len(),
            result.documents_checked
        );

        Ok(result)
    }

    /// Expands paths and glob patterns into the list of documents to lint.
    ///
    /// Plain paths are kept as given, patterns are expanded in sorted order,
    /// and anything matching an exclude pattern is dropped. Duplicates keep
    /// their first position.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or a match cannot be read.
    pub fn discover<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files: Vec<PathBuf> = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let candidates = if Path::new(pattern).exists() {
                vec![PathBuf::from(pattern)]
            } else {
                let mut matched = Vec::new();
                for entry in glob::glob(pattern)? {
                    matched.push(entry?);
                }
                if matched.is_empty() {
                    warn!("No documents match {pattern}");
                }
                matched
            };

            for path in candidates {
                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                } else if !files.contains(&path) {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches_path(path))
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rule_config(rule_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocPath, Severity};
    use serde_json::{json, Value};

    /// Reports one violation per top-level key, at the configured check level.
    struct KeysRule;

    impl Rule for KeysRule {
        fn name(&self) -> &'static str {
            "keys"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }

        fn check(&self, ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
            let level = ctx.check_level("per_key", self.default_severity().into());
            let Some(severity) = level.severity() else {
                return Vec::new();
            };
            document
                .as_object()
                .into_iter()
                .flat_map(|map| map.keys())
                .map(|key| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        severity,
                        DocPath::root().child(key.as_str()),
                        format!("found {key}"),
                    )
                })
                .collect()
        }
    }

    fn document() -> Document {
        Document::from_value(json!({"openapi": "3.0.0", "info": {}}))
    }

    #[test]
    fn analyze_runs_rules_in_order() {
        let analyzer = Analyzer::builder().rule(KeysRule).build().unwrap();
        assert_eq!(analyzer.rule_count(), 1);

        let violations = analyzer.analyze(&document());
        let paths: Vec<_> = violations.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, vec!["openapi", "info"]);
        assert!(violations.iter().all(|v| v.severity == Severity::Warning));
    }

    #[test]
    fn severity_override_applies_to_all_violations() {
        let config = Config::parse("[rules.keys]\nseverity = \"error\"\n").unwrap();
        let analyzer = Analyzer::builder().rule(KeysRule).config(config).build().unwrap();
        let violations = analyzer.analyze(&document());
        assert!(violations.iter().all(|v| v.severity == Severity::Error));
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = Config::parse("[rules.keys]\nseverity = \"off\"\n").unwrap();
        let analyzer = Analyzer::builder().rule(KeysRule).config(config).build().unwrap();
        assert!(analyzer.analyze(&document()).is_empty());
    }

    #[test]
    fn rule_config_reaches_the_rule() {
        let config = Config::parse("[rules.keys]\nper_key = \"hint\"\n").unwrap();
        let analyzer = Analyzer::builder().rule(KeysRule).config(config).build().unwrap();
        let violations = analyzer.analyze(&document());
        assert!(violations.iter().all(|v| v.severity == Severity::Hint));
    }

    #[test]
    fn analyze_files_tags_violations_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        std::fs::write(&path, r#"{"openapi": "3.0.0"}"#).unwrap();

        let analyzer = Analyzer::builder().rule(KeysRule).build().unwrap();
        let result = analyzer.analyze_files(&[path.clone()]).unwrap();
        assert_eq!(result.documents_checked, 1);
        assert_eq!(result.violations[0].file.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn unparsable_documents_are_skipped_unless_failing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let lenient = Analyzer::builder().rule(KeysRule).build().unwrap();
        let result = lenient.analyze_files(&[path.clone()]).unwrap();
        assert_eq!(result.documents_checked, 0);

        let strict = Analyzer::builder()
            .rule(KeysRule)
            .fail_on_parse_error(true)
            .build()
            .unwrap();
        assert!(matches!(
            strict.analyze_files(&[path]),
            Err(AnalyzerError::Document(DocumentError::Json { .. }))
        ));
    }

    #[test]
    fn discover_expands_globs_and_applies_excludes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("generated")).unwrap();
        for name in ["b.yaml", "a.yaml", "generated/c.yaml"] {
            std::fs::write(dir.path().join(name), "openapi: 3.0.0\n").unwrap();
        }

        let analyzer = Analyzer::builder()
            .exclude("**/generated/**")
            .build()
            .unwrap();
        let root = dir.path().display();
        let files = analyzer
            .discover(&[format!("{root}/**/*.yaml"), format!("{root}/a.yaml")])
            .unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.yaml"), dir.path().join("b.yaml")]
        );
    }

    #[test]
    fn invalid_include_pattern_fails_discovery() {
        let analyzer = Analyzer::builder().build().unwrap();
        assert!(matches!(
            analyzer.discover(&["specs/[.yaml"]),
            Err(AnalyzerError::Glob(_))
        ));
    }

    #[test]
    fn unreadable_glob_matches_convert_to_analyzer_error() {
        fn converts<E: Into<AnalyzerError>>() {}
        converts::<glob::GlobError>();
        converts::<glob::PatternError>();
    }

    #[test]
    fn invalid_exclude_pattern_fails_build() {
        assert!(matches!(
            Analyzer::builder().exclude("[").build(),
            Err(AnalyzerError::Glob(_))
        ));
    }
}
