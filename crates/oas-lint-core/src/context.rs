//! Context types for rule execution.

use crate::config::RuleConfig;
use crate::types::Level;
use std::path::Path;

/// Context provided to rules alongside the document tree.
///
/// Carries where the document came from and the rule's own configuration
/// block, so a rule can be evaluated with nothing but a document and a config.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    /// File the document was loaded from, if any.
    pub source: Option<&'a Path>,
    /// Configuration for the rule being run.
    pub rule_config: &'a RuleConfig,
}

impl<'a> DocumentContext<'a> {
    /// Creates a new document context.
    #[must_use]
    pub fn new(source: Option<&'a Path>, rule_config: &'a RuleConfig) -> Self {
        Self {
            source,
            rule_config,
        }
    }

    /// Resolves the level of a named check, falling back to `default`.
    #[must_use]
    pub fn check_level(&self, check: &str, default: Level) -> Level {
        self.rule_config.check_level(check).unwrap_or(default)
    }
}
