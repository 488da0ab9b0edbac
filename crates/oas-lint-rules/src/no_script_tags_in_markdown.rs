//! Rule forbidding `<script>` tags in Markdown descriptions.

use lazy_static::lazy_static;
use oas_lint_core::utils::walk_document;
use oas_lint_core::{DocumentContext, Rule, Severity, Violation};
use regex::Regex;
use serde_json::Value;

/// Rule code for no-script-tags-in-markdown.
pub const CODE: &str = "OAS011";

/// Rule name for no-script-tags-in-markdown.
pub const NAME: &str = "no-script-tags-in-markdown";

lazy_static! {
    static ref SCRIPT_TAG: Regex = Regex::new(r"(?i)<script")
        .unwrap_or_else(|e| unreachable!("script tag pattern is a valid regex: {e}"));
}

/// Flags `description` strings containing `<script>` tags.
#[derive(Debug, Clone)]
pub struct NoScriptTagsInMarkdown {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoScriptTagsInMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl NoScriptTagsInMarkdown {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Info,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoScriptTagsInMarkdown {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids <script> tags in Markdown descriptions"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk_document(document, |node, path, _| {
            let is_description = path.last().and_then(|s| s.as_key()) == Some("description");
            let Some(text) = node.as_str() else {
                return;
            };
            if is_description && SCRIPT_TAG.is_match(text) {
                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    path.clone(),
                    "Markdown descriptions should not contain `<script>` tags.",
                ));
            }
        });

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_lint_core::RuleConfig;
    use serde_json::json;

    #[test]
    fn test_detects_script_tags() {
        let document = json!({
            "info": {"description": "Hello <SCRIPT>alert(1)</SCRIPT>"},
            "paths": {"/v1/drinks": {"get": {"description": "Lists drinks"}}},
            "components": {"schemas": {"Drink": {
                "properties": {"description": {"type": "string"}}
            }}}
        });
        let config = RuleConfig::default();
        let violations =
            NoScriptTagsInMarkdown::new().check(&DocumentContext::new(None, &config), &document);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "info.description");
        assert_eq!(violations[0].severity, Severity::Info);
    }
}
