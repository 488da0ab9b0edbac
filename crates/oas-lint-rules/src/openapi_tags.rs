//! Rule asking the document to declare its tags globally.

use oas_lint_core::{DocPath, DocumentContext, Rule, Severity, Violation};
use serde_json::Value;

/// Rule code for openapi-tags.
pub const CODE: &str = "OAS009";

/// Rule name for openapi-tags.
pub const NAME: &str = "openapi-tags";

/// Asks the root object to have a non-empty `tags` array.
#[derive(Debug, Clone)]
pub struct OpenapiTags {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OpenapiTags {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenapiTags {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Hint,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for OpenapiTags {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Asks the OpenAPI object to have a non-empty tags array"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let path = match document.get("tags") {
            None => DocPath::root(),
            Some(tags) if tags.as_array().is_some_and(|t| !t.is_empty()) => return Vec::new(),
            Some(_) => DocPath::root().child("tags"),
        };

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            path,
            "OpenAPI object should have non-empty `tags` array.",
        )]
    }
}
