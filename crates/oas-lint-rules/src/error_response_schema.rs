//! Rule asking error responses to carry an `errors` property.
//!
//! Applies to the inline JSON schemas of an operation's 4xx and 5xx
//! responses. Referenced schemas are not followed.

use oas_lint_core::utils::{
    check_composite_schema_for_property, is_json_mime_type, is_ref, walk_document, NodeKind,
};
use oas_lint_core::{DocumentContext, Rule, Severity, Violation};
use serde_json::Value;

/// Rule code for error-response-schema.
pub const CODE: &str = "OAS007";

/// Rule name for error-response-schema.
pub const NAME: &str = "error-response-schema";

/// Asks 4xx/5xx response schemas to define an `errors` property.
#[derive(Debug, Clone)]
pub struct ErrorResponseSchema {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ErrorResponseSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorResponseSchema {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ErrorResponseSchema {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Asks error response schemas to define an errors property"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk_document(document, |node, path, kind| {
            if kind != NodeKind::OperationResponses {
                return;
            }
            let Some(responses) = node.as_object() else {
                return;
            };

            for (status, response) in responses.iter().filter(|(s, _)| is_error_status(s)) {
                let Some(content) = response.get("content").and_then(Value::as_object) else {
                    continue;
                };
                for (media_type, media_type_object) in content {
                    let Some(schema) = media_type_object.get("schema") else {
                        continue;
                    };
                    if !is_json_mime_type(media_type)
                        || is_ref(schema)
                        || check_composite_schema_for_property(schema, "errors")
                    {
                        continue;
                    }
                    violations.push(Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        path.join([status.as_str(), "content", media_type.as_str(), "schema"]),
                        "Error response schemas should define an `errors` property.",
                    ));
                }
            }
        });

        violations
    }
}

/// Matches `4xx`/`5xx` status codes, including the `4XX` range form.
fn is_error_status(status: &str) -> bool {
    status.len() == 3 && (status.starts_with('4') || status.starts_with('5'))
}
