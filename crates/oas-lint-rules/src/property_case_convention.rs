//! Rule requiring schema property names to be lower snake case.
//!
//! Every schema of the document is checked, including schemas nested in
//! properties, array items, `additionalProperties` and compositions.

use oas_lint_core::utils::{is_snake_case, schema_roots, validate_subschemas};
use oas_lint_core::{DocumentContext, Rule, Severity, Violation};
use serde_json::Value;

/// Rule code for property-case-convention.
pub const CODE: &str = "OAS004";

/// Rule name for property-case-convention.
pub const NAME: &str = "property-case-convention";

/// Requires schema property names to be snake case.
#[derive(Debug, Clone)]
pub struct PropertyCaseConvention {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PropertyCaseConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyCaseConvention {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PropertyCaseConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires schema property names to be lower snake case"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (path, schema) in schema_roots(document) {
            validate_subschemas(schema, path, |schema, path| {
                let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
                    return;
                };
                for name in properties.keys().filter(|name| !is_snake_case(name)) {
                    violations.push(Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        path.join(["properties", name.as_str()]),
                        format!("Property names must be snake case: {name}"),
                    ));
                }
            });
        }

        violations
    }
}
