//! Rule asking string schemas to declare a `maxLength`.
//!
//! Enumerations and strings whose `format` already bounds them (`binary`,
//! `byte`, `date`, `date-time`) are exempt. A composed schema passes when its
//! composition supplies the bound, e.g. through an `allOf` branch.

use oas_lint_core::utils::{
    check_composite_schema_for_constraint, has_type, schema_roots, validate_subschemas,
};
use oas_lint_core::{DocumentContext, Rule, Severity, Suggestion, Violation};
use serde_json::Value;

/// Rule code for string-boundary.
pub const CODE: &str = "OAS006";

/// Rule name for string-boundary.
pub const NAME: &str = "string-boundary";

const BOUNDED_FORMATS: [&str; 4] = ["binary", "byte", "date", "date-time"];

/// Asks string schemas to define `maxLength`.
#[derive(Debug, Clone)]
pub struct StringBoundary {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for StringBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl StringBoundary {
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

impl Rule for StringBoundary {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Asks string schemas to define a maxLength"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (path, schema) in schema_roots(document) {
            validate_subschemas(schema, path, |schema, path| {
                if !needs_boundary(schema) {
                    return;
                }
                let bounded = check_composite_schema_for_constraint(schema, &|s: &Value| {
                    s.get("maxLength").is_some()
                });
                if !bounded {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            self.severity,
                            path.clone(),
                            "String schemas should define property: maxLength",
                        )
                        .with_suggestion(Suggestion::new(
                            "Add a maxLength, or use an enum or a bounded format",
                        )),
                    );
                }
            });
        }

        violations
    }
}

fn needs_boundary(schema: &Value) -> bool {
    let exempt_format = schema
        .get("format")
        .and_then(Value::as_str)
        .is_some_and(|f| BOUNDED_FORMATS.contains(&f));

    has_type(schema, "string") && schema.get("enum").is_none() && !exempt_format
}
