//! Rule requiring every `required` property to be defined.
//!
//! Schemas are checked on their `allOf`-merged view, so a property required
//! in one branch and defined in another is fine. The branches themselves are
//! not checked on their own; they are covered through their parent.

use lazy_static::lazy_static;
use oas_lint_core::utils::{
    check_composite_schema_for_property, merge_all_of_schema_properties, path_matches_regexp,
    schema_roots, validate_subschemas,
};
use oas_lint_core::{DocumentContext, Rule, Severity, Violation};
use regex::Regex;
use serde_json::Value;

/// Rule code for required-property-missing.
pub const CODE: &str = "OAS005";

/// Rule name for required-property-missing.
pub const NAME: &str = "required-property-missing";

lazy_static! {
    static ref ALL_OF_BRANCH: Regex = Regex::new(r"\.allOf\.\d+$")
        .unwrap_or_else(|e| unreachable!("allOf branch pattern is a valid regex: {e}"));
}

/// Requires names listed in `required` to be defined as properties.
#[derive(Debug, Clone)]
pub struct RequiredPropertyMissing {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RequiredPropertyMissing {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredPropertyMissing {
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

impl Rule for RequiredPropertyMissing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires every required property to be defined in the schema"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (path, schema) in schema_roots(document) {
            validate_subschemas(schema, path, |schema, path| {
                if path_matches_regexp(path, &ALL_OF_BRANCH) {
                    return;
                }
                let merged = merge_all_of_schema_properties(schema);
                let required = merged
                    .get("required")
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str);

                for name in required {
                    if check_composite_schema_for_property(&merged, name) {
                        continue;
                    }
                    violations.push(Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        path.clone(),
                        format!("Required property must be defined in the schema: {name}"),
                    ));
                }
            });
        }

        violations
    }
}
