//! Rule requiring operation tags to appear in the global `tags` list.

use oas_lint_core::utils::{walk_document, NodeKind};
use oas_lint_core::{DocumentContext, Rule, Severity, Suggestion, Violation};
use serde_json::Value;

/// Rule code for operation-tag-defined.
pub const CODE: &str = "OAS010";

/// Rule name for operation-tag-defined.
pub const NAME: &str = "operation-tag-defined";

/// Flags operation tags missing from the root `tags` array.
#[derive(Debug, Clone)]
pub struct OperationTagDefined {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OperationTagDefined {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationTagDefined {
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

impl Rule for OperationTagDefined {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires operation tags to be defined in the global tags"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let defined: Vec<&str> = document
            .get("tags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|tag| tag.get("name").and_then(Value::as_str))
            .collect();

        let mut violations = Vec::new();
        walk_document(document, |node, path, kind| {
            if !matches!(kind, NodeKind::Operation(_)) {
                return;
            }
            let tags = node.get("tags").and_then(Value::as_array);
            for (index, tag) in tags.into_iter().flatten().enumerate() {
                let Some(tag) = tag.as_str() else {
                    continue;
                };
                if defined.contains(&tag) {
                    continue;
                }
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        path.child("tags").child(index),
                        "Operation tags should be defined in global tags.",
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Add `{{ name: {tag} }}` to the root tags array"
                    ))),
                );
            }
        });

        violations
    }
}
