//! Rule asking every operation to be tagged.

use oas_lint_core::utils::{walk_document, NodeKind};
use oas_lint_core::{DocumentContext, Rule, Severity, Violation};
use serde_json::Value;

/// Rule code for operation-tags.
pub const CODE: &str = "OAS008";

/// Rule name for operation-tags.
pub const NAME: &str = "operation-tags";

/// Asks operations to have a non-empty `tags` array.
#[derive(Debug, Clone)]
pub struct OperationTags {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OperationTags {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationTags {
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

impl Rule for OperationTags {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Asks operations to have a non-empty tags array"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk_document(document, |node, path, kind| {
            if !matches!(kind, NodeKind::Operation(_)) || !node.is_object() {
                return;
            }
            let tagged = node
                .get("tags")
                .and_then(Value::as_array)
                .is_some_and(|tags| !tags.is_empty());
            if !tagged {
                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    path.clone(),
                    "Operation should have non-empty `tags` array.",
                ));
            }
        });

        violations
    }
}
