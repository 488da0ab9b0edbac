//! Rule checking that path template parameters are declared consistently.
//!
//! # Checks
//!
//! - `missing_path_parameter` (default: error): every `{name}` in a path
//!   template must be declared `in: path` by each operation, either on the
//!   operation or on the path item. Operations marked `x-sdk-exclude: true`
//!   are not checked. A path item without operations must declare every
//!   template parameter itself.
//! - `duplicate_path_parameter` (default: warning): when several operations
//!   under one path all declare the same parameter definition, it should be
//!   declared once on the path item instead. Definitions are compared by full
//!   structural equality, so any difference (even in `description`) keeps
//!   the operation-level declarations quiet.
//!
//! # Configuration
//!
//! ```toml
//! [rules.path-parameters]
//! missing_path_parameter = "error"
//! duplicate_path_parameter = "warning"   # error|warning|info|hint|off
//! ```

use oas_lint_core::utils::{is_operation_key, is_sdk_excluded, path_template_parameters};
use oas_lint_core::{DocPath, DocumentContext, Level, Rule, Severity, Suggestion, Violation};
use serde_json::{Map, Value};
use tracing::debug;

/// Rule code for path-parameters.
pub const CODE: &str = "OAS002";

/// Rule name for path-parameters.
pub const NAME: &str = "path-parameters";

/// Config key of the missing-declaration check.
pub const MISSING_PATH_PARAMETER: &str = "missing_path_parameter";

/// Config key of the duplicate-declaration check.
pub const DUPLICATE_PATH_PARAMETER: &str = "duplicate_path_parameter";

/// Checks path template parameters against their declarations.
#[derive(Debug, Clone)]
pub struct PathParameters {
    /// Level of the missing-declaration check when not configured.
    pub missing_path_parameter: Level,
    /// Level of the duplicate-declaration check when not configured.
    pub duplicate_path_parameter: Level,
}

impl Default for PathParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl PathParameters {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missing_path_parameter: Level::Error,
            duplicate_path_parameter: Level::Warning,
        }
    }

    /// Sets the default level of the missing-declaration check.
    #[must_use]
    pub fn missing_path_parameter(mut self, level: Level) -> Self {
        self.missing_path_parameter = level;
        self
    }

    /// Sets the default level of the duplicate-declaration check.
    #[must_use]
    pub fn duplicate_path_parameter(mut self, level: Level) -> Self {
        self.duplicate_path_parameter = level;
        self
    }
}

impl Rule for PathParameters {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires path template parameters to be declared once, at the right level"
    }

    fn default_severity(&self) -> Severity {
        self.missing_path_parameter
            .severity()
            .unwrap_or(Severity::Error)
    }

    fn check(&self, ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let missing = ctx
            .check_level(MISSING_PATH_PARAMETER, self.missing_path_parameter)
            .severity();
        let duplicate = ctx
            .check_level(DUPLICATE_PATH_PARAMETER, self.duplicate_path_parameter)
            .severity();
        let checks = [
            (MISSING_PATH_PARAMETER, missing),
            (DUPLICATE_PATH_PARAMETER, duplicate),
        ];
        for (check, level) in checks {
            if level.is_none() {
                debug!("{NAME}: {check} is off");
            }
        }

        let Some(paths) = document.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        for (template, path_item) in paths {
            let parameters = path_template_parameters(template);
            if parameters.is_empty() {
                continue;
            }
            let Some(path_item) = path_item.as_object() else {
                continue;
            };
            let item = PathItem::new(DocPath::root().join(["paths", template.as_str()]), path_item);

            if let Some(severity) = missing {
                item.check_missing(&parameters, severity, &mut violations);
            }
            if let Some(severity) = duplicate {
                item.check_duplicates(&parameters, severity, &mut violations);
            }
        }

        violations
    }
}

/// A path item with its operations in document order.
struct PathItem<'a> {
    path: DocPath,
    node: &'a Map<String, Value>,
    operations: Vec<(&'a str, &'a Value)>,
}

impl<'a> PathItem<'a> {
    fn new(path: DocPath, node: &'a Map<String, Value>) -> Self {
        let operations = node
            .iter()
            .filter(|(key, _)| is_operation_key(key))
            .map(|(key, operation)| (key.as_str(), operation))
            .collect();
        Self {
            path,
            node,
            operations,
        }
    }

    fn check_missing(&self, parameters: &[&str], severity: Severity, out: &mut Vec<Violation>) {
        let shared = declared_path_parameters(self.node.get("parameters"));

        if self.operations.is_empty() {
            for name in parameters.iter().filter(|name| !shared.contains(*name)) {
                out.push(
                    Violation::new(
                        CODE,
                        NAME,
                        severity,
                        self.path.clone(),
                        format!(
                            "Path parameter must be defined at the path or operation level: {name}."
                        ),
                    )
                    .with_suggestion(declare_suggestion(name)),
                );
            }
            return;
        }

        for (method, operation) in &self.operations {
            if is_sdk_excluded(operation) {
                continue;
            }
            let declared = declared_path_parameters(operation.get("parameters"));
            for name in parameters {
                if declared.contains(name) || shared.contains(name) {
                    continue;
                }
                out.push(
                    Violation::new(
                        CODE,
                        NAME,
                        severity,
                        self.path.child(*method),
                        format!("Operation must include a path parameter with name: {name}."),
                    )
                    .with_suggestion(declare_suggestion(name)),
                );
            }
        }
    }

    fn check_duplicates(&self, parameters: &[&str], severity: Severity, out: &mut Vec<Violation>) {
        if self.operations.len() < 2 {
            return;
        }

        for name in parameters {
            let mut definitions: Vec<&Value> = Vec::new();
            for (_, operation) in &self.operations {
                for parameter in operation_parameters(operation) {
                    if parameter_name(parameter) == Some(*name)
                        && !definitions.contains(&parameter)
                    {
                        definitions.push(parameter);
                    }
                }
            }
            if definitions.len() != 1 {
                continue;
            }

            for (method, operation) in &self.operations {
                let position = operation_parameters(operation)
                    .iter()
                    .position(|p| parameter_name(p) == Some(*name));
                // Operations that rely on the path item's declaration are fine.
                let Some(index) = position else {
                    continue;
                };
                out.push(
                    Violation::new(
                        CODE,
                        NAME,
                        severity,
                        self.path.join([*method, "parameters"]).child(index),
                        "Common path parameters should be defined on path object",
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Move parameter `{name}` to the `parameters` of {}",
                        self.path
                    ))),
                );
            }
        }
    }
}

fn operation_parameters(operation: &Value) -> &[Value] {
    operation
        .get("parameters")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn parameter_name(parameter: &Value) -> Option<&str> {
    parameter.get("name").and_then(Value::as_str)
}

/// Names of the parameters declared `in: path` (case-insensitive).
fn declared_path_parameters(parameters: Option<&Value>) -> Vec<&str> {
    parameters
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|p| {
            p.get("in")
                .and_then(Value::as_str)
                .is_some_and(|location| location.eq_ignore_ascii_case("path"))
        })
        .filter_map(parameter_name)
        .collect()
}

fn declare_suggestion(name: &str) -> Suggestion {
    Suggestion::new(format!(
        "Declare `{{ name: {name}, in: path, required: true }}` on the path item or the operation"
    ))
}
