//! Rule requiring path segments to be lower snake case.
//!
//! Template segments (`{drink_id}`) and the empty segments produced by
//! doubled separators are ignored. Keys of the `paths` object that are vendor
//! extensions (`x-...`) are not paths and are skipped.

use oas_lint_core::utils::{is_snake_case, is_template_segment};
use oas_lint_core::{DocPath, DocumentContext, Rule, Severity, Violation};
use serde_json::Value;

/// Rule code for path-segment-case-convention.
pub const CODE: &str = "OAS003";

/// Rule name for path-segment-case-convention.
pub const NAME: &str = "path-segment-case-convention";

/// Requires every literal path segment to be snake case.
#[derive(Debug, Clone)]
pub struct PathSegmentCaseConvention {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PathSegmentCaseConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSegmentCaseConvention {
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

impl Rule for PathSegmentCaseConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires path segments to be lower snake case"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let Some(paths) = document.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        for template in paths.keys().filter(|key| !key.starts_with("x-")) {
            let bad_segments = template
                .split('/')
                .filter(|s| !s.is_empty() && !is_template_segment(s) && !is_snake_case(s));

            for segment in bad_segments {
                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    DocPath::root().join(["paths", template.as_str()]),
                    format!("Path segments must be snake case: {segment}"),
                ));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_lint_core::RuleConfig;
    use serde_json::json;

    fn check_paths(keys: &[&str]) -> Vec<Violation> {
        let paths: serde_json::Map<String, Value> = keys
            .iter()
            .map(|k| ((*k).to_string(), json!({"get": {}})))
            .collect();
        let document = json!({"paths": paths});
        let config = RuleConfig::default();
        PathSegmentCaseConvention::new().check(&DocumentContext::new(None, &config), &document)
    }

    #[test]
    fn test_allows_snake_case_paths() {
        assert!(check_paths(&["/v1/drinks", "/v1/drink_menus/{menuId}"]).is_empty());
    }

    #[test]
    fn test_ignores_empty_segments() {
        assert!(check_paths(&["/v1//drinks//last_seg"]).is_empty());
    }

    #[test]
    fn test_reports_each_camel_case_segment() {
        let violations = check_paths(&["/v1/thisIsATest/drinks/anotherTest"]);
        assert_eq!(violations.len(), 2);
        for v in &violations {
            assert_eq!(v.code, CODE);
            assert!(v.message.starts_with("Path segments must be snake case:"));
            assert_eq!(v.severity, Severity::Error);
            assert_eq!(v.path.to_string(), "paths./v1/thisIsATest/drinks/anotherTest");
        }
        assert_eq!(violations[0].message, "Path segments must be snake case: thisIsATest");
    }

    #[test]
    fn test_reports_segment_with_dot() {
        let violations = check_paths(&["/v1/bad.segment/drinks"]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "paths./v1/bad.segment/drinks");
    }

    #[test]
    fn test_skips_vendor_extensions() {
        assert!(check_paths(&["x-internalPaths"]).is_empty());
    }
}
