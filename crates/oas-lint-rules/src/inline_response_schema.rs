//! Rule requiring response schemas to be references to named schemas.
//!
//! # Rationale
//!
//! Code generators name an operation's return type after the referenced
//! schema. An inline schema forces the generator to invent a name, which is
//! rarely a good one.
//!
//! # Checked locations
//!
//! Every operation's `responses` map (callback operations included) and
//! `components.responses`. Within them, JSON media type schemas must be a
//! `$ref`, a primitive, or an array whose `items` is a `$ref` or a primitive.

use oas_lint_core::utils::{
    array_items_are_ref_or_primitive, is_json_mime_type, is_primitive_type, is_ref,
    walk_document,
};
use oas_lint_core::{DocumentContext, Rule, Severity, Suggestion, Violation};
use serde_json::Value;

/// Rule code for inline-response-schema.
pub const CODE: &str = "OAS001";

/// Rule name for inline-response-schema.
pub const NAME: &str = "inline-response-schema";

const MESSAGE: &str = "Response schemas should be defined as a $ref to a named schema.";

/// Flags JSON response schemas that are defined inline.
#[derive(Debug, Clone)]
pub struct InlineResponseSchema {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InlineResponseSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineResponseSchema {
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

impl Rule for InlineResponseSchema {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires JSON response schemas to be a $ref to a named schema"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk_document(document, |node, path, kind| {
            if !kind.is_responses() || is_ref(node) {
                return;
            }
            let Some(responses) = node.as_object() else {
                return;
            };

            for (status, response) in responses {
                let Some(content) = response.get("content").and_then(Value::as_object) else {
                    continue;
                };
                for (media_type, media_type_object) in content {
                    let Some(schema) = media_type_object.get("schema") else {
                        continue;
                    };
                    if schema.is_null() || !is_json_mime_type(media_type) || is_named(schema) {
                        continue;
                    }
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            self.severity,
                            path.join([status.as_str(), "content", media_type.as_str(), "schema"]),
                            MESSAGE,
                        )
                        .with_suggestion(Suggestion::new(
                            "Move the schema to components.schemas and reference it with $ref",
                        )),
                    );
                }
            }
        });

        violations
    }
}

fn is_named(schema: &Value) -> bool {
    is_ref(schema) || is_primitive_type(schema) || array_items_are_ref_or_primitive(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_lint_core::RuleConfig;
    use serde_json::json;

    fn check_doc(document: &Value) -> Vec<Violation> {
        let config = RuleConfig::default();
        let ctx = DocumentContext::new(None, &config);
        InlineResponseSchema::new().check(&ctx, document)
    }

    fn with_schema(schema: Value) -> Value {
        json!({
            "openapi": "3.0.0",
            "paths": {
                "/v1/drinks": {
                    "get": {
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {"application/json": {"schema": schema}}
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_detects_inline_object_schema() {
        let violations = check_doc(&with_schema(json!({
            "type": "object",
            "properties": {"id": {"type": "string"}}
        })));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message, MESSAGE);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(
            violations[0].path.to_string(),
            "paths./v1/drinks.get.responses.200.content.application/json.schema"
        );
    }

    #[test]
    fn test_allows_ref_schema() {
        let violations =
            check_doc(&with_schema(json!({"$ref": "#/components/schemas/Widget"})));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_allows_array_of_refs() {
        let violations = check_doc(&with_schema(json!({
            "type": "array",
            "items": {"$ref": "#/components/schemas/Widget"}
        })));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_allows_primitives() {
        assert!(check_doc(&with_schema(json!({"type": "string"}))).is_empty());
        assert!(
            check_doc(&with_schema(json!({"type": "array", "items": {"type": "integer"}})))
                .is_empty()
        );
    }

    #[test]
    fn test_detects_array_of_inline_objects() {
        let violations =
            check_doc(&with_schema(json!({"type": "array", "items": {"type": "object"}})));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_ignores_non_json_media_types() {
        let document = json!({
            "paths": {"/v1/drinks": {"get": {"responses": {"200": {
                "content": {"text/csv": {"schema": {"type": "object"}}}
            }}}}}
        });
        assert!(check_doc(&document).is_empty());
    }

    #[test]
    fn test_checks_component_responses() {
        let document = json!({
            "components": {"responses": {"Error": {
                "content": {"application/problem+json": {"schema": {"type": "object"}}}
            }}}
        });
        let violations = check_doc(&document);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path.to_string(),
            "components.responses.Error.content.application/problem+json.schema"
        );
    }

    #[test]
    fn test_checks_callback_responses() {
        let document = json!({
            "paths": {"/x": {"post": {
                "callbacks": {"onEvent": {"{$request.body#/url}": {"post": {
                    "responses": {"200": {
                        "content": {"application/json": {"schema": {"type": "object"}}}
                    }}
                }}}},
                "responses": {"204": {"description": "accepted"}}
            }}}
        });
        let violations = check_doc(&document);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path.to_string(),
            "paths./x.post.callbacks.onEvent.{$request.body#/url}.post.responses.200\
             .content.application/json.schema"
        );
    }

    #[test]
    fn test_ignores_schema_property_named_responses() {
        let document = json!({
            "components": {"schemas": {"Log": {"properties": {"responses": {
                "200": {"content": {"application/json": {"schema": {"type": "object"}}}}
            }}}}}
        });
        assert!(check_doc(&document).is_empty());
    }

    #[test]
    fn test_is_idempotent() {
        let document = with_schema(json!({"type": "object"}));
        assert_eq!(check_doc(&document), check_doc(&document));
    }
}
