//! Predicates over schema-shaped nodes.
//!
//! All functions are total: anything that is not shaped like the construct
//! being tested simply yields `false` (or an empty result).

use crate::types::{DocPath, PathSegment};
use crate::utils::classify::{is_operation_key, NodeKind};
use crate::utils::walk::walk_document;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

/// Schema `type` values treated as primitives.
pub const PRIMITIVE_TYPES: [&str; 4] = ["string", "number", "integer", "boolean"];

/// Keywords whose values are lists of alternative/combined schemas.
const COMBINATORS: [&str; 3] = ["allOf", "oneOf", "anyOf"];

lazy_static! {
    static ref JSON_MIME_TYPE: Regex =
        Regex::new(r"(?i)^(application/json|[\w.\-]+/[\w.\-]+\+json)\s*(;.*)?$")
            .unwrap_or_else(|e| unreachable!("json mime type pattern is a valid regex: {e}"));
}

/// Returns true if the node is a reference (`{"$ref": ...}`).
#[must_use]
pub fn is_ref(node: &Value) -> bool {
    node.get("$ref").is_some()
}

/// Returns true if `schema.type` is one of string, number, integer or boolean.
#[must_use]
pub fn is_primitive_type(schema: &Value) -> bool {
    schema
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| PRIMITIVE_TYPES.contains(&t))
}

/// Returns true if `schema.type` equals `expected`.
#[must_use]
pub fn has_type(schema: &Value, expected: &str) -> bool {
    schema.get("type").and_then(Value::as_str) == Some(expected)
}

/// Returns true for `application/json` and `+json` structured-syntax media types.
///
/// Media type parameters (`; charset=utf-8`) are ignored.
#[must_use]
pub fn is_json_mime_type(media_type: &str) -> bool {
    JSON_MIME_TYPE.is_match(media_type)
}

/// Returns true if `schema` is an array whose `items` is a reference or a primitive.
#[must_use]
pub fn array_items_are_ref_or_primitive(schema: &Value) -> bool {
    has_type(schema, "array")
        && schema
            .get("items")
            .is_some_and(|items| is_ref(items) || is_primitive_type(items))
}

/// Flattens an `allOf` composition into a single schema.
///
/// Branches are merged in order (recursively), followed by the schema's own
/// keywords. `properties` merge key by key with the later definition winning;
/// `required` lists are unioned in order of first appearance; other keywords
/// are last-write-wins. Branch `$ref`s cannot be expanded and are dropped.
/// Schemas without an `allOf` list are returned unchanged.
#[must_use]
pub fn merge_all_of_schema_properties(schema: &Value) -> Value {
    let Some(own) = schema.as_object() else {
        return schema.clone();
    };
    let Some(branches) = own.get("allOf").and_then(Value::as_array) else {
        return schema.clone();
    };

    let mut merged = MergedSchema::default();
    for branch in branches {
        if let Value::Object(branch) = merge_all_of_schema_properties(branch) {
            merged.absorb(&branch);
        }
    }
    merged.absorb(own);
    merged.into_value()
}

#[derive(Default)]
struct MergedSchema {
    keywords: Map<String, Value>,
    properties: Map<String, Value>,
    required: Vec<String>,
    has_properties: bool,
}

impl MergedSchema {
    fn absorb(&mut self, schema: &Map<String, Value>) {
        for (key, value) in schema {
            match key.as_str() {
                "allOf" | "$ref" => {}
                "properties" => {
                    if let Some(properties) = value.as_object() {
                        self.has_properties = true;
                        for (name, property) in properties {
                            self.properties.insert(name.clone(), property.clone());
                        }
                    }
                }
                "required" => {
                    let names = value
                        .as_array()
                        .into_iter()
                        .flatten()
                        .filter_map(Value::as_str);
                    for name in names {
                        if !self.required.iter().any(|r| r == name) {
                            self.required.push(name.to_string());
                        }
                    }
                }
                _ => {
                    self.keywords.insert(key.clone(), value.clone());
                }
            }
        }
    }

    fn into_value(self) -> Value {
        let mut schema = self.keywords;
        if self.has_properties {
            schema.insert("properties".to_string(), Value::Object(self.properties));
        }
        if !self.required.is_empty() {
            let required = self.required.into_iter().map(Value::String).collect();
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }
}

/// Returns true if `has_constraint` holds for `schema` or its composition.
///
/// A composite schema satisfies the constraint when every `oneOf` branch
/// does, every `anyOf` branch does, or at least one `allOf` branch does.
#[must_use]
pub fn check_composite_schema_for_constraint<F>(schema: &Value, has_constraint: &F) -> bool
where
    F: Fn(&Value) -> bool,
{
    if !schema.is_object() {
        return false;
    }
    if has_constraint(schema) {
        return true;
    }

    let holds = |branch: &Value| check_composite_schema_for_constraint(branch, has_constraint);
    let every = |keyword: &str| {
        combinator_branches(schema, keyword)
            .is_some_and(|branches| !branches.is_empty() && branches.iter().all(|b| holds(b)))
    };
    let some = |keyword: &str| {
        combinator_branches(schema, keyword)
            .is_some_and(|branches| branches.iter().any(|b| holds(b)))
    };

    every("oneOf") || every("anyOf") || some("allOf")
}

/// Returns true if `schema`, or its composition, defines property `name`.
///
/// Uses the same combinator semantics as [`check_composite_schema_for_constraint`].
#[must_use]
pub fn check_composite_schema_for_property(schema: &Value, name: &str) -> bool {
    check_composite_schema_for_constraint(schema, &|s: &Value| {
        s.get("properties")
            .and_then(Value::as_object)
            .is_some_and(|properties| properties.contains_key(name))
    })
}

fn combinator_branches<'a>(schema: &'a Value, keyword: &str) -> Option<&'a [Value]> {
    schema.get(keyword).and_then(Value::as_array).map(Vec::as_slice)
}

/// Visits `schema` and every schema nested inside it, in pre-order.
///
/// Nested schemas are found under `properties.*`, `additionalProperties`,
/// `items`, `allOf`/`oneOf`/`anyOf` elements and `not`. References are
/// visited as-is but not followed.
pub fn validate_subschemas<'a, F>(schema: &'a Value, path: DocPath, mut visitor: F)
where
    F: FnMut(&'a Value, &DocPath),
{
    let mut pending = vec![(schema, path)];

    while let Some((schema, path)) = pending.pop() {
        if !schema.is_object() {
            continue;
        }
        visitor(schema, &path);

        let mut children: Vec<(&'a Value, DocPath)> = Vec::new();
        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (name, property) in properties {
                children.push((property, path.join(["properties", name.as_str()])));
            }
        }
        for keyword in ["additionalProperties", "items"] {
            if let Some(child) = schema.get(keyword) {
                children.push((child, path.child(keyword)));
            }
        }
        for keyword in COMBINATORS {
            let branches = combinator_branches(schema, keyword).unwrap_or_default();
            for (index, branch) in branches.iter().enumerate() {
                children.push((branch, path.join([keyword]).child(index)));
            }
        }
        if let Some(not) = schema.get("not") {
            children.push((not, path.child("not")));
        }

        pending.extend(children.into_iter().rev());
    }
}

/// Lists the top-level schemas of a document with their paths.
///
/// Roots are found by following the document structure rather than by path
/// shape: named schemas (`components.schemas.*`, `definitions.*`) and the
/// schemas of parameters, headers, request bodies and responses reached from
/// a path item (webhooks and callbacks included) or from their reusable
/// `components` and OpenAPI 2 counterparts. `$ref` nodes and example values
/// are never entered. Schemas nested inside a root are reached via
/// [`validate_subschemas`].
#[must_use]
pub fn schema_roots(document: &Value) -> Vec<(DocPath, &Value)> {
    let mut collector = RootCollector::default();
    walk_document(document, |node, path, kind| match kind {
        NodeKind::PathItem => collector.path_item(node, path),
        NodeKind::Components => collector.components(node, path),
        NodeKind::Other if path.len() == 1 => collector.swagger_section(node, path),
        _ => {}
    });
    collector.roots
}

type Visit<'a> = fn(&mut RootCollector<'a>, &'a Value, DocPath);

#[derive(Default)]
struct RootCollector<'a> {
    roots: Vec<(DocPath, &'a Value)>,
}

impl<'a> RootCollector<'a> {
    fn push(&mut self, schema: &'a Value, path: DocPath) {
        self.roots.push((path, schema));
    }

    /// Visits every entry of a map of named objects.
    fn named(&mut self, entries: &'a Value, path: &DocPath, visit: Visit<'a>) {
        for (name, entry) in entries.as_object().into_iter().flatten() {
            visit(self, entry, path.child(name.as_str()));
        }
    }

    fn path_item(&mut self, item: &'a Value, path: &DocPath) {
        for (key, value) in item.as_object().into_iter().flatten() {
            if key == "parameters" {
                self.parameter_list(value, &path.child("parameters"));
            } else if is_operation_key(key) {
                self.operation(value, &path.child(key.as_str()));
            }
        }
    }

    fn operation(&mut self, operation: &'a Value, path: &DocPath) {
        for (key, value) in operation.as_object().into_iter().flatten() {
            let path = path.child(key.as_str());
            match key.as_str() {
                "parameters" => self.parameter_list(value, &path),
                "requestBody" => self.media_types(value, &path),
                "responses" => self.named(value, &path, Self::response),
                _ => {}
            }
        }
    }

    fn components(&mut self, components: &'a Value, path: &DocPath) {
        for (section, entries) in components.as_object().into_iter().flatten() {
            let path = path.child(section.as_str());
            match section.as_str() {
                "schemas" => self.named(entries, &path, Self::push),
                "parameters" | "headers" => self.named(entries, &path, Self::parameter),
                "requestBodies" => self.named(entries, &path, Self::request_body),
                "responses" => self.named(entries, &path, Self::response),
                _ => {}
            }
        }
    }

    /// Top-level OpenAPI 2 sections.
    fn swagger_section(&mut self, section: &'a Value, path: &DocPath) {
        match path.last().and_then(PathSegment::as_key) {
            Some("definitions") => self.named(section, path, Self::push),
            Some("parameters") => self.named(section, path, Self::parameter),
            Some("responses") => self.named(section, path, Self::response),
            _ => {}
        }
    }

    fn parameter_list(&mut self, parameters: &'a Value, path: &DocPath) {
        for (index, parameter) in parameters.as_array().into_iter().flatten().enumerate() {
            self.parameter(parameter, path.child(index));
        }
    }

    /// Parameter and Header Objects carry a `schema` or a `content` map.
    fn parameter(&mut self, parameter: &'a Value, path: DocPath) {
        if is_ref(parameter) {
            return;
        }
        if let Some(schema) = parameter.get("schema") {
            self.push(schema, path.child("schema"));
        }
        self.media_types(parameter, &path);
    }

    fn request_body(&mut self, body: &'a Value, path: DocPath) {
        self.media_types(body, &path);
    }

    fn response(&mut self, response: &'a Value, path: DocPath) {
        if is_ref(response) {
            return;
        }
        for (key, value) in response.as_object().into_iter().flatten() {
            match key.as_str() {
                "schema" => self.push(value, path.child("schema")),
                "headers" => self.named(value, &path.child("headers"), Self::parameter),
                "content" => self.media_types(response, &path),
                _ => {}
            }
        }
    }

    /// Pushes `content.<media type>.schema` of `owner`.
    fn media_types(&mut self, owner: &'a Value, path: &DocPath) {
        if is_ref(owner) {
            return;
        }
        let Some(content) = owner.get("content").and_then(Value::as_object) else {
            return;
        };
        for (media_type, media_type_object) in content {
            if let Some(schema) = media_type_object.get("schema") {
                self.push(schema, path.join(["content", media_type.as_str(), "schema"]));
            }
        }
    }
}
