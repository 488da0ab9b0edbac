//! Path classifiers for locating OpenAPI constructs in a document tree.
//!
//! Classifiers are pure functions of a [`DocPath`] (or a single node). The
//! [`NodeKind`] tag is the same information computed incrementally while
//! walking, so visitors can match on it instead of re-inspecting raw paths.

use crate::types::{DocPath, PathSegment};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Operation keys allowed inside a Path Item Object.
pub const OPERATION_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Vendor extension marking an operation as excluded from SDK generation.
pub const SDK_EXCLUDE_EXTENSION: &str = "x-sdk-exclude";

lazy_static! {
    static ref TEMPLATE_PARAMETER: Regex = Regex::new(r"\{(.*?)\}").unwrap_or_else(|e| {
        unreachable!("template parameter pattern is a valid regex: {e}")
    });
}

/// HTTP method naming an operation within a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    /// `get`
    Get,
    /// `put`
    Put,
    /// `post`
    Post,
    /// `delete`
    Delete,
    /// `options`
    Options,
    /// `head`
    Head,
    /// `patch`
    Patch,
    /// `trace`
    Trace,
}

impl HttpMethod {
    /// Every method, in the order the OpenAPI specification lists them.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];

    /// Returns the lowercase key used in documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }

    /// Maps a path item key to a method. Keys are case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("not an operation method: {s}"))
    }
}

/// What a node is, judged by where it sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The document root.
    Root,
    /// The top-level `paths` map.
    Paths,
    /// A Path Item Object (under `paths`, `webhooks`, `components.pathItems`
    /// or a Callback Object).
    PathItem,
    /// An Operation Object.
    Operation(HttpMethod),
    /// The `responses` map of an operation.
    OperationResponses,
    /// The top-level `components` object.
    Components,
    /// The reusable `components.responses` map.
    ComponentResponses,
    /// The reusable `components.pathItems` map.
    ComponentPathItems,
    /// The top-level `webhooks` map.
    Webhooks,
    /// A map of named Callback Objects (an operation's `callbacks` or
    /// `components.callbacks`).
    Callbacks,
    /// A Callback Object, keyed by runtime expression.
    Callback,
    /// Anything else.
    Other,
}

impl NodeKind {
    /// Returns the kind of the child reached from a node of this kind via `segment`.
    #[must_use]
    pub fn child(self, segment: &PathSegment) -> Self {
        let PathSegment::Key(key) = segment else {
            return Self::Other;
        };
        match (self, key.as_str()) {
            (Self::Root, "paths") => Self::Paths,
            (Self::Root, "components") => Self::Components,
            (Self::Root, "webhooks") => Self::Webhooks,
            (Self::Paths | Self::Webhooks | Self::ComponentPathItems | Self::Callback, _) => {
                Self::PathItem
            }
            (Self::PathItem, key) => {
                HttpMethod::from_key(key).map_or(Self::Other, Self::Operation)
            }
            (Self::Operation(_), "responses") => Self::OperationResponses,
            (Self::Operation(_) | Self::Components, "callbacks") => Self::Callbacks,
            (Self::Callbacks, _) => Self::Callback,
            (Self::Components, "responses") => Self::ComponentResponses,
            (Self::Components, "pathItems") => Self::ComponentPathItems,
            _ => Self::Other,
        }
    }

    /// Computes the kind of the node at `path` from the root down.
    #[must_use]
    pub fn of(path: &DocPath) -> Self {
        path.segments()
            .iter()
            .fold(Self::Root, |kind, segment| kind.child(segment))
    }

    /// True for operation-level and component-level responses maps.
    #[must_use]
    pub fn is_responses(self) -> bool {
        matches!(self, Self::OperationResponses | Self::ComponentResponses)
    }
}

/// Returns true if `key` names an operation inside a path item.
#[must_use]
pub fn is_operation_key(key: &str) -> bool {
    OPERATION_METHODS.contains(&key)
}

/// Returns true if `path` points at a Responses Object.
///
/// The last step must be `responses`, and either the step before it is an
/// operation method, or the path is exactly `components.responses`. A schema
/// property that happens to be called "responses" does not qualify.
#[must_use]
pub fn is_response_object(path: &DocPath) -> bool {
    let key_back = |n| path.nth_back(n).and_then(PathSegment::as_key);

    if key_back(0) != Some("responses") {
        return false;
    }
    let is_operation_response = key_back(1).is_some_and(is_operation_key);
    let is_component_response = path.len() == 2 && key_back(1) == Some("components");

    is_operation_response || is_component_response
}

/// Returns true if the node carries `x-sdk-exclude: true`.
#[must_use]
pub fn is_sdk_excluded(node: &Value) -> bool {
    node.get(SDK_EXCLUDE_EXTENSION).and_then(Value::as_bool) == Some(true)
}

/// Tests the dotted form of `path` (e.g. `paths./v1/x.get`) against `pattern`.
#[must_use]
pub fn path_matches_regexp(path: &DocPath, pattern: &Regex) -> bool {
    pattern.is_match(&path.to_string())
}

/// Extracts the `{name}` placeholders of a path template, in order.
#[must_use]
pub fn path_template_parameters(template: &str) -> Vec<&str> {
    TEMPLATE_PARAMETER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}
