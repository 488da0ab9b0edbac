//! # oas-lint-rules
//!
//! Built-in lint rules for oas-lint.
//!
//! Every rule follows the same shape: walk the document, classify where each
//! node sits, inspect the nodes that matter and report a violation whose path
//! pinpoints the offending node.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | OAS001 | `inline-response-schema` | Response schemas should be a `$ref` to a named schema |
//! | OAS002 | `path-parameters` | Path parameters declared per operation, hoisted when identical |
//! | OAS003 | `path-segment-case-convention` | Path segments are lower snake case |
//! | OAS004 | `property-case-convention` | Schema property names are lower snake case |
//! | OAS005 | `required-property-missing` | Required properties are defined |
//! | OAS006 | `string-boundary` | String schemas define `maxLength` |
//! | OAS007 | `error-response-schema` | 4xx/5xx response schemas define `errors` |
//! | OAS008 | `operation-tags` | Operations have tags |
//! | OAS009 | `openapi-tags` | The document declares global tags |
//! | OAS010 | `operation-tag-defined` | Operation tags are declared globally |
//! | OAS011 | `no-script-tags-in-markdown` | Descriptions contain no `<script>` tags |
//!
//! ## Usage
//!
//! ```ignore
//! use oas_lint_core::{Analyzer, Document};
//! use oas_lint_rules::{InlineResponseSchema, PathParameters};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(InlineResponseSchema::new())
//!     .rule(PathParameters::new())
//!     .build()?;
//! let violations = analyzer.analyze(&Document::from_file("openapi.yaml".as_ref())?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error_response_schema;
pub mod inline_response_schema;
pub mod no_script_tags_in_markdown;
pub mod openapi_tags;
pub mod operation_tag_defined;
pub mod operation_tags;
pub mod path_parameters;
pub mod path_segment_case_convention;
pub mod property_case_convention;
pub mod required_property_missing;
pub mod string_boundary;
mod presets;

pub use error_response_schema::ErrorResponseSchema;
pub use inline_response_schema::InlineResponseSchema;
pub use no_script_tags_in_markdown::NoScriptTagsInMarkdown;
pub use openapi_tags::OpenapiTags;
pub use operation_tag_defined::OperationTagDefined;
pub use operation_tags::OperationTags;
pub use path_parameters::PathParameters;
pub use path_segment_case_convention::PathSegmentCaseConvention;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use property_case_convention::PropertyCaseConvention;
pub use required_property_missing::RequiredPropertyMissing;
pub use string_boundary::StringBoundary;

/// Re-export core types for convenience.
pub use oas_lint_core::{Rule, Severity, Violation};
