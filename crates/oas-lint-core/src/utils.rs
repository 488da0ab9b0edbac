//! Utility functions for rule implementations.

pub mod case;
pub mod classify;
pub mod schema;
pub mod walk;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use case::{is_snake_case, is_template_segment};
#[doc(inline)]
pub use classify::{
    is_operation_key, is_response_object, is_sdk_excluded, path_matches_regexp,
    path_template_parameters, HttpMethod, NodeKind, OPERATION_METHODS,
};
#[doc(inline)]
pub use schema::{
    array_items_are_ref_or_primitive, check_composite_schema_for_constraint,
    check_composite_schema_for_property, has_type, is_json_mime_type, is_primitive_type, is_ref,
    merge_all_of_schema_properties, schema_roots, validate_subschemas,
};
#[doc(inline)]
pub use walk::{walk, walk_document};
