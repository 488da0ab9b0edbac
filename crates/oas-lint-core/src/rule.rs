//! Rule trait for defining lint rules.

use crate::context::DocumentContext;
use crate::types::{Severity, Violation};
use serde_json::Value;

/// A lint rule evaluated over a whole API description document.
///
/// Rules are stateless: the same document and configuration always yield the
/// same violations, in the same order. Most rules walk the document with
/// [`crate::utils::walk_document`] and inspect the nodes they care about.
///
/// # Example
///
/// ```ignore
/// use oas_lint_core::{DocPath, DocumentContext, Rule, Severity, Violation};
/// use oas_lint_core::utils::walk_document;
/// use serde_json::Value;
///
/// pub struct NoEmptyDescriptions;
///
/// impl Rule for NoEmptyDescriptions {
///     fn name(&self) -> &'static str { "no-empty-descriptions" }
///     fn code(&self) -> &'static str { "OAS100" }
///
///     fn check(&self, _ctx: &DocumentContext, document: &Value) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         walk_document(document, |node, path, _| {
///             if path.last().and_then(|s| s.as_key()) == Some("description")
///                 && node.as_str() == Some("")
///             {
///                 violations.push(Violation::new(
///                     self.code(),
///                     self.name(),
///                     Severity::Warning,
///                     path.clone(),
///                     "Descriptions should not be empty",
///                 ));
///             }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "inline-response-schema").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "OAS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a document and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Source of the document and this rule's configuration
    /// * `document` - The parsed document tree
    ///
    /// # Returns
    ///
    /// A vector of violations; empty when the document is compliant.
    fn check(&self, ctx: &DocumentContext<'_>, document: &Value) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
