//! Rule presets for common configurations.

use crate::{
    ErrorResponseSchema, InlineResponseSchema, NoScriptTagsInMarkdown, OpenapiTags,
    OperationTagDefined, OperationTags, PathParameters, PathSegmentCaseConvention,
    PropertyCaseConvention, RequiredPropertyMissing, StringBoundary,
};
use oas_lint_core::{RuleBox, Severity};
use std::str::FromStr;

/// Preset configurations for oas-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at its default severity.
    Recommended,
    /// Every rule, with hints and infos raised to warnings.
    Strict,
    /// Only the response-schema and path-parameter rules, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Returns the preset's configuration name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!(
                "unknown preset '{other}' (expected recommended, strict or minimal)"
            )),
        }
    }
}

/// Returns the recommended set of rules: every rule at its default severity.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the strict set of rules.
///
/// Same rules as [`recommended_rules`], but the hint-level tag rules and the
/// info-level rules report warnings.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InlineResponseSchema::new()),
        Box::new(PathParameters::new()),
        Box::new(PathSegmentCaseConvention::new()),
        Box::new(PropertyCaseConvention::new()),
        Box::new(RequiredPropertyMissing::new()),
        Box::new(StringBoundary::new()),
        Box::new(ErrorResponseSchema::new()),
        Box::new(OperationTags::new().severity(Severity::Warning)),
        Box::new(OpenapiTags::new().severity(Severity::Warning)),
        Box::new(OperationTagDefined::new().severity(Severity::Warning)),
        Box::new(NoScriptTagsInMarkdown::new().severity(Severity::Warning)),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `inline-response-schema` (OAS001)
/// - `path-parameters` (OAS002)
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InlineResponseSchema::new()),
        Box::new(PathParameters::new()),
    ]
}

/// Returns all available rules, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InlineResponseSchema::new()),
        Box::new(PathParameters::new()),
        Box::new(PathSegmentCaseConvention::new()),
        Box::new(PropertyCaseConvention::new()),
        Box::new(RequiredPropertyMissing::new()),
        Box::new(StringBoundary::new()),
        Box::new(ErrorResponseSchema::new()),
        Box::new(OperationTags::new()),
        Box::new(OpenapiTags::new()),
        Box::new(OperationTagDefined::new()),
        Box::new(NoScriptTagsInMarkdown::new()),
    ]
}
