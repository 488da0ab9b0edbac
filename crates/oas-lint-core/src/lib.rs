//! # oas-lint-core
//!
//! Core framework for linting OpenAPI and Swagger documents.
//!
//! This crate provides the building blocks that lint rules are written with:
//!
//! - [`Document`] for loading JSON or YAML descriptions into a value tree
//! - [`utils::walk_document`] for visiting every node with its [`DocPath`]
//! - [`utils`] classifiers and schema predicates shared by rules
//! - [`Rule`] trait and [`Analyzer`] for running rules and collecting [`Violation`]s
//!
//! ## Example
//!
//! ```ignore
//! use oas_lint_core::{Analyzer, Document};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let document = Document::from_file("openapi.yaml".as_ref())?;
//! for violation in analyzer.analyze(&document) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod document;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::DocumentContext;
pub use document::{Document, DocumentError, DocumentFormat};
pub use rule::{Rule, RuleBox};
pub use types::{
    DocPath, Level, LintResult, PathSegment, Severity, SeverityCounts, Suggestion, UnknownLevel,
    Violation,
};
