//! Loading API description documents into a JSON value tree.
//!
//! Both JSON and YAML sources end up as a [`serde_json::Value`]. YAML mapping
//! keys that are not strings (`200:` response codes, `true:` and the like)
//! are stringified, so rules only ever see string keys.

use miette::Diagnostic;
use serde_json::{Map, Number, Value};
use std::path::{Path, PathBuf};

const INLINE_ORIGIN: &str = "<inline>";

/// Errors that can occur while loading a document.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum DocumentError {
    /// The document could not be read.
    #[error("Failed to read {origin}: {source}")]
    #[diagnostic(code(oas_lint::document::io))]
    Io {
        /// Where the document came from.
        origin: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Invalid JSON in {origin}: {message}")]
    #[diagnostic(code(oas_lint::document::json), help("check the document with a JSON validator"))]
    Json {
        /// Where the document came from.
        origin: String,
        /// Parser message.
        message: String,
    },

    /// The document is not valid YAML, or uses YAML that has no JSON equivalent.
    #[error("Invalid YAML in {origin}: {message}")]
    #[diagnostic(
        code(oas_lint::document::yaml),
        help("mapping keys must be scalars and the document must be a single YAML document")
    )]
    Yaml {
        /// Where the document came from.
        origin: String,
        /// Parser or conversion message.
        message: String,
    },

    /// The file extension is not one of the supported formats.
    #[error("Unsupported document format for {origin}")]
    #[diagnostic(
        code(oas_lint::document::format),
        help("use a .json, .yaml or .yml file")
    )]
    UnsupportedFormat {
        /// Where the document came from.
        origin: String,
    },
}

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// YAML (`.yaml` or `.yml`).
    Yaml,
}

impl DocumentFormat {
    /// Guesses the format from a file extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// A parsed API description document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    source: Option<PathBuf>,
    root: Value,
}

impl Document {
    /// Reads and parses a document, picking the parser by file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let origin = path.display().to_string();
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat {
                origin: origin.clone(),
            })?;
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            origin: origin.clone(),
            source,
        })?;

        let root = match format {
            DocumentFormat::Json => json_from_str(&content, &origin)?,
            DocumentFormat::Yaml => yaml_from_str(&content, &origin)?,
        };

        Ok(Self {
            source: Some(path.to_path_buf()),
            root,
        })
    }

    /// Parses a JSON document held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid JSON.
    pub fn parse_json(content: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_value(json_from_str(content, INLINE_ORIGIN)?))
    }

    /// Parses a YAML document held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML or cannot be
    /// represented as JSON.
    pub fn parse_yaml(content: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_value(yaml_from_str(content, INLINE_ORIGIN)?))
    }

    /// Wraps an already-built tree.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { source: None, root }
    }

    /// Attaches the file the document came from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the document root.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns the file the document was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn json_from_str(content: &str, origin: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(content).map_err(|e| DocumentError::Json {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

fn yaml_from_str(content: &str, origin: &str) -> Result<Value, DocumentError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| DocumentError::Yaml {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;
    yaml_to_json(yaml).map_err(|message| DocumentError::Yaml {
        origin: origin.to_string(),
        message,
    })
}

/// Converts a YAML tree into a JSON tree, keeping mapping order.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value, String> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err("non-scalar mapping key".to_string())
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        // .nan and .inf have no JSON number form.
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or_else(|| Value::String(n.to_string()), Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn yaml_status_code_keys_become_strings() {
        let doc = Document::parse_yaml(
            r"
paths:
  /drinks:
    get:
      responses:
        200:
          description: ok
        default:
          description: error
",
        )
        .unwrap();
        let responses = &doc.root()["paths"]["/drinks"]["get"]["responses"];
        let keys: Vec<_> = responses.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["200", "default"]);
    }

    #[test]
    fn yaml_and_json_produce_the_same_tree() {
        let yaml = Document::parse_yaml("a: 1\nb: [true, null, 1.5, text]\n").unwrap();
        let json = Document::parse_json(r#"{"a": 1, "b": [true, null, 1.5, "text"]}"#).unwrap();
        assert_eq!(yaml.root(), json.root());
        assert_eq!(json.root(), &json!({"a": 1, "b": [true, null, 1.5, "text"]}));
    }

    #[test]
    fn non_scalar_keys_are_rejected() {
        let err = Document::parse_yaml("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, DocumentError::Yaml { .. }));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Document::parse_json("{\"openapi\": ").unwrap_err();
        assert!(matches!(err, DocumentError::Json { ref origin, .. } if origin == "<inline>"));
    }

    #[test]
    fn from_file_picks_parser_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.YML");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "openapi: 3.0.0\ninfo:\n  title: Drinks").unwrap();

        let doc = Document::from_file(&path).unwrap();
        assert_eq!(doc.source(), Some(path.as_path()));
        assert_eq!(doc.root()["info"]["title"], json!("Drinks"));
    }

    #[test]
    fn from_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.txt");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            Document::from_file(&path),
            Err(DocumentError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            Document::from_file(&path),
            Err(DocumentError::Io { .. })
        ));
    }
}
