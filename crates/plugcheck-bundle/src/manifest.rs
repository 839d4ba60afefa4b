//! Plugin manifest loading and field checks
//!
//! The manifest is `.cursor-plugin/plugin.json`, a single JSON object.

use regex::Regex;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ManifestError;

/// Manifest location relative to the bundle root
pub const MANIFEST_PATH: &str = ".cursor-plugin/plugin.json";

/// Fields every manifest must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "description", "version", "author", "license"];

/// Lowercase alphanumerics, interior dots and hyphens allowed
pub const NAME_PATTERN: &str = r"^[a-z0-9](?:[a-z0-9.-]*[a-z0-9])?$";

/// Parsed plugin manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest under `root`
    pub async fn load(root: &Path) -> Result<Self, ManifestError> {
        let path = root.join(MANIFEST_PATH);
        let relative = PathBuf::from(MANIFEST_PATH);

        // Bytes: bad encoding surfaces as Invalid
        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ManifestError::NotFound { path: relative });
            }
            Err(source) => {
                return Err(ManifestError::Read {
                    path: relative,
                    source,
                })
            }
        };

        Self::from_json(&content).map_err(|reason| ManifestError::Invalid {
            path: relative,
            reason,
        })
    }

    /// Parse manifest JSON, which must be an object
    pub fn from_json(content: impl AsRef<[u8]>) -> Result<Self, String> {
        match serde_json::from_slice::<Value>(content.as_ref()) {
            Ok(Value::Object(fields)) => {
                debug!("Parsed manifest with {} fields", fields.len());
                Ok(Self { fields })
            }
            Ok(other) => Err(format!("expected a JSON object, found {}", json_type(&other))),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Plugin name when it is a string
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Optional logo path when it is a non-empty string
    pub fn logo(&self) -> Option<&str> {
        self.fields
            .get("logo")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Required fields that are absent, null, or blank strings
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.fields.get(*field).is_some_and(is_present))
            .collect()
    }
}

/// Validator for plugin names
#[derive(Debug, Clone)]
pub struct NamePattern {
    re: Regex,
}

impl NamePattern {
    /// Compile [`NAME_PATTERN`]
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(NAME_PATTERN)?,
        })
    }

    /// Whether `name` is an acceptable plugin name
    pub fn is_match(&self, name: &str) -> bool {
        self.re.is_match(name)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
