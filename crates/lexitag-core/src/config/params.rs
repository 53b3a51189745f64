//! # Hyperparameter Files
//!
//! Loosely-typed JSON parameter sets. A `Params` starts from one file and
//! can absorb the top-level keys of others, so model hyperparameters and
//! dataset-derived fields end up in a single mapping.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LexitagError, Result};

/// A mutable mapping of configuration values read from JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load parameters from a JSON object file.
    ///
    /// # Examples
    /// ```no_run
    /// use lexitag_core::config::Params;
    ///
    /// let params = Params::from_file("experiments/base_model/params.json").unwrap();
    /// assert!(params.get("embedding_dim").is_some());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let values = read_object(path.as_ref())?;
        debug!(path = ?path.as_ref(), keys = values.len(), "loaded params");
        Ok(Self { values })
    }

    /// Merge the top-level keys of another JSON file into this set.
    /// Keys already present are overwritten.
    pub fn update<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let incoming = read_object(path.as_ref())?;
        debug!(path = ?path.as_ref(), keys = incoming.len(), "merging params");
        self.values.extend(incoming);
        Ok(())
    }

    /// Write the parameters back out as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            LexitagError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::write(path, json).map_err(|source| LexitagError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Raw access to a single value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a single value, returning the previous one if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Typed view over the whole mapping.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| LexitagError::Config(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| LexitagError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| LexitagError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(LexitagError::Config(format!(
            "expected a JSON object in {:?}, found {}",
            path,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
