//! Connector candidates and validated connector records

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::value_kind;
use crate::error::RecordError;
use crate::payload;

/// Key inside `config` naming the connector implementation
pub const CONNECTOR_CLASS_KEY: &str = "connector.class";

/// Class reported when `config` does not name one
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Label used in reports for candidates without a usable name
pub const UNNAMED: &str = "unnamed";

/// One connector definition as extracted from a file, before validation.
///
/// The value is kept exactly as parsed; elements of a `connectors` sequence
/// are not type-checked at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorCandidate {
    pub value: Value,
    /// File the candidate was read from
    pub source: PathBuf,
    /// Position within the file, 0 for single-connector files
    pub index: usize,
}

impl ConnectorCandidate {
    pub fn new(value: Value, source: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            value,
            source: source.into(),
            index,
        }
    }

    /// Best-effort name for reporting
    pub fn display_name(&self) -> &str {
        self.value
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNNAMED)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// A validated connector: the payload a Kafka Connect worker would receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorRecord {
    pub name: String,
    pub config: Map<String, Value>,
}

impl ConnectorRecord {
    /// The `connector.class` entry, or [`UNKNOWN_CLASS`]
    pub fn connector_class(&self) -> &str {
        self.config
            .get(CONNECTOR_CLASS_KEY)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_CLASS)
    }

    pub fn config_keys(&self) -> Vec<String> {
        self.config.keys().cloned().collect()
    }

    /// Size in bytes of the submission body, as encoded by [`crate::payload`]
    pub fn payload_size(&self) -> Result<usize, RecordError> {
        payload::to_vec(self)
            .map(|body| body.len())
            .map_err(|e| RecordError::Payload {
                name: self.name.clone(),
                message: e.to_string(),
            })
    }
}

impl TryFrom<&Value> for ConnectorRecord {
    type Error = RecordError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAMapping {
                found: value_kind(value),
            });
        };

        let name = match map.get("name") {
            None | Some(Value::Null) => return Err(RecordError::MissingName),
            Some(Value::String(name)) if name.is_empty() => return Err(RecordError::MissingName),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(RecordError::InvalidName {
                    found: value_kind(other),
                });
            }
        };

        let config = match map.get("config") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(config)) => config.clone(),
            Some(other) => {
                return Err(RecordError::InvalidConfig {
                    name,
                    found: value_kind(other),
                });
            }
        };

        Ok(Self { name, config })
    }
}
