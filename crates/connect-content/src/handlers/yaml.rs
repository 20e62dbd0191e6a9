//! YAML format parser using serde_yaml

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::{Format, FormatParser};

/// Parser for YAML documents.
///
/// [`FormatParser::parse`] accepts single-document sources only; use
/// [`YamlParser::parse_stream`] for `---` separated streams. Anchors and
/// aliases are resolved by serde_yaml before conversion.
///
/// Scalars resolve under YAML 1.2, so `yes`, `no`, `on` and `off` stay strings
/// rather than becoming booleans as YAML 1.1 loaders would have them.
#[derive(Debug, Default)]
pub struct YamlParser;

impl YamlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every document of a `---` separated stream, in order.
    ///
    /// Fails on the first document that does not parse.
    pub fn parse_stream(&self, source: &str) -> Result<Vec<Value>> {
        serde_yaml::Deserializer::from_str(source)
            .map(|document| {
                YamlValue::deserialize(document)
                    .map(|value| yaml_to_json(&value))
                    .map_err(|e| Error::parse(Format::Yaml, e.to_string()))
            })
            .collect()
    }
}

impl FormatParser for YamlParser {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, source: &str) -> Result<Value> {
        let yaml_value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse(Format::Yaml, e.to_string()))?;
        Ok(yaml_to_json(&yaml_value))
    }
}

/// Convert a YAML value into the JSON value model.
///
/// Non-finite floats become null. Scalar mapping keys are stringified; keys
/// that are themselves collections have no JSON equivalent and are dropped.
pub fn yaml_to_json(value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let mut object = Map::new();
            for (key, v) in map {
                if let Some(key) = key_to_string(key) {
                    object.insert(key, yaml_to_json(v));
                }
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn key_to_string(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Null => Some("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}
