//! Classification of parsed connector files

use serde_json::Value;

/// Key holding a sequence of connectors in multi-connector files
pub const CONNECTORS_KEY: &str = "connectors";

/// Key identifying a single-connector file
pub const NAME_KEY: &str = "name";

/// The shape of one parsed file, decided once per file.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceDocument {
    /// Mapping with a `connectors` sequence. Elements are kept untyped.
    MultiConnector(Vec<Value>),
    /// Mapping with a `name` key and no `connectors` key
    SingleConnector(Value),
    /// Anything else; contributes no records
    Unrecognized { reason: String },
}

impl SourceDocument {
    /// Classify a parsed value.
    ///
    /// `connectors` takes precedence over `name` when both are present. A null
    /// `connectors` value counts as an empty sequence.
    pub fn classify(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Self::Unrecognized {
                    reason: format!("expected a mapping, found {}", value_kind(&other)),
                };
            }
        };

        if let Some(connectors) = map.remove(CONNECTORS_KEY) {
            return match connectors {
                Value::Array(items) => Self::MultiConnector(items),
                Value::Null => Self::MultiConnector(Vec::new()),
                other => Self::Unrecognized {
                    reason: format!(
                        "'{CONNECTORS_KEY}' must be a sequence, found {}",
                        value_kind(&other)
                    ),
                },
            };
        }

        if map.contains_key(NAME_KEY) {
            Self::SingleConnector(Value::Object(map))
        } else {
            Self::Unrecognized {
                reason: format!("mapping has neither '{CONNECTORS_KEY}' nor '{NAME_KEY}'"),
            }
        }
    }

    /// Values this document contributes, in file order
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::MultiConnector(items) => items,
            Self::SingleConnector(value) => vec![value],
            Self::Unrecognized { .. } => Vec::new(),
        }
    }
}

/// Human-readable name of a value's type
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_multi() {
        let doc = SourceDocument::classify(json!({"connectors": [{"name": "a"}, "b", {}]}));
        assert_eq!(
            doc,
            SourceDocument::MultiConnector(vec![json!({"name": "a"}), json!("b"), json!({})])
        );
    }

    #[test]
    fn test_classify_multi_wins_over_name() {
        let doc = SourceDocument::classify(json!({"name": "outer", "connectors": []}));
        assert_eq!(doc, SourceDocument::MultiConnector(vec![]));
    }

    #[test]
    fn test_classify_null_connectors() {
        let doc = SourceDocument::classify(json!({"connectors": null}));
        assert_eq!(doc.into_values().len(), 0);
    }

    #[test]
    fn test_classify_single() {
        let value = json!({"name": "a", "config": {}});
        assert_eq!(
            SourceDocument::classify(value.clone()),
            SourceDocument::SingleConnector(value)
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        for value in [
            json!([{"name": "a"}]),
            json!("text"),
            json!(null),
            json!({"config": {}}),
            json!({"connectors": {"name": "a"}}),
        ] {
            let doc = SourceDocument::classify(value);
            assert!(matches!(doc, SourceDocument::Unrecognized { .. }), "{doc:?}");
            assert!(doc.into_values().is_empty());
        }
    }
}
