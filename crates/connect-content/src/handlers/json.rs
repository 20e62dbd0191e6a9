//! JSON format parser

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::{Format, FormatParser};

/// Parser for JSON documents
#[derive(Debug, Default)]
pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl FormatParser for JsonParser {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, source: &str) -> Result<Value> {
        serde_json::from_str(source).map_err(|e| Error::parse(Format::Json, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_parse_object() {
        let parser = JsonParser::new();
        let value = parser
            .parse(r#"{"name": "sink-1", "config": {"tasks.max": 1}}"#)
            .unwrap();
        assert_eq!(value, json!({"name": "sink-1", "config": {"tasks.max": 1}}));
    }

    #[test]
    fn test_json_parse_error() {
        let parser = JsonParser::new();
        let err = parser.parse("name: sink-1").unwrap_err();
        assert!(matches!(err, Error::ParseError { format: Format::Json, .. }));
    }
}
