//! Tests for the YAML-then-JSON parser chain

use connect_content::template;
use connect_content::{Error, Format, ParserChain};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::yaml_mapping("name: sink-1\n", Format::Yaml)]
#[case::json_object(r#"{"name": "sink-1"}"#, Format::Yaml)]
#[case::yaml_sequence("- a\n- b\n", Format::Yaml)]
#[case::scalar("just text", Format::Yaml)]
#[case::duplicate_keys(r#"{"name": "a", "name": "b"}"#, Format::Json)]
fn test_chain_accepts_with_first_format(#[case] source: &str, #[case] expected: Format) {
    let parsed = ParserChain::default().parse(source).unwrap();
    assert_eq!(parsed.format, expected);
}

#[rstest]
#[case::unclosed_flow("connectors: [{name: a}")]
#[case::mapping_then_sequence("key: value\n- item\n")]
#[case::tab_indentation("name: a\nconfig:\n\tkey: value\n")]
fn test_chain_rejects_invalid_content(#[case] source: &str) {
    let err = ParserChain::default().parse(source).unwrap_err();
    match err {
        Error::NoFormatMatched { ref attempts } => assert_eq!(attempts.len(), 2),
        other => panic!("expected NoFormatMatched, got {other:?}"),
    }
}

#[test]
fn test_json_fallback_keeps_last_duplicate() {
    let parsed = ParserChain::default()
        .parse(r#"{"name": "a", "name": "b"}"#)
        .unwrap();
    assert_eq!(parsed.format, Format::Json);
    assert_eq!(parsed.value, json!({"name": "b"}));
}

#[test]
fn test_multi_connector_document_value() {
    let source = r#"connectors:
  - name: jdbc-source
    config:
      connector.class: io.confluent.connect.jdbc.JdbcSourceConnector
      tasks.max: 1
  - name: s3-sink
"#;
    let parsed = ParserChain::default().parse(source).unwrap();
    assert_eq!(
        parsed.value,
        json!({
            "connectors": [
                {
                    "name": "jdbc-source",
                    "config": {
                        "connector.class": "io.confluent.connect.jdbc.JdbcSourceConnector",
                        "tasks.max": 1
                    }
                },
                {"name": "s3-sink"}
            ]
        })
    );
}

#[test]
fn test_sanitized_helm_template_parses() {
    let source = r#"{{- if .Values.connectors.enabled }}
name: {{ .Values.connectors.name }}
config:
  connector.class: "{{ .Values.connectors.class }}"
  topics: {{ .Values.topic | quote }}
{{- end }}
"#;
    let sanitized = template::sanitize(source);
    let parsed = ParserChain::default().parse(&sanitized).unwrap();
    assert_eq!(
        parsed.value,
        json!({
            "name": "PLACEHOLDER",
            "config": {"connector.class": "PLACEHOLDER", "topics": "PLACEHOLDER"}
        })
    );
}
