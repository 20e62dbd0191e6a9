//! Connector submission, simulated

use tracing::{debug, warn};

use crate::error::RecordError;
use crate::record::{ConnectorCandidate, ConnectorRecord};

/// REST resource a new or changed connector is submitted to
pub const CONNECTORS_ENDPOINT: &str = "/connectors";

/// HTTP method of the submission
pub const SUBMIT_METHOD: &str = "POST";

/// The request an upsert would issue against a Kafka Connect worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertPlan {
    pub name: String,
    pub connector_class: String,
    pub config_keys: Vec<String>,
    pub method: &'static str,
    pub endpoint: &'static str,
    /// Serialized size of the `{name, config}` body. Never transmitted.
    pub payload_bytes: usize,
}

/// Create-or-update of one connector
pub trait Upserter {
    fn upsert(&self, candidate: &ConnectorCandidate) -> Result<UpsertPlan, RecordError>;
}

/// Validates candidates and reports the request that would be sent, without
/// performing any I/O. Calling it repeatedly with the same candidate yields
/// the same plan.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunUpserter;

impl DryRunUpserter {
    pub fn new() -> Self {
        Self
    }
}

impl Upserter for DryRunUpserter {
    fn upsert(&self, candidate: &ConnectorCandidate) -> Result<UpsertPlan, RecordError> {
        let record = ConnectorRecord::try_from(&candidate.value).inspect_err(|e| {
            warn!(
                source = %candidate.source.display(),
                index = candidate.index,
                error = %e,
                "rejecting connector"
            );
        })?;

        let plan = UpsertPlan {
            connector_class: record.connector_class().to_string(),
            config_keys: record.config_keys(),
            method: SUBMIT_METHOD,
            endpoint: CONNECTORS_ENDPOINT,
            payload_bytes: record.payload_size()?,
            name: record.name,
        };

        debug!(
            name = %plan.name,
            class = %plan.connector_class,
            payload_bytes = plan.payload_bytes,
            "[dry-run] would create/update connector"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dry_run_plan() {
        let candidate = ConnectorCandidate::new(
            json!({"name": "sink-1", "config": {"connector.class": "FileSink"}}),
            "one.json",
            0,
        );
        let plan = DryRunUpserter::new().upsert(&candidate).unwrap();
        assert_eq!(plan.name, "sink-1");
        assert_eq!(plan.connector_class, "FileSink");
        assert_eq!(plan.config_keys, vec!["connector.class"]);
        assert_eq!(plan.method, "POST");
        assert_eq!(plan.endpoint, "/connectors");
        assert_eq!(
            plan.payload_bytes,
            r#"{"name": "sink-1", "config": {"connector.class": "FileSink"}}"#.len()
        );
    }

    #[test]
    fn test_dry_run_is_idempotent() {
        let candidate = ConnectorCandidate::new(json!({"name": "a"}), "a.yaml", 0);
        let upserter = DryRunUpserter::new();
        assert_eq!(upserter.upsert(&candidate), upserter.upsert(&candidate));
    }

    #[test]
    fn test_nameless_candidate_fails() {
        let candidate = ConnectorCandidate::new(json!({"config": {}}), "a.yaml", 2);
        assert_eq!(
            DryRunUpserter::new().upsert(&candidate),
            Err(RecordError::MissingName)
        );
    }
}
