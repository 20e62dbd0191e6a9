//! Driving every loaded candidate through an upserter

use tracing::info;

use crate::error::RecordError;
use crate::record::ConnectorCandidate;
use crate::upsert::{UpsertPlan, Upserter};

/// Result for one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub candidate: ConnectorCandidate,
    pub result: Result<UpsertPlan, RecordError>,
}

impl RecordOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Tally of a reconciliation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileSummary {
    /// One entry per candidate, in processing order
    pub outcomes: Vec<RecordOutcome>,
}

impl ReconcileSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True when every candidate succeeded, including the empty run
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }
}

/// Pass each candidate once, in order, to `upserter`.
///
/// Record failures are collected, never propagated.
pub fn reconcile(records: &[ConnectorCandidate], upserter: &dyn Upserter) -> ReconcileSummary {
    let outcomes: Vec<_> = records
        .iter()
        .map(|candidate| RecordOutcome {
            candidate: candidate.clone(),
            result: upserter.upsert(candidate),
        })
        .collect();

    let summary = ReconcileSummary { outcomes };
    info!(
        succeeded = summary.succeeded(),
        total = summary.total(),
        "reconciliation simulated"
    );
    summary
}
