//! Connector loading and dry-run reconciliation
//!
//! The [`DocumentLoader`] turns a directory of connector definition files into
//! an ordered list of [`ConnectorCandidate`]s. [`reconcile`] hands each one to
//! an [`Upserter`], which for this crate is always the side-effect free
//! [`DryRunUpserter`], and tallies the results.

pub mod document;
pub mod error;
pub mod loader;
pub mod payload;
pub mod reconcile;
pub mod record;
pub mod upsert;
pub mod validate;

pub use document::SourceDocument;
pub use error::{Error, RecordError, Result};
pub use loader::{
    DocumentLoader, FileOutcome, FileStatus, LoadReport, LoaderOptions, load_connector_documents,
};
pub use reconcile::{ReconcileSummary, RecordOutcome, reconcile};
pub use record::{ConnectorCandidate, ConnectorRecord};
pub use upsert::{DryRunUpserter, UpsertPlan, Upserter};
pub use validate::{ValidationReport, validate_yaml_tree};

/// Directory read when no other location is given
pub const DEFAULT_CONNECTORS_DIR: &str = "connectors";
