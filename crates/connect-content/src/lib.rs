//! Structured content parsing for the Kafka Connect reconciliation simulator
//!
//! Turns raw connector file text into a format-neutral `serde_json::Value`
//! by trying an ordered chain of format parsers, and optionally strips Helm
//! template syntax before parsing.

pub mod error;
pub mod format;
pub mod handlers;
pub mod template;

pub use error::{Error, Result};
pub use format::{Format, FormatParser, Parsed, ParserChain};
pub use handlers::{JsonParser, YamlParser};
