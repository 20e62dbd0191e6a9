//! Format identification and the ordered parser chain

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::handlers::{JsonParser, YamlParser};

/// Structured formats a connector file may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// A single parse attempt in a [`ParserChain`].
///
/// Implementations normalize their native value model into `serde_json::Value`
/// so callers never care which format produced it.
pub trait FormatParser: Send + Sync {
    /// The format this parser understands
    fn format(&self) -> Format;

    /// Parse source text into a format-neutral value
    fn parse(&self, source: &str) -> Result<Value>;
}

/// Successful outcome of a [`ParserChain`] run
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// Format of the parser that accepted the content
    pub format: Format,
    pub value: Value,
}

/// Ordered list of parser attempts, short-circuiting on the first success.
///
/// The default chain tries YAML first and falls back to JSON. YAML is the more
/// permissive syntax, so the JSON attempt only matters for documents YAML
/// rejects.
pub struct ParserChain {
    parsers: Vec<Box<dyn FormatParser>>,
}

impl ParserChain {
    /// Create an empty chain. Parsing with it always fails.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Append a parser to the end of the chain
    pub fn with(mut self, parser: impl FormatParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Formats in the order they are attempted
    pub fn formats(&self) -> Vec<Format> {
        self.parsers.iter().map(|p| p.format()).collect()
    }

    /// Run each parser in order until one accepts the content.
    ///
    /// Returns [`Error::NoFormatMatched`] carrying every attempt's error when
    /// all parsers reject it.
    pub fn parse(&self, source: &str) -> Result<Parsed> {
        let mut attempts = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(source) {
                Ok(value) => {
                    return Ok(Parsed {
                        format: parser.format(),
                        value,
                    });
                }
                Err(e) => {
                    debug!(format = %parser.format(), error = %e, "parse attempt failed");
                    attempts.push(e);
                }
            }
        }

        Err(Error::NoFormatMatched { attempts })
    }
}

impl Default for ParserChain {
    fn default() -> Self {
        Self::new().with(YamlParser::new()).with(JsonParser::new())
    }
}

impl fmt::Debug for ParserChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserChain")
            .field("formats", &self.formats())
            .finish()
    }
}
