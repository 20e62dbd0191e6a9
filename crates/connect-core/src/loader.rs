//! Directory loader for connector definition files

use std::fs;
use std::path::{Path, PathBuf};

use connect_content::{Format, ParserChain, template};
use tracing::{debug, warn};

use crate::document::SourceDocument;
use crate::error::{Error, Result};
use crate::record::ConnectorCandidate;

/// Switches that change how files are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Replace Helm template syntax with placeholders before parsing
    pub helm_placeholders: bool,
}

/// What happened to a single file
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Parsed and classified; `records` may be zero for an empty sequence
    Loaded { format: Format, records: usize },
    /// Empty or whitespace-only; skipped silently
    Empty,
    /// Parsed, but the shape holds no connectors
    Unrecognized { reason: String },
    /// No parser in the chain accepted the content
    ParseFailed { error: connect_content::Error },
    /// The file could not be read as UTF-8 text
    ReadFailed { message: String },
}

impl FileStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ParseFailed { .. } | Self::ReadFailed { .. })
    }
}

/// Per-file entry in a [`LoadReport`]
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Result of loading a directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Candidates in file order, then sequence order
    pub records: Vec<ConnectorCandidate>,
    /// One entry per regular file visited, in visit order
    pub files: Vec<FileOutcome>,
}

impl LoadReport {
    /// Files that failed to read or parse
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.status.is_failure())
    }

    /// Candidates contributed by one file
    pub fn records_from<'a>(
        &'a self,
        path: &'a Path,
    ) -> impl Iterator<Item = &'a ConnectorCandidate> + 'a {
        self.records.iter().filter(move |r| r.source() == path)
    }
}

/// Reads every regular file in a directory and extracts connector candidates.
///
/// A malformed file never aborts the run; its failure is recorded in the
/// report and loading continues with the next file.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    chain: ParserChain,
    options: LoaderOptions,
}

impl DocumentLoader {
    /// Loader with the default YAML-then-JSON parser chain
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            chain: ParserChain::default(),
            options,
        }
    }

    /// Loader with a custom parser chain
    pub fn with_chain(chain: ParserChain, options: LoaderOptions) -> Self {
        Self { chain, options }
    }

    /// Load every regular file in `dir`, sorted by file name.
    ///
    /// Fails only when `dir` is missing, is not a directory, or cannot be
    /// listed.
    pub fn load(&self, dir: &Path) -> Result<LoadReport> {
        if !dir.exists() {
            return Err(Error::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        if !dir.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut entries = fs::read_dir(dir)
            .map_err(|e| Error::io(dir, e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut report = LoadReport::default();
        for entry in entries {
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            let status = self.load_file(&path, &mut report.records);
            report.files.push(FileOutcome { path, status });
        }

        debug!(
            files = report.files.len(),
            records = report.records.len(),
            "finished loading connector documents"
        );
        Ok(report)
    }

    fn load_file(&self, path: &Path, records: &mut Vec<ConnectorCandidate>) -> FileStatus {
        debug!(path = %path.display(), "processing file");

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read connector file");
                return FileStatus::ReadFailed {
                    message: e.to_string(),
                };
            }
        };

        if text.trim().is_empty() {
            return FileStatus::Empty;
        }

        let parsed = if self.options.helm_placeholders && template::has_template_syntax(&text) {
            self.chain.parse(&template::sanitize(&text))
        } else {
            self.chain.parse(&text)
        };

        let parsed = match parsed {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "skipping file with invalid format");
                return FileStatus::ParseFailed { error };
            }
        };

        match SourceDocument::classify(parsed.value) {
            SourceDocument::Unrecognized { reason } => {
                warn!(path = %path.display(), %reason, "unknown document format");
                FileStatus::Unrecognized { reason }
            }
            document => {
                let values = document.into_values();
                let count = values.len();
                for (index, value) in values.into_iter().enumerate() {
                    let candidate = ConnectorCandidate::new(value, path, index);
                    debug!(name = candidate.display_name(), "found connector");
                    records.push(candidate);
                }
                FileStatus::Loaded {
                    format: parsed.format,
                    records: count,
                }
            }
        }
    }
}

/// Load `dir` with the default loader
pub fn load_connector_documents(dir: &Path) -> Result<LoadReport> {
    DocumentLoader::default().load(dir)
}
