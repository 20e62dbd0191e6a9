//! Syntax check for every YAML file under a directory tree
//!
//! Files are sanitized for Helm template syntax first, so chart templates can
//! be checked before rendering.

use std::fs;
use std::path::{Path, PathBuf};

use connect_content::{Format, YamlParser, template};
use tracing::debug;

use crate::error::{Error, Result};

/// Outcome of [`validate_yaml_tree`]. Paths are relative to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub validated: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every `*.yml` / `*.yaml` file below `root`.
///
/// Multi-document streams are accepted; every document must parse.
///
/// Hidden files and directories are skipped. Files are visited depth-first in
/// sorted order.
pub fn validate_yaml_tree(root: &Path) -> Result<ValidationReport> {
    if !root.exists() {
        return Err(Error::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_yaml_files(root, &mut files)?;

    let parser = YamlParser::new();
    let mut report = ValidationReport::default();
    for path in files {
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let result = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                parser
                    .parse_stream(&template::sanitize(&content))
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(_) => {
                debug!(path = %relative.display(), "validated");
                report.validated.push(relative);
            }
            Err(message) => report.failures.push((relative, message)),
        }
    }

    Ok(report)
}

fn collect_yaml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            collect_yaml_files(&path, files)?;
        } else if is_yaml(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Format::from_extension)
        == Some(Format::Yaml)
}
