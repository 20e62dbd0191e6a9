//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use connect_core::validate_yaml_tree;

use crate::error::{CliError, Result};

/// Run the validate command
///
/// Prints each validated file; failures go to stderr and make the command
/// exit non-zero.
pub fn run_validate(root: &Path) -> Result<()> {
    let report = validate_yaml_tree(root)?;

    for path in &report.validated {
        println!("Validated {}", path.display());
    }

    if report.is_valid() {
        println!("{}", "All YAML files are valid.".green());
        return Ok(());
    }

    for (path, message) in &report.failures {
        eprintln!("{}: {}", path.display().to_string().red(), message);
    }

    Err(CliError::user(format!(
        "{} YAML file(s) failed validation",
        report.failures.len()
    )))
}
