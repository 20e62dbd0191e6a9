//! Simulate command implementation
//!
//! Loads connector definitions and prints the upserts a deployment job would
//! issue, then a tally of how many records could be processed.

use std::path::Path;

use colored::Colorize;
use connect_core::{
    DocumentLoader, DryRunUpserter, FileStatus, LoadReport, LoaderOptions, ReconcileSummary,
    RecordOutcome, reconcile,
};

use crate::error::Result;

const RULE_WIDTH: usize = 50;
const SUB_RULE_WIDTH: usize = 30;

/// Run the simulate command
///
/// A missing directory is the only fatal error. Parse and validation failures
/// are reported and counted; a partial tally still exits successfully.
pub fn run_simulate(dir: &Path, options: LoaderOptions) -> Result<()> {
    println!("{}", "Kafka Connect Reconciliation Simulation".bold());
    println!("{}", "=".repeat(RULE_WIDTH));

    let report = DocumentLoader::new(options).load(dir)?;

    let shown = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    println!("Loading connectors from: {}", shown.display().to_string().yellow());
    println!();

    print_load_report(&report);

    println!();
    println!(
        "{} Found {} connectors",
        "Summary:".bold(),
        report.records.len()
    );
    println!("{}", "-".repeat(SUB_RULE_WIDTH));

    let summary = reconcile(&report.records, &DryRunUpserter::new());
    print_outcomes(&summary);
    print_tally(&summary);

    Ok(())
}

fn print_load_report(report: &LoadReport) {
    for file in &report.files {
        println!("Processing file: {}", file.path.display());

        match &file.status {
            FileStatus::Loaded { format, .. } => {
                println!("  {} Loaded {} document", "ok".green(), format);
                for candidate in report.records_from(&file.path) {
                    println!("    {} Found connector: {}", "+".green(), candidate.display_name());
                }
            }
            FileStatus::Empty => {
                println!("  {} Empty file, skipped", "-".dimmed());
            }
            FileStatus::Unrecognized { reason } => {
                println!(
                    "  {} Unknown format in {}: {}",
                    "warning:".yellow().bold(),
                    file.path.display(),
                    reason
                );
            }
            FileStatus::ParseFailed { error } => {
                println!(
                    "  {} Skipping {}: Invalid format - {}",
                    "error:".red().bold(),
                    file.path.display(),
                    error
                );
            }
            FileStatus::ReadFailed { message } => {
                println!(
                    "  {} Skipping {}: {}",
                    "error:".red().bold(),
                    file.path.display(),
                    message
                );
            }
        }
    }
}

fn print_outcomes(summary: &ReconcileSummary) {
    let total = summary.total();
    for (i, outcome) in summary.outcomes.iter().enumerate() {
        println!();
        println!("{}", format!("Processing connector {}/{}:", i + 1, total).bold());
        print_outcome(outcome);
    }
}

fn print_outcome(outcome: &RecordOutcome) {
    match &outcome.result {
        Ok(plan) => {
            println!("  {} Would create/update connector:", "~".yellow());
            println!("     Name: {}", plan.name.cyan());
            println!("     Class: {}", plan.connector_class);
            println!("     Config keys: [{}]", plan.config_keys.join(", "));
            println!("     Would {} to: {}", plan.method, plan.endpoint);
            println!("     Payload size: {} bytes", plan.payload_bytes);
        }
        Err(e) => {
            println!(
                "  {} {} ({} #{})",
                "!".red(),
                e,
                outcome.candidate.source().display(),
                outcome.candidate.index
            );
        }
    }
}

fn print_tally(summary: &ReconcileSummary) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Successfully processed: {} connectors",
        format!("{}/{}", summary.succeeded(), summary.total()).bold()
    );

    if summary.is_complete() {
        println!(
            "{} All connectors would be created successfully!",
            "OK".green().bold()
        );
    } else {
        println!(
            "{} Some connectors had issues",
            "warning:".yellow().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_simulate_basic() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.yaml"), "name: a\n").unwrap();

        let result = run_simulate(temp_dir.path(), LoaderOptions::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_simulate_partial_tally_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("multi.yaml"),
            "connectors: [{name: a}, {}]\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("bad.json"), "{").unwrap();

        let result = run_simulate(temp_dir.path(), LoaderOptions::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_simulate_missing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = run_simulate(&temp_dir.path().join("connectors"), LoaderOptions::default());
        assert!(matches!(
            result,
            Err(crate::error::CliError::Core(
                connect_core::Error::DirectoryNotFound { .. }
            ))
        ));
    }
}
