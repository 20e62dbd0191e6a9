//! Integration tests for the connect-sim binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get a Command for the connect-sim binary with colors disabled
fn sim_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("connect-sim"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Path to the shared connector fixtures
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/connectors")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    sim_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_output() {
    sim_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("connect-sim"));
}

// ============================================================================
// Simulate Tests
// ============================================================================

#[test]
fn test_no_command_reads_default_directory() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("connectors")).unwrap();
    fs::write(
        temp.path().join("connectors/one.json"),
        r#"{"name": "sink-1", "config": {"connector.class": "FileSink"}}"#,
    )
    .unwrap();

    sim_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found connector: sink-1"))
        .stdout(predicate::str::contains("Class: FileSink"))
        .stdout(predicate::str::contains("Would POST to: /connectors"))
        .stdout(predicate::str::contains("Successfully processed: 1/1 connectors"))
        .stdout(predicate::str::contains("All connectors would be created successfully!"));
}

#[test]
fn test_missing_directory_fails() {
    let temp = tempdir().unwrap();

    sim_cmd()
        .current_dir(temp.path())
        .arg("simulate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory connectors not found"));
}

#[test]
fn test_partial_success_warns_but_exits_zero() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("multi.yaml"),
        "connectors: [{name: a}, {name: b}, {}]\n",
    )
    .unwrap();

    sim_cmd()
        .args(["simulate", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Connector missing 'name' field"))
        .stdout(predicate::str::contains("Successfully processed: 2/3 connectors"))
        .stdout(predicate::str::contains("Some connectors had issues"));
}

#[test]
fn test_fixture_directory_report() {
    sim_cmd()
        .args(["simulate", "--dir"])
        .arg(fixtures_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 connectors"))
        .stdout(predicate::str::contains("05-broken.json: Invalid format"))
        .stdout(predicate::str::contains("Unknown format in"))
        .stdout(predicate::str::contains("Successfully processed: 4/5 connectors"));
}

#[test]
fn test_helm_placeholders_flag() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("templated.yaml"),
        "{{- if .Values.enabled }}\nname: {{ .Values.name }}\n{{- end }}\n",
    )
    .unwrap();

    sim_cmd()
        .args(["simulate", "--helm-placeholders", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: PLACEHOLDER"))
        .stdout(predicate::str::contains("Successfully processed: 1/1 connectors"));
}

// ============================================================================
// Validate Tests
// ============================================================================

#[test]
fn test_validate_success() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::write(
        temp.path().join("templates/configmap.yaml"),
        "data:\n  name: {{ .Release.Name }}\n",
    )
    .unwrap();

    sim_cmd()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validated templates"))
        .stdout(predicate::str::contains("All YAML files are valid."));
}

#[test]
fn test_validate_failure_exits_nonzero() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("broken.yml"), "key: [unclosed\n").unwrap();

    sim_cmd()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.yml"))
        .stderr(predicate::str::contains("1 YAML file(s) failed validation"));
}
