#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for calculator-cli binary
//!
//! These tests run the built binary and verify command output, configuration
//! layering and exit codes.

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Helper to run the calculator-cli binary with given arguments and env
fn run_calculator(args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calculator-cli"));
    cmd.args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute calculator-cli")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator(&["--help"], &[]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("add"), "Should contain 'add' subcommand");
    assert!(stdout.contains("multiply"), "Should contain 'multiply' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_add_prints_sum() {
    let output = run_calculator(&["add", "5", "3"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8");
}

#[test]
fn test_multiply_prints_product() {
    let output = run_calculator(&["multiply", "4", "3"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "12");
}

#[test]
fn test_negative_operands_are_accepted() {
    let output = run_calculator(&["add", "-5", "3"], &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_of(&output), "-2");
}

#[test]
fn test_overflow_fails_under_default_policy() {
    let output = run_calculator(&["add", "9223372036854775807", "1"], &[]);
    assert!(!output.status.success(), "Overflow should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("integer overflow"),
        "Should report overflow, got: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_overflow_flag_overrides_policy() {
    let output = run_calculator(
        &["--overflow", "saturating", "add", "9223372036854775807", "1"],
        &[],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9223372036854775807");
}

#[test]
fn test_global_flags_accepted_after_subcommand() {
    let output = run_calculator(
        &["add", "9223372036854775807", "1", "--overflow", "wrapping"],
        &[],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "-9223372036854775808");

    let config = write_config("calculator:\n  overflow: saturating\n");
    let path = config.path().to_str().unwrap();
    let output = run_calculator(&["multiply", "-9223372036854775808", "-1", "-c", path], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9223372036854775807");
}

#[test]
fn test_config_file_sets_policy() {
    let config = write_config("calculator:\n  overflow: wrapping\n");
    let path = config.path().to_str().unwrap();

    let output = run_calculator(&["--config", path, "add", "9223372036854775807", "1"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-9223372036854775808");
}

#[test]
fn test_env_overrides_config_file_and_flag_overrides_env() {
    let config = write_config("calculator:\n  overflow: wrapping\n");
    let path = config.path().to_str().unwrap();
    let env = [("APP__CALCULATOR__OVERFLOW", "saturating")];

    let output = run_calculator(&["-c", path, "multiply", "-9223372036854775808", "-1"], &env);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9223372036854775807");

    let output = run_calculator(
        &["-c", path, "--overflow", "checked", "multiply", "-9223372036854775808", "-1"],
        &env,
    );
    assert!(!output.status.success(), "Checked flag should win over env");
}

#[test]
fn test_missing_config_file_is_rejected() {
    let output = run_calculator(&["--config", "/nonexistent/calculator.yaml", "check"], &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn test_invalid_config_is_rejected_by_check() {
    let config = write_config("calculator:\n  overflow: panicking\n");
    let path = config.path().to_str().unwrap();

    let output = run_calculator(&["--config", path, "check"], &[]);
    assert!(!output.status.success(), "Invalid policy should fail check");
}

#[test]
fn test_check_accepts_valid_config() {
    let config = write_config("logging:\n  level: error\n  format: json\n");
    let path = config.path().to_str().unwrap();

    let output = run_calculator(&["--config", path, "check"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "configuration OK");
}

#[test]
fn test_print_config_outputs_effective_yaml() {
    let output = run_calculator(
        &["--print-config", "--overflow", "wrapping"],
        &[("APP__LOGGING__LEVEL", "debug")],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: HashMap<String, serde_json::Value> =
        serde_saphyr::from_str(&stdout).expect("print-config should emit YAML");
    assert_eq!(value["calculator"]["overflow"], "wrapping");
    assert_eq!(value["logging"]["level"], "debug");
    assert_eq!(value["logging"]["format"], "text");
}

#[test]
fn test_logs_go_to_stderr() {
    let output = run_calculator(&["-vv", "multiply", "4", "3"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "12");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("performing multiplication"));
}

#[test]
fn test_missing_command_fails() {
    let output = run_calculator(&[], &[]);
    assert!(!output.status.success());
}
