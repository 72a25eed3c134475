//! End-to-end tests for `matrixcfg validate`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the matrixcfg binary
fn matrixcfg_bin() -> &'static str {
    env!("CARGO_BIN_EXE_matrixcfg")
}

#[test]
fn test_validate_valid_config() {
    let (path, _temp_dir) = create_temp_config_file(config_valid_trinity());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid config should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓") || stdout.contains("valid"),
        "Output should indicate success: {stdout}"
    );
}

#[test]
fn test_validate_valid_config_json() {
    let (path, _temp_dir) = create_temp_config_file(config_valid_trinity());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["displays"], 1);
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_missing_pins_reported_together() {
    let (path, _temp_dir) = create_temp_config_file(config_missing_pins());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "Invalid config exits 1");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false);
    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2, "Both missing pins in one batch");
    assert_eq!(errors[0]["kind"], "MissingPin");
    assert_eq!(errors[0]["path"], "r2_pin");
    assert_eq!(errors[1]["path"], "oe_pin");
}

#[test]
fn test_validate_collects_violations_across_validators() {
    let (path, _temp_dir) = create_temp_config_file(config_multiple_violations());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let kinds: Vec<&str> = result["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();

    assert!(kinds.contains(&"DriverTiming"));
    assert!(kinds.contains(&"LayoutShape"));
}

#[test]
fn test_validate_lvgl_conflict() {
    let (path, _temp_dir) = create_temp_config_file(config_lvgl_conflict());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3, "All three integration checks collected");
    for error in errors {
        assert_eq!(error["kind"], "HostIntegration");
    }
}

#[test]
fn test_validate_lvgl_compliant() {
    let (path, _temp_dir) = create_temp_config_file(config_lvgl_compliant());

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_validate_missing_file_exits_io_code() {
    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", "/nonexistent/display.yaml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3), "IO failures exit 3");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_validate_schema_rejection_before_resolution() {
    let (path, _temp_dir) = create_temp_config_file(
        "hub75:\n  panel_width: 64\n  panel_height: 32\n  shift_driver: TURBO9000\n",
    );

    let output = Command::new(matrixcfg_bin())
        .args(["validate", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Unknown enum value is a schema-level rejection, not a validation
    // report
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema errors"));
}
