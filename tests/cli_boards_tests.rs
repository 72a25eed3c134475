//! End-to-end tests for `matrixcfg boards` and `matrixcfg generate`.

use std::process::Command;

mod fixtures;
use fixtures::*;

fn matrixcfg_bin() -> &'static str {
    env!("CARGO_BIN_EXE_matrixcfg")
}

#[test]
fn test_boards_lists_builtin_presets() {
    let output = Command::new(matrixcfg_bin())
        .args(["boards"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("esp32-trinity"));
    assert!(stdout.contains("adafruit-matrix-portal-s3"));
    assert!(stdout.contains("huidu-hd-wf2"));
}

#[test]
fn test_boards_json_shape() {
    let output = Command::new(matrixcfg_bin())
        .args(["boards", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let boards: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let list = boards.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert!(list.iter().any(|b| b["name"] == "esp32-trinity"));
}

#[test]
fn test_boards_show_pin_table() {
    let output = Command::new(matrixcfg_bin())
        .args(["boards", "--name", "ESP32-Trinity"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0), "Lookup is case-insensitive");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("r1: GPIO25"));
    assert!(stdout.contains("clk: GPIO16"));
}

#[test]
fn test_boards_unknown_name_exits_usage_code() {
    let output = Command::new(matrixcfg_bin())
        .args(["boards", "--name", "wemos-d1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Available boards"));
}

#[test]
fn test_generate_emits_cpp_initializers() {
    let (path, _temp_dir) = create_temp_config_file(config_valid_trinity());

    let output = Command::new(matrixcfg_bin())
        .args(["generate", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hub75Pins test_display_pins{"));
    assert!(stdout.contains(".r1 = 25,"));
    assert!(stdout.contains("Hub75Config test_display_config{"));
    assert!(stdout.contains(".min_refresh_rate = 60,"));
}

#[test]
fn test_generate_fails_closed_on_invalid_config() {
    let (path, _temp_dir) = create_temp_config_file(config_missing_pins());

    let output = Command::new(matrixcfg_bin())
        .args(["generate", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stdout.is_empty(),
        "Nothing is emitted when validation fails"
    );
}

#[test]
fn test_generate_writes_output_file() {
    let (path, temp_dir) = create_temp_config_file(config_valid_trinity());
    let out_path = temp_dir.path().join("hub75_config.h");

    let output = Command::new(matrixcfg_bin())
        .args([
            "generate",
            "--config",
            path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let generated = std::fs::read_to_string(&out_path).unwrap();
    assert!(generated.contains("Hub75Config test_display_config{"));
}
