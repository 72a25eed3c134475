//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A minimal valid configuration using a board preset.
pub fn config_valid_trinity() -> &'static str {
    r"
hub75:
  id: test_display
  board: esp32-trinity
  panel_width: 64
  panel_height: 32
"
}

/// A configuration with no board and two required pins missing (r2, oe).
pub fn config_missing_pins() -> &'static str {
    r"
hub75:
  panel_width: 64
  panel_height: 32
  r1_pin: 1
  g1_pin: 2
  b1_pin: 3
  g2_pin: 5
  b2_pin: 6
  a_pin: 7
  b_pin: 8
  c_pin: 9
  d_pin: 10
  lat_pin: 11
  clk_pin: 13
"
}

/// A configuration with several independent violations at once.
pub fn config_multiple_violations() -> &'static str {
    r"
hub75:
  board: esp32-trinity
  panel_width: 64
  panel_height: 32
  layout_rows: 2
  layout_cols: 1
  layout: TOP_LEFT_DOWN_ZIGZAG
  shift_driver: MBI5124
"
}

/// A display that races with the rendering engine declared beside it.
pub fn config_lvgl_conflict() -> &'static str {
    r#"
lvgl:
  displays: [test_display]
hub75:
  id: test_display
  board: esp32-trinity
  panel_width: 64
  panel_height: 32
  update_interval: "16ms"
  auto_clear_enabled: true
  double_buffer: true
"#
}

/// A display correctly configured for the rendering engine.
pub fn config_lvgl_compliant() -> &'static str {
    r"
lvgl:
  displays: [test_display]
hub75:
  id: test_display
  board: esp32-trinity
  panel_width: 64
  panel_height: 32
  update_interval: never
  auto_clear_enabled: false
  min_refresh_rate: 75
"
}

/// Writes a config document to a temp file, returning the path and the
/// guard keeping the directory alive.
pub fn create_temp_config_file(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("display.yaml");
    fs::write(&path, contents).expect("Failed to write temp config");
    (path, temp_dir)
}
