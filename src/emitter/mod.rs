//! Driver instantiation code generation.
//!
//! Turns a fully-resolved display configuration into the C++
//! aggregate-initializer block the external HUB75 driver consumes.
//! Field order must match the driver's struct declarations; optional
//! fields the user never set are omitted so the driver's own defaults
//! apply.

use crate::models::{PinDescriptor, ResolvedDisplayConfig};

/// Sentinel the driver uses for an unwired pin role.
const UNUSED_PIN: i16 = -1;

/// Renders the `Hub75Pins` and `Hub75Config` initializers for one
/// resolved display.
#[must_use]
pub fn emit_config(resolved: &ResolvedDisplayConfig) -> String {
    let name = instance_name(resolved);
    let mut output = String::new();

    output.push_str(&emit_pins(resolved, &name));
    output.push('\n');

    output.push_str(&format!("Hub75Config {name}_config{{\n"));
    output.push_str(&format!("    .panel_width = {},\n", resolved.panel_width));
    output.push_str(&format!(
        "    .panel_height = {},\n",
        resolved.panel_height
    ));
    if let Some(scan) = resolved.scan_wiring {
        output.push_str(&format!("    .scan_wiring = ScanPattern::{scan},\n"));
    }
    if resolved.shift_driver_explicit {
        output.push_str(&format!(
            "    .shift_driver = ShiftDriver::{},\n",
            resolved.shift_driver
        ));
    }
    if resolved.layout.rows_explicit {
        output.push_str(&format!("    .layout_rows = {},\n", resolved.layout.rows));
    }
    if resolved.layout.cols_explicit {
        output.push_str(&format!("    .layout_cols = {},\n", resolved.layout.cols));
    }
    if resolved.layout.mode_explicit {
        output.push_str(&format!(
            "    .layout = PanelLayout::{},\n",
            resolved.layout.mode
        ));
    }
    output.push_str(&format!("    .pins = {name}_pins,\n"));
    if let Some(speed) = resolved.clock_speed {
        output.push_str(&format!(
            "    .output_clock_speed = Hub75ClockSpeed::{},\n",
            speed.driver_name()
        ));
    }
    if let Some(bit_depth) = resolved.bit_depth {
        output.push_str(&format!("    .bit_depth = {bit_depth},\n"));
    }
    output.push_str(&format!(
        "    .min_refresh_rate = {},\n",
        resolved.min_refresh_rate
    ));
    if let Some(latch_blanking) = resolved.latch_blanking {
        output.push_str(&format!("    .latch_blanking = {latch_blanking},\n"));
    }
    if let Some(double_buffer) = resolved.double_buffer {
        output.push_str(&format!("    .double_buffer = {double_buffer},\n"));
    }
    if let Some(clock_phase) = resolved.clock_phase {
        output.push_str(&format!("    .clk_phase_inverted = {clock_phase},\n"));
    }
    if let Some(brightness) = resolved.brightness {
        output.push_str(&format!("    .brightness = {brightness},\n"));
    }
    output.push_str("};\n");

    output
}

/// Renders the pin struct. Role `e` is the only one allowed to be
/// unwired and is encoded as -1.
fn emit_pins(resolved: &ResolvedDisplayConfig, name: &str) -> String {
    let pins = &resolved.pins;
    let mut output = String::new();

    output.push_str(&format!("Hub75Pins {name}_pins{{\n"));
    for (role, descriptor) in [
        ("r1", Some(pins.r1)),
        ("g1", Some(pins.g1)),
        ("b1", Some(pins.b1)),
        ("r2", Some(pins.r2)),
        ("g2", Some(pins.g2)),
        ("b2", Some(pins.b2)),
        ("a", Some(pins.a)),
        ("b", Some(pins.b)),
        ("c", Some(pins.c)),
        ("d", Some(pins.d)),
        ("e", pins.e),
        ("lat", Some(pins.lat)),
        ("oe", Some(pins.oe)),
        ("clk", Some(pins.clk)),
    ] {
        output.push_str(&format!("    .{role} = {},\n", pin_number(descriptor)));
    }
    output.push_str("};\n");

    output
}

const fn pin_number(descriptor: Option<PinDescriptor>) -> i16 {
    match descriptor {
        Some(descriptor) => descriptor.number as i16,
        None => UNUSED_PIN,
    }
}

/// C identifier for the display instance, from its id when present.
fn instance_name(resolved: &ResolvedDisplayConfig) -> String {
    match &resolved.id {
        Some(id) => id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
        None => "hub75_display".to_string(),
    }
}
