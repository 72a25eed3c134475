//! Host-integration validation (phase 2).
//!
//! Runs after the whole configuration document is assembled. When the
//! external rendering engine's domain key is present in the document,
//! the display must leave refresh, clearing, and buffering entirely to
//! that engine; any of them being active would race with it. When the
//! domain is absent the pass is a no-op — a display without the engine
//! is free to use all three.

use crate::models::{ResolvedDisplayConfig, UpdateInterval};

use super::report::{ConfigError, ConfigErrorKind, ValidationReport};

/// Domain key of the external rendering-engine subsystem in the
/// assembled document.
pub const RENDER_ENGINE_DOMAIN: &str = "lvgl";

/// Checks the resolved display against the assembled document tree.
///
/// The tree is an opaque read-only view; only the presence of
/// [`RENDER_ENGINE_DOMAIN`] at the top level matters. All violated
/// checks are collected into one report.
pub fn validate_host_integration(
    resolved: &ResolvedDisplayConfig,
    document: &serde_yml::Value,
) -> Result<(), ValidationReport> {
    if document.get(RENDER_ENGINE_DOMAIN).is_none() {
        return Ok(());
    }

    let mut report = ValidationReport::new();
    let path_prefix = display_path(resolved);

    // The engine drives its own refresh timing
    match resolved.update_interval {
        Some(UpdateInterval::Never) => {}
        _ => {
            report.add(ConfigError::new(
                ConfigErrorKind::HostIntegration,
                format!("{path_prefix}update_interval"),
                format!(
                    "HUB75 display with {RENDER_ENGINE_DOMAIN} must have 'update_interval: never'. \
                     The rendering engine manages its own refresh timing."
                ),
            ));
        }
    }

    // The engine manages screen clearing
    if resolved.auto_clear_enabled != Some(false) {
        report.add(ConfigError::new(
            ConfigErrorKind::HostIntegration,
            format!("{path_prefix}auto_clear_enabled"),
            format!(
                "HUB75 display with {RENDER_ENGINE_DOMAIN} must have 'auto_clear_enabled: false' (got '{}'). \
                 The rendering engine manages screen clearing.",
                flag_text(resolved.auto_clear_enabled)
            ),
        ));
    }

    // The engine uses its own buffering strategy; double_buffer defaults
    // to false when absent
    if resolved.double_buffer.unwrap_or(false) {
        report.add(ConfigError::new(
            ConfigErrorKind::HostIntegration,
            format!("{path_prefix}double_buffer"),
            format!(
                "HUB75 display with {RENDER_ENGINE_DOMAIN} must have 'double_buffer: false'. \
                 The rendering engine uses its own buffering strategy."
            ),
        ));
    }

    report.into_result(())
}

/// Field-path prefix naming the display when it has an id.
fn display_path(resolved: &ResolvedDisplayConfig) -> String {
    match &resolved.id {
        Some(id) => format!("{id}."),
        None => String::new(),
    }
}

fn flag_text(flag: Option<bool>) -> String {
    match flag {
        Some(value) => value.to_string(),
        None => "unset".to_string(),
    }
}
