//! Configuration resolution and cross-field validation engine.
//!
//! Resolution is a two-phase, pure, synchronous computation:
//!
//! 1. **Phase 1** ([`resolve`]) takes one schema-checked display
//!    declaration plus the read-only board registry and produces a
//!    [`ResolvedDisplayConfig`]: preset pins merged with overrides,
//!    layout invariants enforced, refresh rate derived.
//! 2. **Phase 2** ([`resolve_document`]) runs over the whole assembled
//!    document and applies the host-integration checks that depend on
//!    sibling subsystems being present.
//!
//! Every validator accumulates all of its violations; any collected
//! error fails the entire resolution — no partial configuration is ever
//! handed to the emitter.

pub mod host;
pub mod layout;
pub mod pins;
pub mod refresh;
pub mod report;

pub use host::{validate_host_integration, RENDER_ENGINE_DOMAIN};
pub use layout::validate_cross_fields;
pub use pins::resolve_pins;
pub use refresh::derive_min_refresh_rate;
pub use report::{ConfigError, ConfigErrorKind, ValidationReport};

use crate::boards::BoardRegistry;
use crate::models::{RawDisplayConfig, ResolvedDisplayConfig};
use crate::parser::ConfigDocument;

/// Resolves one display declaration in isolation (phase 1).
///
/// Pin resolution, cross-field validation, and refresh-rate derivation
/// each run to completion so the report carries every problem from all
/// three, not just the first validator that failed.
pub fn resolve(
    raw: &RawDisplayConfig,
    registry: &BoardRegistry,
) -> Result<ResolvedDisplayConfig, ValidationReport> {
    let mut report = ValidationReport::new();

    let pins = match resolve_pins(raw, registry) {
        Ok(pins) => Some(pins),
        Err(errs) => {
            report.extend(errs);
            None
        }
    };

    let layout = match validate_cross_fields(raw) {
        Ok(layout) => Some(layout),
        Err(errs) => {
            report.extend(errs);
            None
        }
    };

    let min_refresh_rate = match derive_min_refresh_rate(raw) {
        Ok(rate) => Some(rate),
        Err(errs) => {
            report.extend(errs);
            None
        }
    };

    match (pins, layout, min_refresh_rate) {
        (Some(pins), Some(layout), Some(min_refresh_rate)) => {
            report.into_result(ResolvedDisplayConfig {
                id: raw.id.clone(),
                pins,
                panel_width: raw.panel_width,
                panel_height: raw.panel_height,
                layout,
                scan_wiring: raw.scan_wiring,
                shift_driver: raw.shift_driver.unwrap_or_default(),
                shift_driver_explicit: raw.shift_driver.is_some(),
                clock_speed: raw.clock_speed,
                clock_phase: raw.clock_phase,
                bit_depth: raw.bit_depth,
                brightness: raw.brightness,
                latch_blanking: raw.latch_blanking,
                double_buffer: raw.double_buffer,
                min_refresh_rate,
                update_interval: raw.update_interval,
                auto_clear_enabled: raw.auto_clear_enabled,
                lambda: raw.lambda.clone(),
            })
        }
        _ => Err(report),
    }
}

/// Resolves every display in a parsed document and applies the
/// host-integration pass (phase 2) against the full tree.
///
/// Each declaration gets an independent phase-1 pass; errors from all
/// declarations and both phases are aggregated into one report.
pub fn resolve_document(
    document: &ConfigDocument,
    registry: &BoardRegistry,
) -> Result<Vec<ResolvedDisplayConfig>, ValidationReport> {
    let mut report = ValidationReport::new();
    let mut resolved = Vec::new();

    for raw in document.displays() {
        match resolve(raw, registry) {
            Ok(config) => resolved.push(config),
            Err(errs) => report.extend(errs),
        }
    }

    for config in &resolved {
        if let Err(errs) = validate_host_integration(config, document.tree()) {
            report.extend(errs);
        }
    }

    report.into_result(resolved)
}
