//! Pin resolution: merging a board preset with explicit overrides.
//!
//! An explicit pin in the declaration always beats the preset's value.
//! Without a preset, all 13 required roles must be supplied explicitly;
//! every missing role is reported at once, in role declaration order.

use crate::boards::{BoardPreset, BoardRegistry};
use crate::models::{PinAssignment, PinDescriptor, PinRole, RawDisplayConfig};

use super::report::{ConfigError, ConfigErrorKind, ValidationReport};

/// Resolves the complete pin set for one display declaration.
///
/// On failure the report carries one `MissingPin` error per unmet role
/// (declaration order) or a single `UnknownBoard` error naming the valid
/// presets.
pub fn resolve_pins(
    raw: &RawDisplayConfig,
    registry: &BoardRegistry,
) -> Result<PinAssignment, ValidationReport> {
    let mut report = ValidationReport::new();

    let preset = match raw.board.as_deref() {
        None => None,
        Some(name) => match registry.lookup(name) {
            Some(preset) => Some(preset),
            None => {
                report.add(ConfigError::new(
                    ConfigErrorKind::UnknownBoard,
                    "board",
                    format!(
                        "Unknown board '{}'. Available boards: {}",
                        name,
                        registry.names().join(", ")
                    ),
                ));
                return Err(report);
            }
        },
    };

    let pin = |role: PinRole| effective_pin(raw, preset, role);

    // Batch-report every unmet required role. Still reachable with a
    // preset: a preset may leave a role unwired, and the resolver must
    // not substitute a default for it.
    for role in PinRole::REQUIRED {
        if pin(role).is_none() {
            let message = if preset.is_some() {
                format!(
                    "Required pin '{}' is missing: neither the declaration nor the board preset assigns it.",
                    role.config_key()
                )
            } else {
                format!(
                    "Required pin '{}' is missing. Either specify a board preset or provide all pin mappings manually.",
                    role.config_key()
                )
            };
            report.add(ConfigError::new(
                ConfigErrorKind::MissingPin,
                role.config_key(),
                message,
            ));
        }
    }

    // `build_assignment` is None exactly when a required role was unmet,
    // so the report is never empty on the None arm.
    match build_assignment(&pin) {
        Some(assignment) => report.into_result(assignment),
        None => Err(report),
    }
}

/// Assembles the assignment once every required role has a descriptor.
fn build_assignment(
    pin: &impl Fn(PinRole) -> Option<PinDescriptor>,
) -> Option<PinAssignment> {
    Some(PinAssignment {
        r1: pin(PinRole::R1)?,
        g1: pin(PinRole::G1)?,
        b1: pin(PinRole::B1)?,
        r2: pin(PinRole::R2)?,
        g2: pin(PinRole::G2)?,
        b2: pin(PinRole::B2)?,
        a: pin(PinRole::A)?,
        b: pin(PinRole::B)?,
        c: pin(PinRole::C)?,
        d: pin(PinRole::D)?,
        e: pin(PinRole::E),
        lat: pin(PinRole::Lat)?,
        oe: pin(PinRole::Oe)?,
        clk: pin(PinRole::Clk)?,
    })
}

/// Effective descriptor for one role: explicit override first, preset
/// second, absent otherwise.
///
/// Preset-level strapping suppression only applies to preset-supplied
/// role `a` — it is a property of the board's wiring, not of a pin
/// number the user typed, so explicit overrides never inherit it.
fn effective_pin(
    raw: &RawDisplayConfig,
    preset: Option<&BoardPreset>,
    role: PinRole,
) -> Option<PinDescriptor> {
    if let Some(explicit) = raw.pin(role) {
        return Some(PinDescriptor {
            number: explicit.number(),
            ignore_strapping: explicit.ignore_strapping(),
        });
    }

    let preset = preset?;
    let number = preset.pin(role)?;
    let ignore_strapping = role == PinRole::A && preset.suppresses_strapping(role);

    Some(PinDescriptor {
        number,
        ignore_strapping,
    })
}
