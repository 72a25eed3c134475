//! Board preset registry for HUB75 controller boards.
//!
//! Each preset maps the 14 logical pin roles to the GPIO numbers a
//! specific board wires to its HUB75 connector. The table is embedded in
//! the binary at compile time and loaded once at startup; it is
//! read-only for the life of the process. New boards are added by
//! extending `boards.json`, never by touching the resolver.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::PinRole;

/// Pin table of one board preset. Every role is optional at the table
/// level; a preset that leaves a required role unwired surfaces as a
/// missing-pin error during resolution, not as a load failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardPins {
    pub r1: Option<u8>,
    pub g1: Option<u8>,
    pub b1: Option<u8>,
    pub r2: Option<u8>,
    pub g2: Option<u8>,
    pub b2: Option<u8>,
    pub a: Option<u8>,
    pub b: Option<u8>,
    pub c: Option<u8>,
    pub d: Option<u8>,
    pub e: Option<u8>,
    pub lat: Option<u8>,
    pub oe: Option<u8>,
    pub clk: Option<u8>,
}

/// Named, immutable pin-mapping preset for a specific board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPreset {
    /// Identifier, stored lower-cased, unique within the registry
    pub name: String,
    /// Human-readable board name
    #[serde(default)]
    pub description: String,
    /// Pin roles this board wires
    pub pins: BoardPins,
    /// Roles whose GPIO doubles as a boot-strapping pin on this board;
    /// the strapping warning is suppressed when the preset supplies them
    #[serde(default)]
    pub ignore_strapping_pins: Vec<String>,
}

impl BoardPreset {
    /// GPIO number this preset assigns to a role, if any.
    #[must_use]
    pub const fn pin(&self, role: PinRole) -> Option<u8> {
        match role {
            PinRole::R1 => self.pins.r1,
            PinRole::G1 => self.pins.g1,
            PinRole::B1 => self.pins.b1,
            PinRole::R2 => self.pins.r2,
            PinRole::G2 => self.pins.g2,
            PinRole::B2 => self.pins.b2,
            PinRole::A => self.pins.a,
            PinRole::B => self.pins.b,
            PinRole::C => self.pins.c,
            PinRole::D => self.pins.d,
            PinRole::E => self.pins.e,
            PinRole::Lat => self.pins.lat,
            PinRole::Oe => self.pins.oe,
            PinRole::Clk => self.pins.clk,
        }
    }

    /// Whether the strapping warning is suppressed for a role.
    #[must_use]
    pub fn suppresses_strapping(&self, role: PinRole) -> bool {
        self.ignore_strapping_pins
            .iter()
            .any(|name| name == role.as_str())
    }
}

/// Table schema of the embedded boards.json.
#[derive(Debug, Deserialize)]
struct BoardTable {
    #[allow(dead_code)]
    version: String,
    boards: Vec<BoardPreset>,
}

/// Registry of board presets, keyed by lower-cased identifier.
///
/// Populated once from the embedded table before any validation runs
/// and treated as read-only thereafter. Lookup is case-insensitive.
#[derive(Debug, Clone)]
pub struct BoardRegistry {
    boards: BTreeMap<String, BoardPreset>,
}

impl BoardRegistry {
    /// Loads the registry from the embedded board table.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("boards.json"))
            .context("Failed to load embedded boards.json")
    }

    /// Builds a registry from a JSON board table.
    ///
    /// A duplicate identifier in the table is a fatal error: presets are
    /// registered exactly once at startup, so a collision can only be a
    /// packaging bug and must not silently shadow an earlier entry. A
    /// strapping suppression naming an unknown pin role is rejected the
    /// same way.
    pub fn from_json(json_data: &str) -> Result<Self> {
        let table: BoardTable =
            serde_json::from_str(json_data).context("Failed to parse board table")?;

        let mut boards = BTreeMap::new();
        for mut preset in table.boards {
            preset.name = preset.name.to_lowercase();

            for role_name in &preset.ignore_strapping_pins {
                if !PinRole::ALL.iter().any(|role| role.as_str() == role_name) {
                    anyhow::bail!(
                        "Board '{}' suppresses strapping for unknown pin role '{}'",
                        preset.name,
                        role_name
                    );
                }
            }

            if let Some(previous) = boards.insert(preset.name.clone(), preset) {
                anyhow::bail!(
                    "Duplicate board preset '{}' in board table",
                    previous.name
                );
            }
        }

        Ok(Self { boards })
    }

    /// Looks up a preset by name, case-insensitively.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&BoardPreset> {
        self.boards.get(&name.to_lowercase())
    }

    /// All registered presets, keyed by identifier.
    #[must_use]
    pub const fn all(&self) -> &BTreeMap<String, BoardPreset> {
        &self.boards
    }

    /// Sorted list of registered preset names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.boards.keys().map(String::as_str).collect()
    }
}
