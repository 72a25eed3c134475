//! Raw (pre-resolution) display configuration.
//!
//! Every optional field is a real `Option` so the resolver can tell
//! "explicitly set" apart from "defaulted" — the conflict and override
//! rules depend on that distinction.

use serde::{Deserialize, Serialize};

use super::enums::{ClockSpeed, PanelLayout, ScanPattern, ShiftDriver};
use super::pins::{PinConfig, PinRole};

/// Update interval: either the `never` sentinel or a duration.
///
/// Accepted forms: the string `never`, a bare integer (milliseconds), or
/// a string with a `ms`/`s` suffix (`"500ms"`, `"2s"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "String")]
pub enum UpdateInterval {
    /// No periodic refresh configured
    Never,
    /// Refresh period in milliseconds
    Millis(u32),
}

impl UpdateInterval {
    /// Returns true for the `never` sentinel.
    #[must_use]
    pub const fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Milliseconds, or `None` for `never`.
    #[must_use]
    pub const fn as_millis(&self) -> Option<u32> {
        match self {
            Self::Never => None,
            Self::Millis(ms) => Some(*ms),
        }
    }
}

impl std::fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Millis(ms) => write!(f, "{ms}ms"),
        }
    }
}

impl From<UpdateInterval> for String {
    fn from(interval: UpdateInterval) -> Self {
        interval.to_string()
    }
}

/// Serde helper: the document form of an update interval.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Millis(u32),
    Text(String),
}

impl TryFrom<RawInterval> for UpdateInterval {
    type Error = String;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        match raw {
            RawInterval::Millis(ms) => Ok(Self::Millis(ms)),
            RawInterval::Text(text) => {
                let trimmed = text.trim();
                if trimmed.eq_ignore_ascii_case("never") {
                    return Ok(Self::Never);
                }
                if let Some(ms) = trimmed.strip_suffix("ms") {
                    return ms
                        .trim()
                        .parse::<u32>()
                        .map(Self::Millis)
                        .map_err(|_| format!("invalid update_interval '{text}'"));
                }
                if let Some(secs) = trimmed.strip_suffix('s') {
                    // Seconds convert to millis; reject values that
                    // would overflow instead of wrapping
                    return secs
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .and_then(|s| s.checked_mul(1000))
                        .map(Self::Millis)
                        .ok_or_else(|| format!("invalid update_interval '{text}'"));
                }
                trimmed
                    .parse::<u32>()
                    .map(Self::Millis)
                    .map_err(|_| format!("invalid update_interval '{text}'"))
            }
        }
    }
}

/// One display declaration exactly as it appears in the document,
/// before preset merging, defaulting, or validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDisplayConfig {
    /// Optional identifier, passed through to the emitter
    pub id: Option<String>,
    /// Board preset name (key into the board registry)
    pub board: Option<String>,

    /// Width of a single panel in pixels
    pub panel_width: u32,
    /// Height of a single panel in pixels
    pub panel_height: u32,

    /// Panels per column in the chain (default 1)
    pub layout_rows: Option<u32>,
    /// Panels per row in the chain (default 1)
    pub layout_cols: Option<u32>,
    /// Chain arrangement (default HORIZONTAL)
    pub layout: Option<PanelLayout>,

    pub scan_wiring: Option<ScanPattern>,
    pub shift_driver: Option<ShiftDriver>,

    pub double_buffer: Option<bool>,
    pub auto_clear_enabled: Option<bool>,
    /// 0..=255
    pub brightness: Option<u32>,
    /// 6..=12
    pub bit_depth: Option<u32>,
    /// 40..=200; conflicts with a real update_interval
    pub min_refresh_rate: Option<u32>,
    pub update_interval: Option<UpdateInterval>,

    // RGB data pins
    pub r1_pin: Option<PinConfig>,
    pub g1_pin: Option<PinConfig>,
    pub b1_pin: Option<PinConfig>,
    pub r2_pin: Option<PinConfig>,
    pub g2_pin: Option<PinConfig>,
    pub b2_pin: Option<PinConfig>,

    // Address pins
    pub a_pin: Option<PinConfig>,
    pub b_pin: Option<PinConfig>,
    pub c_pin: Option<PinConfig>,
    pub d_pin: Option<PinConfig>,
    pub e_pin: Option<PinConfig>,

    // Control pins
    pub lat_pin: Option<PinConfig>,
    pub oe_pin: Option<PinConfig>,
    pub clk_pin: Option<PinConfig>,

    pub clock_speed: Option<ClockSpeed>,
    pub latch_blanking: Option<u32>,
    /// Invert the data/clock phase relationship (required true for MBI5124)
    pub clock_phase: Option<bool>,

    /// Drawing lambda source, passed through untouched to the emitter
    pub lambda: Option<String>,
}

impl RawDisplayConfig {
    /// The explicit pin override for a role, if the user supplied one.
    #[must_use]
    pub const fn pin(&self, role: PinRole) -> Option<PinConfig> {
        match role {
            PinRole::R1 => self.r1_pin,
            PinRole::G1 => self.g1_pin,
            PinRole::B1 => self.b1_pin,
            PinRole::R2 => self.r2_pin,
            PinRole::G2 => self.g2_pin,
            PinRole::B2 => self.b2_pin,
            PinRole::A => self.a_pin,
            PinRole::B => self.b_pin,
            PinRole::C => self.c_pin,
            PinRole::D => self.d_pin,
            PinRole::E => self.e_pin,
            PinRole::Lat => self.lat_pin,
            PinRole::Oe => self.oe_pin,
            PinRole::Clk => self.clk_pin,
        }
    }

    /// Schema-level range checks that serde cannot express.
    ///
    /// Returns one message per violated range, each prefixed with the
    /// offending field name. These are rejected before resolution runs.
    #[must_use]
    pub fn schema_errors(&self) -> Vec<String> {
        let mut errs = Vec::new();

        if self.panel_width == 0 {
            errs.push("panel_width: must be a positive integer".to_string());
        }
        if self.panel_height == 0 {
            errs.push("panel_height: must be a positive integer".to_string());
        }
        if self.layout_rows == Some(0) {
            errs.push("layout_rows: must be a positive integer".to_string());
        }
        if self.layout_cols == Some(0) {
            errs.push("layout_cols: must be a positive integer".to_string());
        }
        if let Some(brightness) = self.brightness {
            if brightness > 255 {
                errs.push(format!("brightness: {brightness} is out of range 0-255"));
            }
        }
        if let Some(bit_depth) = self.bit_depth {
            if !(6..=12).contains(&bit_depth) {
                errs.push(format!("bit_depth: {bit_depth} is out of range 6-12"));
            }
        }
        if let Some(rate) = self.min_refresh_rate {
            if !(40..=200).contains(&rate) {
                errs.push(format!("min_refresh_rate: {rate} is out of range 40-200"));
            }
        }

        errs
    }
}
