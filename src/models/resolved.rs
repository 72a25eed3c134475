//! Fully-resolved display configuration handed to the emitter.

use serde::{Deserialize, Serialize};

use super::enums::{ClockSpeed, PanelLayout, ScanPattern, ShiftDriver};
use super::pins::PinAssignment;
use super::raw::UpdateInterval;

/// Multi-panel chain shape after defaulting: rows, cols, arrangement.
///
/// The `*_explicit` flags record which fields the user actually set;
/// the emitter omits defaulted fields so the driver's own defaults
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    /// Panels per column, >= 1
    pub rows: u32,
    /// Panels per row, >= 1
    pub cols: u32,
    /// Chain arrangement
    pub mode: PanelLayout,
    pub rows_explicit: bool,
    pub cols_explicit: bool,
    pub mode_explicit: bool,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            mode: PanelLayout::Horizontal,
            rows_explicit: false,
            cols_explicit: false,
            mode_explicit: false,
        }
    }
}

/// The internally-consistent configuration produced once every
/// validation pass succeeds. Never mutated afterward; the emitter turns
/// it into driver instantiation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDisplayConfig {
    /// Identifier passed through from the declaration
    pub id: Option<String>,
    /// Complete pin set (preset merged with overrides)
    pub pins: PinAssignment,

    /// Width of a single panel in pixels
    pub panel_width: u32,
    /// Height of a single panel in pixels
    pub panel_height: u32,
    /// Chain shape after defaulting
    pub layout: LayoutSpec,

    /// Only emitted when the user set it; the driver default applies
    /// otherwise
    pub scan_wiring: Option<ScanPattern>,
    /// Effective driver family (GENERIC when unset)
    pub shift_driver: ShiftDriver,
    /// Whether shift_driver was explicitly set (the emitter omits
    /// defaulted fields so the driver's own defaults apply)
    pub shift_driver_explicit: bool,

    pub clock_speed: Option<ClockSpeed>,
    pub clock_phase: Option<bool>,
    pub bit_depth: Option<u32>,
    pub brightness: Option<u32>,
    pub latch_blanking: Option<u32>,
    pub double_buffer: Option<bool>,

    /// Derived minimum refresh rate in Hz, always in 40..=200 when
    /// derived from an interval (60 when defaulted)
    pub min_refresh_rate: u32,
    /// Resolved update interval, kept for the host-integration pass
    pub update_interval: Option<UpdateInterval>,
    /// Auto-clear flag as declared, kept for the host-integration pass
    pub auto_clear_enabled: Option<bool>,

    /// Drawing lambda source, passed through untouched
    pub lambda: Option<String>,
}

impl ResolvedDisplayConfig {
    /// Total display width in pixels across the panel chain.
    #[must_use]
    pub const fn total_width(&self) -> u32 {
        self.panel_width * self.layout.cols
    }

    /// Total display height in pixels across the panel chain.
    #[must_use]
    pub const fn total_height(&self) -> u32 {
        self.panel_height * self.layout.rows
    }
}
