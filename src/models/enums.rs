//! Closed enumerations exposed at the configuration boundary.
//!
//! Each of these is a fixed set mirrored from the HUB75 driver's C++
//! enums. An unrecognized value is rejected at the schema level by serde
//! before any cross-field validation runs.

use serde::{Deserialize, Serialize};

/// Shift-register driver chip family on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftDriver {
    /// Plain 74HC595-style shift registers (most panels)
    #[default]
    Generic,
    Fm6126a,
    Icn2038s,
    Fm6124,
    /// MBI5124 latches on the opposite clock edge and needs
    /// `clock_phase: true`
    Mbi5124,
    Dp3246,
}

impl ShiftDriver {
    /// Name as it appears in configuration files and generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "GENERIC",
            Self::Fm6126a => "FM6126A",
            Self::Icn2038s => "ICN2038S",
            Self::Fm6124 => "FM6124",
            Self::Mbi5124 => "MBI5124",
            Self::Dp3246 => "DP3246",
        }
    }
}

impl std::fmt::Display for ShiftDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical arrangement of panels in a multi-panel chain.
///
/// Serpentine variants (`TopLeftDown` etc.) physically rotate alternate
/// rows upside down; `*Zigzag` variants keep every row upright and
/// require a real grid in both dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelLayout {
    /// Single row of panels chained left to right
    #[default]
    Horizontal,
    TopLeftDown,
    TopRightDown,
    BottomLeftUp,
    BottomRightUp,
    TopLeftDownZigzag,
    TopRightDownZigzag,
    BottomLeftUpZigzag,
    BottomRightUpZigzag,
}

impl PanelLayout {
    /// Name as it appears in configuration files and generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "HORIZONTAL",
            Self::TopLeftDown => "TOP_LEFT_DOWN",
            Self::TopRightDown => "TOP_RIGHT_DOWN",
            Self::BottomLeftUp => "BOTTOM_LEFT_UP",
            Self::BottomRightUp => "BOTTOM_RIGHT_UP",
            Self::TopLeftDownZigzag => "TOP_LEFT_DOWN_ZIGZAG",
            Self::TopRightDownZigzag => "TOP_RIGHT_DOWN_ZIGZAG",
            Self::BottomLeftUpZigzag => "BOTTOM_LEFT_UP_ZIGZAG",
            Self::BottomRightUpZigzag => "BOTTOM_RIGHT_UP_ZIGZAG",
        }
    }

    /// Returns true for the zigzag (non-rotating) grid variants.
    #[must_use]
    pub const fn is_zigzag(&self) -> bool {
        matches!(
            self,
            Self::TopLeftDownZigzag
                | Self::TopRightDownZigzag
                | Self::BottomLeftUpZigzag
                | Self::BottomRightUpZigzag
        )
    }

    /// Returns true for the plain horizontal chain.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl std::fmt::Display for PanelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row-scan multiplexing wiring of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPattern {
    #[serde(rename = "STANDARD_TWO_SCAN")]
    StandardTwoScan,
    #[serde(rename = "FOUR_SCAN_16PX_HIGH")]
    FourScan16pxHigh,
    #[serde(rename = "FOUR_SCAN_32PX_HIGH")]
    FourScan32pxHigh,
    #[serde(rename = "FOUR_SCAN_64PX_HIGH")]
    FourScan64pxHigh,
}

impl ScanPattern {
    /// Name as it appears in configuration files and generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StandardTwoScan => "STANDARD_TWO_SCAN",
            Self::FourScan16pxHigh => "FOUR_SCAN_16PX_HIGH",
            Self::FourScan32pxHigh => "FOUR_SCAN_32PX_HIGH",
            Self::FourScan64pxHigh => "FOUR_SCAN_64PX_HIGH",
        }
    }
}

impl std::fmt::Display for ScanPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output clock speed for the panel data bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockSpeed {
    #[serde(rename = "8MHZ")]
    Mhz8,
    #[serde(rename = "10MHZ")]
    Mhz10,
    #[serde(rename = "16MHZ")]
    Mhz16,
    #[serde(rename = "20MHZ")]
    Mhz20,
}

impl ClockSpeed {
    /// Driver-side enum member name used by the emitter.
    #[must_use]
    pub const fn driver_name(&self) -> &'static str {
        match self {
            Self::Mhz8 => "HZ_8M",
            Self::Mhz10 => "HZ_10M",
            Self::Mhz16 => "HZ_16M",
            Self::Mhz20 => "HZ_20M",
        }
    }
}

impl std::fmt::Display for ClockSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mhz8 => write!(f, "8MHZ"),
            Self::Mhz10 => write!(f, "10MHZ"),
            Self::Mhz16 => write!(f, "16MHZ"),
            Self::Mhz20 => write!(f, "20MHZ"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_driver_from_config_value() {
        let driver: ShiftDriver = serde_yml::from_str("MBI5124").unwrap();
        assert_eq!(driver, ShiftDriver::Mbi5124);
        assert_eq!(driver.as_str(), "MBI5124");
    }

    #[test]
    fn test_unknown_driver_rejected() {
        let result: Result<ShiftDriver, _> = serde_yml::from_str("HX8357");
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_zigzag_classification() {
        assert!(PanelLayout::TopLeftDownZigzag.is_zigzag());
        assert!(!PanelLayout::TopLeftDown.is_zigzag());
        assert!(!PanelLayout::Horizontal.is_zigzag());
        assert!(PanelLayout::Horizontal.is_horizontal());
    }

    #[test]
    fn test_layout_parse_all_nine() {
        let names = [
            "HORIZONTAL",
            "TOP_LEFT_DOWN",
            "TOP_RIGHT_DOWN",
            "BOTTOM_LEFT_UP",
            "BOTTOM_RIGHT_UP",
            "TOP_LEFT_DOWN_ZIGZAG",
            "TOP_RIGHT_DOWN_ZIGZAG",
            "BOTTOM_LEFT_UP_ZIGZAG",
            "BOTTOM_RIGHT_UP_ZIGZAG",
        ];
        for name in names {
            let layout: PanelLayout = serde_yml::from_str(name).unwrap();
            assert_eq!(layout.as_str(), name);
        }
    }

    #[test]
    fn test_clock_speed_names() {
        let speed: ClockSpeed = serde_yml::from_str("\"16MHZ\"").unwrap();
        assert_eq!(speed, ClockSpeed::Mhz16);
        assert_eq!(speed.driver_name(), "HZ_16M");
    }
}
