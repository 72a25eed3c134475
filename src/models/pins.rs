//! Pin roles, raw pin configuration, and resolved pin assignments.

use serde::{Deserialize, Serialize};

/// The 14 logical signal roles a HUB75 panel chain requires.
///
/// Declaration order matters: missing-pin errors are reported in this
/// order so a user can fix them top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinRole {
    R1,
    G1,
    B1,
    R2,
    G2,
    B2,
    A,
    B,
    C,
    D,
    E,
    Lat,
    Oe,
    Clk,
}

impl PinRole {
    /// All roles in declaration order.
    pub const ALL: [Self; 14] = [
        Self::R1,
        Self::G1,
        Self::B1,
        Self::R2,
        Self::G2,
        Self::B2,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::Lat,
        Self::Oe,
        Self::Clk,
    ];

    /// The 13 roles every configuration must supply. Role `e` is only
    /// needed for panels with more than 16 scan rows and stays optional.
    pub const REQUIRED: [Self; 13] = [
        Self::R1,
        Self::G1,
        Self::B1,
        Self::R2,
        Self::G2,
        Self::B2,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::Lat,
        Self::Oe,
        Self::Clk,
    ];

    /// Short signal name (`r1`, `lat`, ...), used in board preset tables
    /// and generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::R1 => "r1",
            Self::G1 => "g1",
            Self::B1 => "b1",
            Self::R2 => "r2",
            Self::G2 => "g2",
            Self::B2 => "b2",
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::Lat => "lat",
            Self::Oe => "oe",
            Self::Clk => "clk",
        }
    }

    /// Configuration key for this role (`r1_pin`, `lat_pin`, ...).
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::R1 => "r1_pin",
            Self::G1 => "g1_pin",
            Self::B1 => "b1_pin",
            Self::R2 => "r2_pin",
            Self::G2 => "g2_pin",
            Self::B2 => "b2_pin",
            Self::A => "a_pin",
            Self::B => "b_pin",
            Self::C => "c_pin",
            Self::D => "d_pin",
            Self::E => "e_pin",
            Self::Lat => "lat_pin",
            Self::Oe => "oe_pin",
            Self::Clk => "clk_pin",
        }
    }
}

impl std::fmt::Display for PinRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-supplied pin value: either a bare GPIO number or the full
/// mapping form with pin options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinConfig {
    /// Bare GPIO number, e.g. `r1_pin: 25`
    Number(u8),
    /// Mapping form, e.g. `a_pin: { number: 45, ignore_strapping_warning: true }`
    Full {
        number: u8,
        #[serde(default)]
        ignore_strapping_warning: bool,
    },
}

impl PinConfig {
    /// The GPIO number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Number(n) => *n,
            Self::Full { number, .. } => *number,
        }
    }

    /// Whether strapping-pin warnings are suppressed for this pin.
    #[must_use]
    pub const fn ignore_strapping(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Full {
                ignore_strapping_warning,
                ..
            } => *ignore_strapping_warning,
        }
    }
}

/// A fully-resolved pin: GPIO number plus strapping-warning suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinDescriptor {
    /// GPIO number
    pub number: u8,
    /// Suppress the boot-strapping-pin warning for this assignment
    pub ignore_strapping: bool,
}

impl PinDescriptor {
    /// Creates a descriptor with no strapping suppression.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            ignore_strapping: false,
        }
    }
}

/// Complete pin assignment for one display, produced by the pin resolver.
///
/// Every required role is present; role `e` is `None` for panels that do
/// not need a fifth address line (the emitter encodes that as -1).
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinAssignment {
    pub r1: PinDescriptor,
    pub g1: PinDescriptor,
    pub b1: PinDescriptor,
    pub r2: PinDescriptor,
    pub g2: PinDescriptor,
    pub b2: PinDescriptor,
    pub a: PinDescriptor,
    pub b: PinDescriptor,
    pub c: PinDescriptor,
    pub d: PinDescriptor,
    pub e: Option<PinDescriptor>,
    pub lat: PinDescriptor,
    pub oe: PinDescriptor,
    pub clk: PinDescriptor,
}

impl PinAssignment {
    /// Looks up the resolved descriptor for a role.
    #[must_use]
    pub const fn get(&self, role: PinRole) -> Option<PinDescriptor> {
        match role {
            PinRole::R1 => Some(self.r1),
            PinRole::G1 => Some(self.g1),
            PinRole::B1 => Some(self.b1),
            PinRole::R2 => Some(self.r2),
            PinRole::G2 => Some(self.g2),
            PinRole::B2 => Some(self.b2),
            PinRole::A => Some(self.a),
            PinRole::B => Some(self.b),
            PinRole::C => Some(self.c),
            PinRole::D => Some(self.d),
            PinRole::E => self.e,
            PinRole::Lat => Some(self.lat),
            PinRole::Oe => Some(self.oe),
            PinRole::Clk => Some(self.clk),
        }
    }
}
