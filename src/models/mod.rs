//! Data models for HUB75 display configuration.
//!
//! This module contains the core data structures used throughout the
//! resolver: boundary enumerations, the raw (pre-resolution) declaration,
//! pin types, and the fully-resolved configuration. Models are
//! independent of parsing and validation logic.

pub mod enums;
pub mod pins;
pub mod raw;
pub mod resolved;

// Re-export all model types
pub use enums::{ClockSpeed, PanelLayout, ScanPattern, ShiftDriver};
pub use pins::{PinAssignment, PinConfig, PinDescriptor, PinRole};
pub use raw::{RawDisplayConfig, UpdateInterval};
pub use resolved::{LayoutSpec, ResolvedDisplayConfig};
