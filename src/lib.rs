//! HUB75 Display Configuration Library
//!
//! This library validates and normalizes user-supplied configuration for
//! multi-panel HUB75 LED matrix displays: merging board presets with
//! explicit pin overrides, enforcing cross-field layout and driver
//! invariants, deriving the minimum refresh rate, and producing the
//! fully-resolved structure the driver emitter consumes.

// Module declarations
pub mod boards;
pub mod cli;
pub mod constants;
pub mod emitter;
pub mod models;
pub mod parser;
pub mod resolver;
