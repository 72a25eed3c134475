//! Application-wide constants.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "matrixcfg";
