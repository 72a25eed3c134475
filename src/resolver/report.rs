//! Batch error accumulation for configuration resolution.
//!
//! Every validator collects *all* violations for its scope into one
//! report instead of stopping at the first, so a user fixes every
//! problem from a single run. Errors are plain values returned to the
//! caller, never panics: all of them are user-configuration mistakes,
//! and re-running without an edit reproduces them deterministically.

use serde::Serialize;

/// Classes of configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigErrorKind {
    /// Required pin role absent with no preset to fall back on
    MissingPin,
    /// Board preset name not in the registry
    UnknownBoard,
    /// Shift driver and clock phase disagree
    DriverTiming,
    /// Layout rows/cols/mode combination is impossible
    LayoutShape,
    /// Explicit min_refresh_rate alongside a real update_interval
    ConflictingTiming,
    /// Display settings race with the external rendering engine
    HostIntegration,
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPin => write!(f, "Missing Pin"),
            Self::UnknownBoard => write!(f, "Unknown Board"),
            Self::DriverTiming => write!(f, "Driver Timing"),
            Self::LayoutShape => write!(f, "Layout Shape"),
            Self::ConflictingTiming => write!(f, "Conflicting Timing"),
            Self::HostIntegration => write!(f, "Host Integration"),
        }
    }
}

/// One structured configuration error, tagged with the field it concerns.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigError {
    /// Class of error
    pub kind: ConfigErrorKind,
    /// Configuration field path the error concerns (e.g. `r2_pin`)
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl ConfigError {
    /// Creates a new error for a field path.
    pub fn new(
        kind: ConfigErrorKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.path, self.kind, self.message)
    }
}

/// Accumulated validation errors for one resolution pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Every collected error, in detection order
    pub errors: Vec<ConfigError>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Returns true if no error was collected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    /// Merges another report's errors into this one.
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Consumes the report: `Ok(value)` when empty, `Err(self)` otherwise.
    /// Resolution fails closed — nothing reaches the emitter when any
    /// error was collected.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Formats the report as a user-facing numbered list.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();
        message.push_str(&format!("{} configuration errors:\n", self.errors.len()));
        for (idx, error) in self.errors.iter().enumerate() {
            message.push_str(&format!("  {}. {}\n", idx + 1, error));
        }
        message
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationReport {}
