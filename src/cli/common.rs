//! Shared CLI plumbing: error type, exit codes, JSON response shapes.

use serde::Serialize;

use crate::resolver::ConfigError;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Everything passed
    Success = 0,
    /// The configuration is invalid
    ValidationFailed = 1,
    /// Bad command-line usage
    UsageError = 2,
    /// File IO or document parse failure
    IoError = 3,
}

/// A CLI-level error: a message plus the exit code it maps to.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code for the process
    pub exit_code: ExitCode,
    /// Message printed to stderr; may be empty when the command already
    /// wrote a structured body to stdout
    pub message: String,
}

impl CliError {
    /// IO or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Configuration validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// Command-line usage problem.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::UsageError,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// JSON body of `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when no error was collected
    pub valid: bool,
    /// Number of display declarations found in the document
    pub displays: usize,
    /// Every collected error (empty when valid)
    pub errors: Vec<ConfigError>,
}

impl ValidationResponse {
    /// Serializes the response, falling back to a minimal literal if
    /// serialization itself fails.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| "{\"valid\": false, \"errors\": []}".to_string())
    }
}
