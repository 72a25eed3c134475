//! CLI command handlers for matrixcfg.
//!
//! This module provides headless, scriptable access to the resolver for
//! automation, testing, and CI integration.

pub mod boards;
pub mod common;
pub mod generate;
pub mod validate;

// Re-export types used by main.rs and tests
pub use boards::BoardsArgs;
pub use common::{CliError, CliResult, ExitCode, ValidationResponse};
pub use generate::GenerateArgs;
pub use validate::ValidateArgs;
