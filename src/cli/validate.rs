//! Validation command for configuration documents.

use clap::Args;
use std::path::PathBuf;

use crate::boards::BoardRegistry;
use crate::cli::common::{CliError, CliResult, ValidationResponse};
use crate::parser::ConfigDocument;
use crate::resolver::resolve_document;

/// Validate a configuration document for errors
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let registry = BoardRegistry::load()
            .map_err(|e| CliError::io(format!("Failed to load board registry: {e}")))?;

        let document = ConfigDocument::load(&self.config)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        match resolve_document(&document, &registry) {
            Ok(resolved) => {
                if self.json {
                    let response = ValidationResponse {
                        valid: true,
                        displays: resolved.len(),
                        errors: Vec::new(),
                    };
                    println!("{}", response.to_json());
                } else {
                    println!(
                        "✓ Configuration valid: {} display(s) resolved",
                        resolved.len()
                    );
                    for config in &resolved {
                        println!(
                            "  {}: {}x{} px, {} panel(s), min refresh {} Hz",
                            config.id.as_deref().unwrap_or("<display>"),
                            config.total_width(),
                            config.total_height(),
                            config.layout.rows * config.layout.cols,
                            config.min_refresh_rate
                        );
                    }
                }
                Ok(())
            }
            Err(report) => {
                if self.json {
                    let response = ValidationResponse {
                        valid: false,
                        displays: document.displays().len(),
                        errors: report.errors,
                    };
                    println!("{}", response.to_json());
                    // JSON consumers read the body from stdout; the exit
                    // code still signals failure
                    Err(CliError::validation(String::new()))
                } else {
                    Err(CliError::validation(report.format_message()))
                }
            }
        }
    }
}
