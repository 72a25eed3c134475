//! Generate command: emit driver instantiation code.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::boards::BoardRegistry;
use crate::cli::common::{CliError, CliResult};
use crate::emitter::emit_config;
use crate::parser::ConfigDocument;
use crate::resolver::resolve_document;

/// Validate a configuration and emit the C++ initializer block(s)
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Write generated code to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let registry = BoardRegistry::load()
            .map_err(|e| CliError::io(format!("Failed to load board registry: {e}")))?;

        let document = ConfigDocument::load(&self.config)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        // Fail closed: nothing is emitted when validation collected
        // any error
        let resolved = resolve_document(&document, &registry)
            .map_err(|report| CliError::validation(report.format_message()))?;

        let mut code = String::new();
        for config in &resolved {
            code.push_str(&emit_config(config));
            code.push('\n');
        }

        match &self.output {
            Some(path) => {
                fs::write(path, &code).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!(
                    "Generated {} display configuration(s) to {}",
                    resolved.len(),
                    path.display()
                );
            }
            None => print!("{code}"),
        }

        Ok(())
    }
}
