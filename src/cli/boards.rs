//! Board preset listing and inspection commands.

use clap::Args;

use crate::boards::BoardRegistry;
use crate::cli::common::{CliError, CliResult};
use crate::models::PinRole;

/// List builtin board presets or show one preset's pin table
#[derive(Debug, Clone, Args)]
pub struct BoardsArgs {
    /// Show the full pin table for one board
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl BoardsArgs {
    /// Execute the boards command
    pub fn execute(&self) -> CliResult<()> {
        let registry = BoardRegistry::load()
            .map_err(|e| CliError::io(format!("Failed to load board registry: {e}")))?;

        match &self.name {
            Some(name) => self.show_board(&registry, name),
            None => self.list_boards(&registry),
        }
    }

    fn list_boards(&self, registry: &BoardRegistry) -> CliResult<()> {
        if self.json {
            let presets: Vec<_> = registry.all().values().collect();
            let body = serde_json::to_string_pretty(&presets)
                .map_err(|e| CliError::io(format!("Failed to serialize boards: {e}")))?;
            println!("{body}");
        } else {
            println!("Builtin board presets:");
            for preset in registry.all().values() {
                println!("  {:<28} {}", preset.name, preset.description);
            }
        }
        Ok(())
    }

    fn show_board(&self, registry: &BoardRegistry, name: &str) -> CliResult<()> {
        let preset = registry.lookup(name).ok_or_else(|| {
            CliError::usage(format!(
                "Unknown board '{}'. Available boards: {}",
                name,
                registry.names().join(", ")
            ))
        })?;

        if self.json {
            let body = serde_json::to_string_pretty(preset)
                .map_err(|e| CliError::io(format!("Failed to serialize board: {e}")))?;
            println!("{body}");
        } else {
            println!("{} ({})", preset.name, preset.description);
            for role in PinRole::ALL {
                match preset.pin(role) {
                    Some(number) => {
                        let suffix = if preset.suppresses_strapping(role) {
                            " (strapping warning suppressed)"
                        } else {
                            ""
                        };
                        println!("  {:>3}: GPIO{number}{suffix}", role.as_str());
                    }
                    None => println!("  {:>3}: unassigned", role.as_str()),
                }
            }
        }
        Ok(())
    }
}
