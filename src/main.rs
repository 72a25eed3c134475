//! matrixcfg - HUB75 display configuration validator and code generator
//!
//! Validates multi-panel HUB75 LED matrix configuration documents,
//! resolves board presets and pin overrides, and emits driver
//! instantiation code.

// Module declarations
mod boards;
mod cli;
mod constants;
mod emitter;
mod models;
mod parser;
mod resolver;

use clap::{Parser, Subcommand};

use cli::{BoardsArgs, GenerateArgs, ValidateArgs};

/// HUB75 display configuration validator and code generator
#[derive(Parser, Debug)]
#[command(name = constants::APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a configuration document
    Validate(ValidateArgs),
    /// List or inspect builtin board presets
    Boards(BoardsArgs),
    /// Validate and emit driver instantiation code
    Generate(GenerateArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => args.execute(),
        Command::Boards(args) => args.execute(),
        Command::Generate(args) => args.execute(),
    };

    if let Err(err) = result {
        if !err.message.is_empty() {
            eprintln!("{err}");
        }
        std::process::exit(err.exit_code as i32);
    }
}
