//! namedrecord CLI — the main entry point.
//!
//! Commands:
//! - `build`   — Build a record from command-line values
//! - `demo`    — Sample run over a built-in person record
//! - `config`  — Show, locate, or initialise the config file

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use namedrecord_config::AppConfig;
use namedrecord_core::ReservedWords;

mod commands;
mod logging;
mod value;

#[derive(Parser)]
#[command(
    name = "namedrecord",
    about = "namedrecord — turn ordered values into field-named records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a record from values, prompting for names unless given
    Build {
        /// Values in field order
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Comma-separated field names, one per value
        #[arg(short, long, value_delimiter = ',', conflicts_with = "auto")]
        names: Option<Vec<String>>,

        /// Name fields automatically (field_0, field_1, ...)
        #[arg(short, long)]
        auto: bool,

        /// Reserved-word table to check names against (python or rust)
        #[arg(long)]
        reserved_words: Option<ReservedWords>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the sample conversion over a built-in person record
    Demo {
        /// Name fields automatically instead of prompting
        #[arg(short, long)]
        auto: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => return graceful_exit(&format!("Failed to load config: {e}")),
    };

    if let Err(e) = logging::init(&config.logging, cli.verbose) {
        return graceful_exit(&format!("Failed to initialise logging: {e}"));
    }

    let config_path = AppConfig::config_path();
    if config_path.exists() {
        tracing::info!("Loaded config from {}", config_path.display());
    } else {
        tracing::info!("No config file found at {}, using defaults", config_path.display());
    }

    let result = match cli.command {
        Commands::Build {
            values,
            names,
            auto,
            reserved_words,
            json,
        } => commands::build::run(
            &config,
            commands::build::BuildOptions {
                values,
                names,
                auto,
                reserved_words,
                json,
            },
        ),
        Commands::Demo { auto } => commands::demo::run(&config, auto),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(&config),
            ConfigAction::Path => commands::config_cmd::path(),
            ConfigAction::Init => commands::config_cmd::init(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            graceful_exit(&e.to_string())
        }
    }
}

/// Print a friendly message instead of a backtrace and fail with status 1.
fn graceful_exit(message: &str) -> ExitCode {
    eprintln!("\n{message}");
    ExitCode::FAILURE
}
