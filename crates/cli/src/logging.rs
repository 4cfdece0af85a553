//! Tracing initialisation.
//!
//! `RUST_LOG` wins when set; otherwise `-v` means debug and the configured
//! level applies. Output goes to the log file unless `to_console` is set,
//! in which case it goes to stderr so prompts on stdout stay clean.

use std::fs::OpenOptions;
use std::sync::Mutex;

use namedrecord_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub fn init(config: &LoggingConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "debug"
    } else {
        config.filter_directive()?
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.to_console {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        tracing::info!("Initialized logging to console at {level}");
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)
            .map_err(|e| format!("cannot open log file {}: {e}", config.file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        tracing::info!("Log file path is {}", config.file.display());
    }

    Ok(())
}
