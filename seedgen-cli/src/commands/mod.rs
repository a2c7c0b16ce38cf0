//! CLI command implementations

pub mod check;
pub mod generate;
pub mod logs;

use std::path::PathBuf;

use anyhow::{Context, Result};
use seedgen_core::config::GeneratorConfig;
use seedgen_core::{EntryPoint, LogEvent, LoggingService};

/// Logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let seedgen_dir = get_seedgen_dir();
    std::fs::create_dir_all(&seedgen_dir).ok()?;
    LoggingService::new(&seedgen_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Seedgen home directory from environment or default
pub fn get_seedgen_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SEEDGEN_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .map(|home| home.join(".seedgen"))
            .unwrap_or_else(|| PathBuf::from(".seedgen"))
    }
}

/// Load the generator config, applying CLI overrides last
pub fn load_config(seed: Option<u64>, output: Option<PathBuf>) -> Result<GeneratorConfig> {
    let seedgen_dir = get_seedgen_dir();
    let mut config = GeneratorConfig::load(&seedgen_dir)
        .with_context(|| format!("Failed to load settings from {:?}", seedgen_dir))?;

    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(dir) = output {
        config = config.with_output_dir(dir);
    }
    Ok(config)
}

/// Settings for commands that read existing fixtures; the seed override is
/// not consulted
pub fn load_output_config(output: Option<PathBuf>) -> Result<GeneratorConfig> {
    let seedgen_dir = get_seedgen_dir();
    let config = GeneratorConfig::load_settings(&seedgen_dir)
        .with_context(|| format!("Failed to load settings from {:?}", seedgen_dir))?;

    Ok(match output {
        Some(dir) => config.with_output_dir(dir),
        None => config,
    })
}
