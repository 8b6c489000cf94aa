//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory
//! - Release builds: the composite data directory

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use composite_config::CompositeConfig;
use simplelog::{ConfigBuilder, WriteLogger};

/// Initialize file-based logging
///
/// Level comes from `RUST_LOG`, then the config file. Returns the path of the
/// created log file.
pub fn init(config: &CompositeConfig) -> Result<PathBuf> {
    let log_file = composite_config::log_file_path("calling");

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(config.log_level(), log_config, file)
        .context("Failed to initialize logger")?;

    Ok(log_file)
}
