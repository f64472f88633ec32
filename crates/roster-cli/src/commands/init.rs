// crates/roster-cli/src/commands/init.rs - Write a default configuration
//
// Runs before any configuration is loaded, since its whole job is to create
// the file that loading reads.

use anyhow::{Context as _, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use roster_core::ConfigManager;

/// Create `<path>/.roster/config.toml` with commented defaults
///
/// Never overwrites an existing file.
///
/// ```bash
/// roster init              # current directory
/// roster init ~/volunteers
/// ```
pub fn handle(path: Option<PathBuf>) -> Result<ExitCode> {
    let dir = match path {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to determine the current directory")?,
    };

    let config_path = ConfigManager::config_path(&dir);
    if config_path.exists() {
        println!("Config already exists at: {}", config_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&config_path, ConfigManager::generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created default config at: {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}
