use anyhow::{Context as _, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use roster_core::{CommandParser, ConfigManager, RosterConfig};

/// Application context that gets passed to command handlers
///
/// Holds the resolved configuration and a parser built from it, so handlers
/// never read the environment or config files themselves.
pub struct Context {
    config: RosterConfig,
    parser: CommandParser,
}

impl Context {
    /// Load configuration and build the parser
    ///
    /// Directory precedence: --config-dir / ROSTER_HOME > current directory.
    /// `ignore_case` overrides whatever the configuration says.
    pub fn new(config_dir: Option<PathBuf>, ignore_case: bool) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => env::current_dir().context("Failed to determine the current directory")?,
        };

        let mut config = ConfigManager::load_config(Some(&config_dir)).with_context(|| {
            format!("Failed to load configuration from {}", config_dir.display())
        })?;

        if ignore_case {
            config.parser.case_sensitive = false;
        }

        debug!(
            dir = %config_dir.display(),
            case_sensitive = config.parser.case_sensitive,
            "configuration loaded"
        );

        let parser = CommandParser::new(&config.parser);
        Ok(Self { config, parser })
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }
}
