// crates/roster-core/src/config.rs - Configuration System
//
// Settings that change how lines are parsed and how the interactive front-end
// behaves. The parser itself only ever sees `ParserConfig`.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--ignore-case, handled by the CLI)
// 2. Environment variables (ROSTER_CASE_SENSITIVE, ROSTER_PROMPT)
// 3. Directory config file (<dir>/.roster/config.toml)
// 4. Built-in defaults
//
// A missing config file is not an error. A file that exists but does not
// parse is, and so is an environment override that does not parse.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory, relative to the config root, holding `config.toml`
pub const CONFIG_DIR: &str = ".roster";
pub const CONFIG_FILE: &str = "config.toml";

pub const ENV_CASE_SENSITIVE: &str = "ROSTER_CASE_SENSITIVE";
pub const ENV_PROMPT: &str = "ROSTER_PROMPT";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid value '{value}' for {variable}: expected true or false")]
    InvalidEnvValue {
        variable: &'static str,
        value: String,
    },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section defaults, so a partial file only needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Command-line parsing rules
    #[serde(default)]
    pub parser: ParserConfig,

    /// Interactive session settings
    #[serde(default)]
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Match command words exactly; when false, ASCII case is ignored
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Printed before each line is read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print results as JSON instead of text
    #[serde(default)]
    pub json: bool,
}

/// Configuration manager handles loading and merging configs
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration for `dir` from every source
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with `<dir>/.roster/config.toml` (if it exists)
    /// 3. Apply environment variable overrides
    /// 4. Validate
    pub fn load_config(dir: Option<&Path>) -> ConfigResult<RosterConfig> {
        let mut config = RosterConfig::default();

        if let Some(dir) = dir
            && let Some(file_config) = Self::try_load_file(dir)?
        {
            config = file_config;
        }

        Self::apply_env_overrides_from(&mut config, |key| std::env::var(key).ok())?;
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Where the config file for `dir` lives
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        r#"# Roster Configuration File
#
# Lines starting with # are comments and are ignored.

[parser]
# Match command words exactly. When false, "VLIST" and "vlist" are the same.
# Overridden by ROSTER_CASE_SENSITIVE and by --ignore-case.
case_sensitive = true

[repl]
# Text shown before each line in `roster repl`. Overridden by ROSTER_PROMPT.
prompt = "> "

# Print parsed commands as JSON instead of text
json = false
"#
        .to_string()
    }

    /// Read `<dir>/.roster/config.toml`, or `None` if there is no such file
    pub fn try_load_file(dir: &Path) -> ConfigResult<Option<RosterConfig>> {
        let config_path = Self::config_path(dir);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file");
            return Ok(None);
        }

        let config_content = std::fs::read_to_string(&config_path)?;

        let config: RosterConfig =
            toml::from_str(&config_content).map_err(|e| ConfigError::ParseError {
                file: config_path.display().to_string(),
                error: e.to_string(),
            })?;

        debug!(path = %config_path.display(), "loaded config file");
        Ok(Some(config))
    }

    /// Apply overrides read through `lookup`
    ///
    /// - ROSTER_CASE_SENSITIVE -> parser.case_sensitive
    /// - ROSTER_PROMPT -> repl.prompt
    pub fn apply_env_overrides_from<F>(config: &mut RosterConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CASE_SENSITIVE) {
            config.parser.case_sensitive = parse_bool(ENV_CASE_SENSITIVE, &value)?;
        }

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.repl.prompt = prompt;
        }

        Ok(())
    }

    /// Catch settings that would break the front-end
    pub fn validate_config(config: &RosterConfig) -> ConfigResult<()> {
        if config.repl.prompt.is_empty() {
            return Err(ConfigError::ValidationError("repl.prompt cannot be empty".to_string()));
        }

        Ok(())
    }
}

fn parse_bool(variable: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            variable,
            value: value.to_string(),
        }),
    }
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            case_sensitive: default_true(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        std::fs::write(ConfigManager::config_path(dir.path()), contents).unwrap();
        dir
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RosterConfig::default();
        assert!(config.parser.case_sensitive);
        assert_eq!(config.repl.prompt, "> ");
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let generated = ConfigManager::generate_default_config();
        let parsed: RosterConfig = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, RosterConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = RosterConfig::default();
        config.repl.json = true;
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: RosterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigManager::try_load_file(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = write_config("[parser]\ncase_sensitive = false\n");
        let config = ConfigManager::try_load_file(dir.path()).unwrap().unwrap();
        assert!(!config.parser.case_sensitive);
        assert_eq!(config.repl, ReplConfig::default());
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let dir = write_config("[parser\ncase_sensitive = ");
        let error = ConfigManager::try_load_file(dir.path()).unwrap_err();
        assert!(matches!(error, ConfigError::ParseError { .. }));
        assert!(error.to_string().contains("config.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RosterConfig::default();
        ConfigManager::apply_env_overrides_from(
            &mut config,
            env(&[
                ("ROSTER_CASE_SENSITIVE", "false"),
                ("ROSTER_PROMPT", "roster> "),
            ]),
        )
        .unwrap();
        assert!(!config.parser.case_sensitive);
        assert_eq!(config.repl.prompt, "roster> ");
    }

    #[test]
    fn test_env_boolean_must_parse() {
        let mut config = RosterConfig::default();
        let error = ConfigManager::apply_env_overrides_from(
            &mut config,
            env(&[("ROSTER_CASE_SENSITIVE", "sometimes")]),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidEnvValue {
                variable: "ROSTER_CASE_SENSITIVE",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        let mut config = RosterConfig::default();
        config.repl.prompt = String::new();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
