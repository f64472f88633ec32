// crates/roster-cli/src/cli.rs - Command-line interface definitions
//
// Pure data: what the binary accepts. Behaviour lives in commands/.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Parse and inspect volunteer roster commands")]
#[command(version)]
pub struct Cli {
    /// Directory holding .roster/config.toml (defaults to the current directory)
    #[arg(long, global = true, env = "ROSTER_HOME")]
    pub config_dir: Option<PathBuf>,

    /// Match command words regardless of case (overrides the config file)
    #[arg(long, global = true)]
    pub ignore_case: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single command line (from arguments or stdin)
    Parse {
        /// The command line; read from stdin when omitted. Words starting
        /// with `-` go after `--`.
        line: Vec<String>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Parse every non-empty line read from stdin
    Batch {
        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Read and parse lines interactively until `exit`
    Repl {
        /// Output as JSON (overrides repl.json in the config file)
        #[arg(long)]
        json: bool,
    },

    /// List every command word with its aliases and usage
    #[command(name = "commands")]
    List {
        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Write a default .roster/config.toml
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Generate shell completions
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
