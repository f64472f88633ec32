// crates/roster-cli/src/main.rs - CLI Application Entry Point
//
// The `roster` binary is a thin shell around roster-core: it reads command
// lines from arguments, pipes or an interactive prompt, runs them through the
// parser and prints what came out. It never executes the parsed commands.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │    roster-core      │
//                        │ (config+parser)  │    │  (CommandParser)    │
//                        └──────────────────┘    └─────────────────────┘
//
// OUTPUT CONVENTIONS:
// - Results go to stdout, diagnostics and logs to stderr
// - `--json` switches results to one JSON object per input line
// - Exit status is non-zero when any input line failed to parse
//
// EXAMPLE USAGE:
// ```bash
// roster parse vdelete 2
// roster parse --json "vcreate n/Amy p/911 e/amy@example.com"
// cat commands.txt | roster batch --json | jq '.command'
// roster repl
// ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod stdin;

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; logs never touch stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    // Commands that do not need a loaded configuration
    match &cli.command {
        Commands::Init { path } => return commands::init::handle(path.clone()),
        #[cfg(feature = "completions")]
        Commands::Completions { shell } => return commands::completions::handle(*shell),
        _ => {}
    }

    let ctx = Context::new(cli.config_dir, cli.ignore_case)?;

    match cli.command {
        Commands::Parse { line, json } => commands::parse::handle(&ctx, &line, json),
        Commands::Batch { json } => commands::batch::handle(&ctx, json),
        Commands::Repl { json } => commands::repl::handle(&ctx, json),
        Commands::List { json } => commands::list::handle(json),
        Commands::Init { .. } => unreachable!(),
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(),
    }
}
