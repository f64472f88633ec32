// crates/roster-cli/src/commands/completions.rs - Shell completion scripts

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;

/// ```bash
/// roster completions bash > /etc/bash_completion.d/roster
/// ```
pub fn handle(shell: Shell) -> Result<ExitCode> {
    let mut command = Cli::command();
    generate(shell, &mut command, "roster", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
