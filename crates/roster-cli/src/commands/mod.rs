// crates/roster-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - parse: one line from arguments or stdin
// - batch: every line of stdin
// - repl: interactive loop
// - list: the command table
// - init: writes a default config (no context needed)
// - completions: shell completion scripts (no context needed)
//
// Rendering of a single parse result is shared here so all three input modes
// print identically.

pub mod batch;
#[cfg(feature = "completions")]
pub mod completions;
pub mod init;
pub mod list;
pub mod parse;
pub mod repl;

use anyhow::Result;
use console::style;
use roster_core::{Command, ParseResult};

/// JSON object for one input line
pub fn to_json(input: &str, result: &ParseResult<Command>) -> Result<serde_json::Value> {
    Ok(match result {
        Ok(command) => serde_json::json!({
            "ok": true,
            "input": input,
            "canonical": command.to_string(),
            "command": serde_json::to_value(command)?,
        }),
        Err(error) => serde_json::json!({
            "ok": false,
            "input": input,
            "error": {
                "kind": error.kind(),
                "message": error.to_string(),
            },
        }),
    })
}

/// Print one result in the selected format
///
/// Successes and JSON go to stdout. Human-readable failures go to stderr.
pub fn print_result(input: &str, result: &ParseResult<Command>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&to_json(input, result)?)?);
        return Ok(());
    }

    match result {
        Ok(command) => println!(
            "{} {}",
            style(format!("{:?}", command.kind())).green().bold(),
            command
        ),
        Err(error) => eprintln!("{} {}", style("error:").red().bold().for_stderr(), error),
    }
    Ok(())
}
