// crates/roster-cli/src/commands/repl.rs - Interactive parse loop
//
// Reads a line, parses it, prints the result, repeats. `exit` (or end of
// input) stops the loop and `help` prints the command summary. Parse errors
// are printed and the loop carries on.

use anyhow::{Context as _, Result};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use roster_core::Command;

use super::{list, print_result};
use crate::context::Context;

pub fn handle(ctx: &Context, json: bool) -> Result<ExitCode> {
    let json = json || ctx.config().repl.json;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", ctx.config().repl.prompt);
        io::stdout().flush().context("Failed to write prompt")?;

        let Some(line) = lines.next() else {
            // EOF
            println!();
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        let result = ctx.parser().parse_command(&line);
        print_result(line.trim(), &result, json)?;

        match result {
            Ok(Command::Exit) => break,
            Ok(Command::Help) if !json => list::print_summary(),
            _ => {}
        }
    }

    Ok(ExitCode::SUCCESS)
}
