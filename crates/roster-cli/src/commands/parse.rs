// crates/roster-cli/src/commands/parse.rs - Parse a single command line

use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

use super::print_result;
use crate::context::Context;
use crate::stdin::read_input_or_stdin;

/// Parse one line and report the outcome
///
/// Words given on the command line are joined with single spaces, so
/// `roster parse vdelete 1` and `roster parse "vdelete 1"` are the same.
/// Exits non-zero when the line is rejected.
pub fn handle(ctx: &Context, words: &[String], json: bool) -> Result<ExitCode> {
    let arg = (!words.is_empty()).then(|| words.join(" "));
    let line = read_input_or_stdin(arg)?;

    let result = ctx.parser().parse_command(&line);
    debug!(ok = result.is_ok(), "parsed single line");
    print_result(&line, &result, json)?;

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
