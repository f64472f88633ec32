// crates/roster-cli/src/commands/batch.rs - Parse many lines from stdin
//
// ```bash
// roster batch < session.txt
// grep '^e' session.txt | roster batch --json | jq -c 'select(.ok | not)'
// ```

use anyhow::Result;
use std::process::ExitCode;
use tracing::info;

use super::print_result;
use crate::context::Context;
use crate::stdin::read_lines_from_stdin;

/// Parse every non-blank stdin line, one result per line
///
/// All lines are processed even after a failure; the exit status reports
/// whether any of them failed.
pub fn handle(ctx: &Context, json: bool) -> Result<ExitCode> {
    let lines = read_lines_from_stdin()?;

    let mut failures = 0usize;
    for line in &lines {
        let result = ctx.parser().parse_command(line);
        if result.is_err() {
            failures += 1;
        }
        print_result(line, &result, json)?;
    }

    info!(lines = lines.len(), failures, "batch finished");

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
