// crates/roster-cli/src/stdin.rs - Centralized STDIN handling
//
// Read from stdin when no positional input was given, so every command
// works both interactively and at the end of a pipe.

use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Read};

/// Use the provided argument, or read a single line from stdin
///
/// ```bash
/// roster parse vdelete 1
/// echo "vdelete 1" | roster parse
/// ```
pub fn read_input_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        bail!(
            "No input provided. Either provide a command line or pipe one in.\n\nExamples:\n  roster parse vdelete 1\n  echo \"vdelete 1\" | roster parse"
        );
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    // Blank input is left for the parser to reject with its usage message
    Ok(buffer.trim().to_string())
}

/// Read every non-blank line from stdin for batch parsing
pub fn read_lines_from_stdin() -> Result<Vec<String>> {
    if io::stdin().is_terminal() {
        bail!("No piped input detected. This command expects command lines on stdin.");
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(non_blank_lines(&buffer))
}

fn non_blank_lines(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
