// crates/roster-cli/src/commands/list.rs - The command table
//
// `roster commands` prints every kind with its aliases and full usage text.
// The repl's `help` prints the shorter one-line-per-kind summary.

use anyhow::Result;
use console::style;
use std::process::ExitCode;

use roster_core::CommandKind;

pub fn handle(json: bool) -> Result<ExitCode> {
    if json {
        let kinds: Vec<_> = CommandKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "kind": kind,
                    "word": kind.word(),
                    "aliases": kind.aliases(),
                    "takes_arguments": kind.takes_arguments(),
                    "usage": kind.usage(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
    } else {
        for kind in CommandKind::ALL {
            println!(
                "{} ({})",
                style(kind.word()).cyan().bold(),
                kind.aliases().join(", ")
            );
            for line in kind.usage().lines() {
                println!("    {line}");
            }
            println!();
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One line per command: the word, its aliases and the first usage line
pub fn print_summary() {
    for kind in CommandKind::ALL {
        println!("{}", summary_line(kind));
    }
}

fn summary_line(kind: CommandKind) -> String {
    let description = kind
        .usage()
        .lines()
        .next()
        .and_then(|first| first.split_once(": "))
        .map_or("", |(_, description)| description);
    let others = kind.aliases().get(1..).unwrap_or_default().join(", ");
    format!(
        "  {:<10} {:<10} {}",
        style(kind.word()).cyan(),
        others,
        description
    )
}
