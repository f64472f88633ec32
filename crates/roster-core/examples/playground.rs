// crates/roster-core/examples/playground.rs
// Run with: cargo run --example playground

use roster_core::{CommandParser, ParserConfig};

fn main() {
    println!("Roster Command Parser Playground\n");

    let strict = CommandParser::default();
    let relaxed = CommandParser::new(&ParserConfig {
        case_sensitive: false,
    });

    println!("=== Volunteer Commands ===");
    for line in [
        "vcreate n/John Doe p/98765432 e/johnd@example.com s/first aid s/driving",
        "vedit 1 p/91234567 s/",
        "vfind alice bob",
        "vdelete 0",
    ] {
        show(&strict, line);
    }

    println!("\n=== Event Commands ===");
    for line in [
        "ecreate n/Clean up r/cleaner d/23/9/2023 1800 l/serangoon dsc/clean it up b/80.00",
        "eedit 2 l/admiralty m/",
        "eaddv ei/1 vi/2",
        "eaddv ei/1",
    ] {
        show(&strict, line);
    }

    println!("\n=== Case Policy ===");
    show(&strict, "VLIST");
    show(&relaxed, "VLIST");

    println!("\n=== Trailing Text ===");
    show(&strict, "exit now please");
    show(&strict, "   ");
}

fn show(parser: &CommandParser, line: &str) {
    match parser.parse_command(line) {
        Ok(command) => {
            let kind = command.kind();
            println!("{line:?}\n  -> {kind:?}\n  canonical: {command}");
        }
        Err(error) => {
            let message = error.to_string().replace('\n', "\n     ");
            println!("{line:?}\n  !! [{}] {message}", error.kind());
        }
    }
}
