// crates/roster-core/src/lib.rs - Command parsing core for the volunteer roster
//
// This crate turns one line of user input into a validated, strongly typed
// `Command`, or rejects it with a `ParseError` explaining what went wrong.
// Nothing here touches storage or the terminal: executing a command and
// showing the result belong to the caller.
//
// PIPELINE:
// ┌──────────────┐   ┌───────────────┐   ┌────────────────┐   ┌───────────┐
// │  raw line    │──▶│  tokenizer    │──▶│ command parser │──▶│  Command  │
// │ "vdelete 2"  │   │ word + fields │   │ (one per kind) │   │ (typed)   │
// └──────────────┘   └───────────────┘   └────────────────┘   └───────────┘
//                            ▲                    │
//                            │                    ▼
//                     ┌──────────────┐    ┌────────────────┐
//                     │  dispatcher  │    │ field types    │
//                     │ (alias table)│    │ (validation)   │
//                     └──────────────┘    └────────────────┘
//
// EXAMPLE:
// ```
// use roster_core::{Command, parse_command};
//
// let command = parse_command("vdelete 2").unwrap();
// assert!(matches!(command, Command::VolunteerDelete { .. }));
// ```

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod field;
pub mod index;
pub mod model;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testutil;

pub use command::{Command, CommandKind};
pub use config::{ConfigManager, ParserConfig, ReplConfig, RosterConfig};
pub use dispatcher::{CommandParser, parse_command};
pub use error::{ParseError, ParseResult};
pub use field::{FieldError, FieldResult};
pub use index::Index;
pub use model::{
    EditEventDescriptor, EditVolunteerDescriptor, Event, NameContainsKeywords, Volunteer,
};
