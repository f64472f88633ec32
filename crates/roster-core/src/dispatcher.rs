// crates/roster-core/src/dispatcher.rs - Command word resolution and dispatch
//
// The entry point of the crate. Splits a raw line into command word and
// argument tail, looks the word up in the alias table and hands the tail to
// that kind's parser. Parser results are returned unchanged.
//
// CASE POLICY:
// Command words are case-sensitive unless `parser.case_sensitive = false`,
// in which case ASCII case is ignored ("VLIST" == "vlist"). Field values are
// never case-folded here.

use tracing::debug;

use crate::command::{Command, CommandKind, HELP_USAGE};
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::parser;
use crate::tokenizer::split_command;

/// Turns raw input lines into commands
///
/// Holds only immutable settings, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandParser {
    case_sensitive: bool,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl CommandParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Look up the kind a command word invokes
    pub fn resolve(&self, word: &str) -> Option<CommandKind> {
        CommandKind::ALL.into_iter().find(|kind| {
            kind.aliases().iter().any(|alias| {
                if self.case_sensitive {
                    *alias == word
                } else {
                    alias.eq_ignore_ascii_case(word)
                }
            })
        })
    }

    /// Parse one line of user input
    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let Some((word, args)) = split_command(input) else {
            return Err(ParseError::EmptyInput { usage: HELP_USAGE });
        };

        let Some(kind) = self.resolve(word) else {
            debug!(word, "unknown command word");
            return Err(ParseError::UnknownCommand);
        };

        debug!(%kind, word, "dispatching command");
        dispatch(kind, args)
    }
}

fn dispatch(kind: CommandKind, args: &str) -> ParseResult<Command> {
    match kind {
        CommandKind::VolunteerCreate => parser::parse_volunteer_create(args),
        CommandKind::VolunteerList => Ok(Command::VolunteerList),
        CommandKind::VolunteerDelete => parser::parse_volunteer_delete(args),
        CommandKind::VolunteerEdit => parser::parse_volunteer_edit(args),
        CommandKind::VolunteerFind => parser::parse_volunteer_find(args),
        CommandKind::EventCreate => parser::parse_event_create(args),
        CommandKind::EventList => Ok(Command::EventList),
        CommandKind::EventShow => parser::parse_event_show(args),
        CommandKind::EventDelete => parser::parse_event_delete(args),
        CommandKind::EventEdit => parser::parse_event_edit(args),
        CommandKind::EventAddVolunteer => parser::parse_event_add_volunteer(args),
        CommandKind::EventRemoveVolunteer => parser::parse_event_remove_volunteer(args),
        CommandKind::Clear => Ok(Command::Clear),
        CommandKind::Help => Ok(Command::Help),
        CommandKind::Exit => Ok(Command::Exit),
    }
}

/// Parse one line with the default, case-sensitive parser
pub fn parse_command(input: &str) -> ParseResult<Command> {
    CommandParser::default().parse_command(input)
}
