// crates/roster-core/src/command.rs - Command objects and the command table
//
// `CommandKind` is the closed list of things a user can ask for, together
// with the words that invoke each one and its usage text. `Command` is the
// parsed, validated request itself, one variant per kind.
//
// `Command`'s Display writes the canonical command line, which parses back
// into an equal command.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::index::Index;
use crate::model::{
    EditEventDescriptor, EditVolunteerDescriptor, Event, NameContainsKeywords, Volunteer,
};
use crate::syntax::{
    PREFIX_BUDGET, PREFIX_DATE_TIME, PREFIX_DESCRIPTION, PREFIX_EMAIL, PREFIX_EVENT_INDEX,
    PREFIX_LOCATION, PREFIX_MATERIAL, PREFIX_NAME, PREFIX_PHONE, PREFIX_ROLE, PREFIX_SKILL,
    PREFIX_VOLUNTEER_INDEX, Prefix,
};

pub const VOLUNTEER_CREATE_USAGE: &str = "vcreate: Adds a volunteer to the volunteer list.
Parameters: n/NAME p/PHONE e/EMAIL [s/SKILL]...
Example: vcreate n/John Doe p/98765432 e/johnd@example.com s/first aid s/driving";

pub const VOLUNTEER_LIST_USAGE: &str = "vlist: Lists all volunteers.
Example: vlist";

pub const VOLUNTEER_DELETE_USAGE: &str =
    "vdelete: Deletes the volunteer identified by the index number used in the displayed volunteer list.
Parameters: INDEX (must be a positive integer)
Example: vdelete 1";

pub const VOLUNTEER_EDIT_USAGE: &str =
    "vedit: Edits the details of the volunteer identified by the index number used in the displayed volunteer list. \
Existing values will be overwritten by the input values.
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [s/SKILL]...
Example: vedit 1 p/91234567 e/johndoe@example.com";

pub const VOLUNTEER_FIND_USAGE: &str =
    "vfind: Finds all volunteers whose names contain any of the specified keywords (case-insensitive).
Parameters: KEYWORD [MORE_KEYWORDS]...
Example: vfind alice bob charlie";

pub const EVENT_CREATE_USAGE: &str = "ecreate: Adds an event to the event list.
Parameters: n/NAME r/ROLE [r/ROLE]... d/DATE_AND_TIME l/LOCATION dsc/DESCRIPTION [m/MATERIAL]... [b/BUDGET]
Example: ecreate n/Clean up r/cleaner d/23/9/2023 1800 l/serangoon dsc/clean it up m/trash bag b/80.00";

pub const EVENT_LIST_USAGE: &str = "elist: Lists all events.
Example: elist";

pub const EVENT_SHOW_USAGE: &str =
    "eshow: Shows the full details of the event identified by the index number used in the displayed event list.
Parameters: INDEX (must be a positive integer)
Example: eshow 1";

pub const EVENT_DELETE_USAGE: &str =
    "edelete: Deletes the event identified by the index number used in the displayed event list.
Parameters: INDEX (must be a positive integer)
Example: edelete 1";

pub const EVENT_EDIT_USAGE: &str =
    "eedit: Edits the details of the event identified by the index number used in the displayed event list. \
Existing values will be overwritten by the input values.
Parameters: INDEX (must be a positive integer) [n/NAME] [r/ROLE]... [d/DATE_AND_TIME] [l/LOCATION] \
[dsc/DESCRIPTION] [m/MATERIAL]... [b/BUDGET]
Example: eedit 1 l/admiralty b/100.00";

pub const EVENT_ADD_VOLUNTEER_USAGE: &str = "eaddv: Assigns a volunteer to an event.
Parameters: ei/EVENT_INDEX vi/VOLUNTEER_INDEX
Example: eaddv ei/1 vi/2";

pub const EVENT_REMOVE_VOLUNTEER_USAGE: &str = "eremovev: Removes a volunteer from an event.
Parameters: ei/EVENT_INDEX vi/VOLUNTEER_INDEX
Example: eremovev ei/1 vi/2";

pub const CLEAR_USAGE: &str = "clear: Clears all volunteers and events.
Example: clear";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.
Example: help";

pub const EXIT_USAGE: &str = "exit: Exits the program.
Example: exit";

/// Every kind of command the parser can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    VolunteerCreate,
    VolunteerList,
    VolunteerDelete,
    VolunteerEdit,
    VolunteerFind,
    EventCreate,
    EventList,
    EventShow,
    EventDelete,
    EventEdit,
    EventAddVolunteer,
    EventRemoveVolunteer,
    Clear,
    Help,
    Exit,
}

impl CommandKind {
    /// All kinds, in help-listing order
    pub const ALL: [CommandKind; 15] = [
        Self::VolunteerCreate,
        Self::VolunteerList,
        Self::VolunteerDelete,
        Self::VolunteerEdit,
        Self::VolunteerFind,
        Self::EventCreate,
        Self::EventList,
        Self::EventShow,
        Self::EventDelete,
        Self::EventEdit,
        Self::EventAddVolunteer,
        Self::EventRemoveVolunteer,
        Self::Clear,
        Self::Help,
        Self::Exit,
    ];

    /// Command words that invoke this kind; the first is canonical
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::VolunteerCreate => &["vcreate", "vadd"],
            Self::VolunteerList => &["vlist", "vl"],
            Self::VolunteerDelete => &["vdelete", "vdel"],
            Self::VolunteerEdit => &["vedit", "ve"],
            Self::VolunteerFind => &["vfind", "vf"],
            Self::EventCreate => &["ecreate", "eadd"],
            Self::EventList => &["elist", "el"],
            Self::EventShow => &["eshow", "es"],
            Self::EventDelete => &["edelete", "edel"],
            Self::EventEdit => &["eedit", "ee"],
            Self::EventAddVolunteer => &["eaddv", "assign"],
            Self::EventRemoveVolunteer => &["eremovev", "unassign"],
            Self::Clear => &["clear", "vclear"],
            Self::Help => &["help", "h"],
            Self::Exit => &["exit", "quit"],
        }
    }

    pub fn word(self) -> &'static str {
        self.aliases()[0]
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::VolunteerCreate => VOLUNTEER_CREATE_USAGE,
            Self::VolunteerList => VOLUNTEER_LIST_USAGE,
            Self::VolunteerDelete => VOLUNTEER_DELETE_USAGE,
            Self::VolunteerEdit => VOLUNTEER_EDIT_USAGE,
            Self::VolunteerFind => VOLUNTEER_FIND_USAGE,
            Self::EventCreate => EVENT_CREATE_USAGE,
            Self::EventList => EVENT_LIST_USAGE,
            Self::EventShow => EVENT_SHOW_USAGE,
            Self::EventDelete => EVENT_DELETE_USAGE,
            Self::EventEdit => EVENT_EDIT_USAGE,
            Self::EventAddVolunteer => EVENT_ADD_VOLUNTEER_USAGE,
            Self::EventRemoveVolunteer => EVENT_REMOVE_VOLUNTEER_USAGE,
            Self::Clear => CLEAR_USAGE,
            Self::Help => HELP_USAGE,
            Self::Exit => EXIT_USAGE,
        }
    }

    /// Whether anything after the command word is read at all
    pub fn takes_arguments(self) -> bool {
        !matches!(
            self,
            Self::VolunteerList | Self::EventList | Self::Clear | Self::Help | Self::Exit
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A parsed, fully validated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    VolunteerCreate { volunteer: Volunteer },
    VolunteerList,
    VolunteerDelete { index: Index },
    VolunteerEdit {
        index: Index,
        descriptor: EditVolunteerDescriptor,
    },
    VolunteerFind { predicate: NameContainsKeywords },
    EventCreate { event: Event },
    EventList,
    EventShow { index: Index },
    EventDelete { index: Index },
    EventEdit {
        index: Index,
        descriptor: EditEventDescriptor,
    },
    EventAddVolunteer {
        event_index: Index,
        volunteer_index: Index,
    },
    EventRemoveVolunteer {
        event_index: Index,
        volunteer_index: Index,
    },
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::VolunteerCreate { .. } => CommandKind::VolunteerCreate,
            Self::VolunteerList => CommandKind::VolunteerList,
            Self::VolunteerDelete { .. } => CommandKind::VolunteerDelete,
            Self::VolunteerEdit { .. } => CommandKind::VolunteerEdit,
            Self::VolunteerFind { .. } => CommandKind::VolunteerFind,
            Self::EventCreate { .. } => CommandKind::EventCreate,
            Self::EventList => CommandKind::EventList,
            Self::EventShow { .. } => CommandKind::EventShow,
            Self::EventDelete { .. } => CommandKind::EventDelete,
            Self::EventEdit { .. } => CommandKind::EventEdit,
            Self::EventAddVolunteer { .. } => CommandKind::EventAddVolunteer,
            Self::EventRemoveVolunteer { .. } => CommandKind::EventRemoveVolunteer,
            Self::Clear => CommandKind::Clear,
            Self::Help => CommandKind::Help,
            Self::Exit => CommandKind::Exit,
        }
    }

    /// True for the command that ends an interactive session
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().word())?;

        match self {
            Self::VolunteerCreate { volunteer } => {
                write_field(f, PREFIX_NAME, volunteer.name())?;
                write_field(f, PREFIX_PHONE, volunteer.phone())?;
                write_field(f, PREFIX_EMAIL, volunteer.email())?;
                write_set(f, PREFIX_SKILL, volunteer.skills())
            }
            Self::VolunteerEdit { index, descriptor } => {
                write!(f, " {index}")?;
                write_optional(f, PREFIX_NAME, descriptor.name.as_ref())?;
                write_optional(f, PREFIX_PHONE, descriptor.phone.as_ref())?;
                write_optional(f, PREFIX_EMAIL, descriptor.email.as_ref())?;
                write_replacement_set(f, PREFIX_SKILL, descriptor.skills.as_ref())
            }
            Self::VolunteerFind { predicate } => {
                for keyword in predicate.keywords() {
                    write!(f, " {keyword}")?;
                }
                Ok(())
            }
            Self::EventCreate { event } => {
                write_field(f, PREFIX_NAME, event.name())?;
                write_set(f, PREFIX_ROLE, event.roles())?;
                write_field(f, PREFIX_DATE_TIME, &event.date_time())?;
                write_field(f, PREFIX_LOCATION, event.location())?;
                write_field(f, PREFIX_DESCRIPTION, event.description())?;
                write_set(f, PREFIX_MATERIAL, event.materials())?;
                write_optional(f, PREFIX_BUDGET, event.budget())
            }
            Self::EventEdit { index, descriptor } => {
                write!(f, " {index}")?;
                write_optional(f, PREFIX_NAME, descriptor.name.as_ref())?;
                write_replacement_set(f, PREFIX_ROLE, descriptor.roles.as_ref())?;
                write_optional(f, PREFIX_DATE_TIME, descriptor.date_time.as_ref())?;
                write_optional(f, PREFIX_LOCATION, descriptor.location.as_ref())?;
                write_optional(f, PREFIX_DESCRIPTION, descriptor.description.as_ref())?;
                write_replacement_set(f, PREFIX_MATERIAL, descriptor.materials.as_ref())?;
                write_optional(f, PREFIX_BUDGET, descriptor.budget.as_ref())
            }
            Self::VolunteerDelete { index }
            | Self::EventShow { index }
            | Self::EventDelete { index } => write!(f, " {index}"),
            Self::EventAddVolunteer {
                event_index,
                volunteer_index,
            }
            | Self::EventRemoveVolunteer {
                event_index,
                volunteer_index,
            } => {
                write_field(f, PREFIX_EVENT_INDEX, event_index)?;
                write_field(f, PREFIX_VOLUNTEER_INDEX, volunteer_index)
            }
            Self::VolunteerList | Self::EventList | Self::Clear | Self::Help | Self::Exit => Ok(()),
        }
    }
}

fn write_field(
    f: &mut fmt::Formatter<'_>,
    prefix: Prefix,
    value: &impl fmt::Display,
) -> fmt::Result {
    write!(f, " {prefix}{value}")
}

fn write_optional<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    prefix: Prefix,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        Some(value) => write_field(f, prefix, value),
        None => Ok(()),
    }
}

fn write_set<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    prefix: Prefix,
    values: &BTreeSet<T>,
) -> fmt::Result {
    for value in values {
        write_field(f, prefix, value)?;
    }
    Ok(())
}

/// An edit's set field: absent, cleared (bare marker), or replaced
fn write_replacement_set<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    prefix: Prefix,
    values: Option<&BTreeSet<T>>,
) -> fmt::Result {
    match values {
        None => Ok(()),
        Some(values) if values.is_empty() => write!(f, " {prefix}"),
        Some(values) => write_set(f, prefix, values),
    }
}
