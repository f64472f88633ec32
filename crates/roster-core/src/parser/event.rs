// crates/roster-core/src/parser/event.rs - Event command grammars

use tracing::debug;

use super::{
    parse_index_argument, parse_index_preamble, parse_optional, parse_replacement_set, parse_set,
    required_value,
};
use crate::command::{
    Command, EVENT_ADD_VOLUNTEER_USAGE, EVENT_CREATE_USAGE, EVENT_DELETE_USAGE, EVENT_EDIT_USAGE,
    EVENT_REMOVE_VOLUNTEER_USAGE, EVENT_SHOW_USAGE,
};
use crate::error::{ParseError, ParseResult};
use crate::field::{Budget, DateTime, Description, EventName, Location, Material, Role};
use crate::index::Index;
use crate::model::{EditEventDescriptor, Event};
use crate::syntax::{
    ASSIGNMENT_PREFIXES, EVENT_PREFIXES, PREFIX_BUDGET, PREFIX_DATE_TIME, PREFIX_DESCRIPTION,
    PREFIX_EVENT_INDEX, PREFIX_LOCATION, PREFIX_MATERIAL, PREFIX_NAME, PREFIX_ROLE,
    PREFIX_VOLUNTEER_INDEX, Prefix,
};
use crate::tokenizer::tokenize;

const SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_DATE_TIME,
    PREFIX_LOCATION,
    PREFIX_DESCRIPTION,
    PREFIX_BUDGET,
];

/// `n/NAME r/ROLE [r/ROLE]... d/DATE_AND_TIME l/LOCATION dsc/DESCRIPTION [m/MATERIAL]... [b/BUDGET]`
pub fn parse_event_create(args: &str) -> ParseResult<Command> {
    let usage = EVENT_CREATE_USAGE;
    let map = tokenize(args, EVENT_PREFIXES);

    let required = [
        PREFIX_NAME,
        PREFIX_ROLE,
        PREFIX_DATE_TIME,
        PREFIX_LOCATION,
        PREFIX_DESCRIPTION,
    ];
    if !map.contains_all(&required) || !map.preamble().is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    map.verify_no_duplicates(SINGLE_VALUED)?;

    let name = EventName::parse(required_value(&map, PREFIX_NAME, usage)?)?;
    let roles = parse_set(map.all_values(PREFIX_ROLE), Role::parse)?;
    let date_time = DateTime::parse(required_value(&map, PREFIX_DATE_TIME, usage)?)?;
    let location = Location::parse(required_value(&map, PREFIX_LOCATION, usage)?)?;
    let description = Description::parse(required_value(&map, PREFIX_DESCRIPTION, usage)?)?;
    let materials = parse_set(map.all_values(PREFIX_MATERIAL), Material::parse)?;
    let budget = parse_optional(&map, PREFIX_BUDGET, Budget::parse)?;

    let event = Event::new(
        name,
        roles,
        date_time,
        location,
        description,
        materials,
        budget,
    )?;
    Ok(Command::EventCreate { event })
}

/// `INDEX`
pub fn parse_event_show(args: &str) -> ParseResult<Command> {
    let index = parse_index_argument(args, EVENT_SHOW_USAGE)?;
    Ok(Command::EventShow { index })
}

/// `INDEX`
pub fn parse_event_delete(args: &str) -> ParseResult<Command> {
    let index = parse_index_argument(args, EVENT_DELETE_USAGE)?;
    Ok(Command::EventDelete { index })
}

/// `INDEX` followed by any event field
///
/// Roles may be replaced but not cleared; a bare `r/` is an invalid role.
pub fn parse_event_edit(args: &str) -> ParseResult<Command> {
    let usage = EVENT_EDIT_USAGE;
    let map = tokenize(args, EVENT_PREFIXES);

    let index = parse_index_preamble(&map, usage)?;
    map.verify_no_duplicates(SINGLE_VALUED)?;

    let roles = match map.all_values(PREFIX_ROLE) {
        [] => None,
        values => Some(parse_set(values, Role::parse)?),
    };

    let descriptor = EditEventDescriptor {
        name: parse_optional(&map, PREFIX_NAME, EventName::parse)?,
        roles,
        date_time: parse_optional(&map, PREFIX_DATE_TIME, DateTime::parse)?,
        location: parse_optional(&map, PREFIX_LOCATION, Location::parse)?,
        description: parse_optional(&map, PREFIX_DESCRIPTION, Description::parse)?,
        materials: parse_replacement_set(&map, PREFIX_MATERIAL, Material::parse)?,
        budget: parse_optional(&map, PREFIX_BUDGET, Budget::parse)?,
    };

    if !descriptor.is_any_field_edited() {
        debug!(%index, "event edit names no field");
        return Err(ParseError::NoChangeSpecified { usage });
    }

    Ok(Command::EventEdit { index, descriptor })
}

/// `ei/EVENT_INDEX vi/VOLUNTEER_INDEX`
pub fn parse_event_add_volunteer(args: &str) -> ParseResult<Command> {
    let (event_index, volunteer_index) = parse_assignment(args, EVENT_ADD_VOLUNTEER_USAGE)?;
    Ok(Command::EventAddVolunteer {
        event_index,
        volunteer_index,
    })
}

/// `ei/EVENT_INDEX vi/VOLUNTEER_INDEX`
pub fn parse_event_remove_volunteer(args: &str) -> ParseResult<Command> {
    let (event_index, volunteer_index) = parse_assignment(args, EVENT_REMOVE_VOLUNTEER_USAGE)?;
    Ok(Command::EventRemoveVolunteer {
        event_index,
        volunteer_index,
    })
}

fn parse_assignment(args: &str, usage: &'static str) -> ParseResult<(Index, Index)> {
    let map = tokenize(args, ASSIGNMENT_PREFIXES);

    if !map.contains_all(ASSIGNMENT_PREFIXES) || !map.preamble().is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    map.verify_no_duplicates(ASSIGNMENT_PREFIXES)?;

    let event_index = Index::parse(required_value(&map, PREFIX_EVENT_INDEX, usage)?)
        .map_err(|e| e.for_field("event index"))?;
    let volunteer_index = Index::parse(required_value(&map, PREFIX_VOLUNTEER_INDEX, usage)?)
        .map_err(|e| e.for_field("volunteer index"))?;

    Ok((event_index, volunteer_index))
}
