// crates/roster-core/src/parser/mod.rs - Per-command argument parsers
//
// One function per command kind that takes arguments. Each receives the
// argument tail (everything after the command word) and either returns a
// complete `Command` or fails. The checks always run in the same order:
//
// 1. presence   required markers / index / keywords   -> MissingArgument
// 2. index      positive whole number                 -> InvalidField("index")
// 3. duplicates single-valued markers given twice     -> DuplicateField
// 4. fields     each value against its type's rule    -> InvalidField
// 5. change     edit commands must change something   -> NoChangeSpecified
//
// Helpers shared by the volunteer and event grammars live here.

pub mod event;
pub mod volunteer;

use std::collections::BTreeSet;

use crate::error::{ParseError, ParseResult};
use crate::field::FieldResult;
use crate::index::Index;
use crate::syntax::Prefix;
use crate::tokenizer::ArgumentMultimap;

pub use event::{
    parse_event_add_volunteer, parse_event_create, parse_event_delete, parse_event_edit,
    parse_event_remove_volunteer, parse_event_show,
};
pub use volunteer::{
    parse_volunteer_create, parse_volunteer_delete, parse_volunteer_edit, parse_volunteer_find,
};

/// Parse a whole argument tail as a single index
fn parse_index_argument(args: &str, usage: &'static str) -> ParseResult<Index> {
    let args = args.trim();
    if args.is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    Ok(Index::parse(args)?)
}

/// Parse the preamble of a tokenized tail as the target index
fn parse_index_preamble(map: &ArgumentMultimap, usage: &'static str) -> ParseResult<Index> {
    parse_index_argument(map.preamble(), usage)
}

/// Value of a marker the caller has already checked is present
fn required_value<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> ParseResult<&'a str> {
    map.value(prefix)
        .ok_or(ParseError::MissingArgument { usage })
}

fn parse_optional<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: impl Fn(&str) -> FieldResult<T>,
) -> ParseResult<Option<T>> {
    map.value(prefix)
        .map(parse)
        .transpose()
        .map_err(ParseError::from)
}

/// Every value of a multi-valued marker, duplicates collapsed
fn parse_set<T: Ord>(
    values: &[String],
    parse: impl Fn(&str) -> FieldResult<T>,
) -> ParseResult<BTreeSet<T>> {
    values
        .iter()
        .map(|value| parse(value.as_str()).map_err(ParseError::from))
        .collect()
}

/// A multi-valued marker in an edit command
///
/// Absent gives `None`. A single bare marker (`s/`) gives `Some` of the empty
/// set, meaning "clear". Anything else is parsed value by value.
fn parse_replacement_set<T: Ord>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: impl Fn(&str) -> FieldResult<T>,
) -> ParseResult<Option<BTreeSet<T>>> {
    match map.all_values(prefix) {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_set(values, parse).map(Some),
    }
}
