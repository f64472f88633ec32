// crates/roster-core/src/syntax.rs - Field markers recognised in argument tails

use serde::Serialize;
use std::fmt;

/// A field marker such as `n/` that introduces a value in an argument tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Volunteer fields
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_SKILL: Prefix = Prefix::new("s/");

// Event fields (events reuse `n/` for their name)
pub const PREFIX_ROLE: Prefix = Prefix::new("r/");
pub const PREFIX_DATE_TIME: Prefix = Prefix::new("d/");
pub const PREFIX_LOCATION: Prefix = Prefix::new("l/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("dsc/");
pub const PREFIX_MATERIAL: Prefix = Prefix::new("m/");
pub const PREFIX_BUDGET: Prefix = Prefix::new("b/");

// Assignment
pub const PREFIX_EVENT_INDEX: Prefix = Prefix::new("ei/");
pub const PREFIX_VOLUNTEER_INDEX: Prefix = Prefix::new("vi/");

pub const VOLUNTEER_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_SKILL];

pub const EVENT_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_ROLE,
    PREFIX_DATE_TIME,
    PREFIX_LOCATION,
    PREFIX_DESCRIPTION,
    PREFIX_MATERIAL,
    PREFIX_BUDGET,
];

pub const ASSIGNMENT_PREFIXES: &[Prefix] = &[PREFIX_EVENT_INDEX, PREFIX_VOLUNTEER_INDEX];
