// crates/roster-core/src/index.rs - Positional references into displayed lists
//
// Users see lists numbered from 1; storage is indexed from 0. `Index` keeps
// both views behind one type so the off-by-one lives in exactly one place.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::field::{FieldError, FieldResult};

/// Shown for an index that is not a positive whole number
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// A 1-based position in a displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Index(NonZeroU32);

impl Index {
    pub const FIELD: &'static str = "index";

    /// Create from a 1-based position; `None` for zero
    pub fn from_one_based(position: u32) -> Option<Self> {
        NonZeroU32::new(position).map(Self)
    }

    /// Create from a 0-based offset; `None` if it cannot be shown 1-based
    pub fn from_zero_based(offset: usize) -> Option<Self> {
        let position = u32::try_from(offset).ok()?.checked_add(1)?;
        Self::from_one_based(position)
    }

    /// Parse user text as a 1-based index
    ///
    /// Accepts digits only: no sign, no spaces inside, no zero, nothing that
    /// overflows `u32`.
    pub fn parse(value: &str) -> FieldResult<Self> {
        let value = value.trim();
        let invalid = || FieldError::new(Self::FIELD, MESSAGE_INVALID_INDEX);

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        value.parse::<NonZeroU32>().map(Self).map_err(|_| invalid())
    }

    pub fn one_based(&self) -> u32 {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        // u32 always fits in usize on supported targets
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}
