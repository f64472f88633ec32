// crates/roster-core/src/field.rs - Validated record field values
//
// Every value that reaches a `Command` passes through one of these types.
// Construction is the only validation point: if you hold a `Phone`, it is a
// valid phone number.
//
// VALUE RULES:
// - Name, EventName        alphanumeric words separated by spaces
// - Skill, Role, Material  alphanumeric words separated by spaces
// - Phone                  at least 3 digits, nothing else
// - Email                  local-part@domain (see Email::CONSTRAINT)
// - Location, Description  any text that does not start with whitespace
// - Budget                 non-negative amount, at most 2 decimal places
// - DateTime               d/M/yyyy HHmm, e.g. "23/10/2023 1800"

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// A value that failed its field's validation rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct FieldError {
    /// Human-readable field name, e.g. "phone" or "event index"
    pub field: &'static str,
    /// The rule the value broke
    pub constraint: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }

    /// Same failure reported against a differently named field
    pub fn for_field(self, field: &'static str) -> Self {
        Self { field, ..self }
    }
}

/// Result type for field validation
pub type FieldResult<T> = Result<T, FieldError>;

/// Declares a string-backed field type checked against a regex.
macro_rules! validated_field {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            pattern: $pattern:literal,
            constraint: $constraint:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const CONSTRAINT: &'static str = $constraint;

            /// Check a raw value against this field's rule
            pub fn is_valid(value: &str) -> bool {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                PATTERN
                    .get_or_init(|| Regex::new($pattern).expect("field pattern compiles"))
                    .is_match(value)
            }

            /// Validate a raw value; surrounding whitespace is ignored
            pub fn parse(value: &str) -> FieldResult<Self> {
                let value = value.trim();
                if !Self::is_valid(value) {
                    return Err(FieldError::new(Self::FIELD, Self::CONSTRAINT));
                }
                Ok(Self(value.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> FieldResult<Self> {
                Self::parse(s)
            }
        }
    };
}

validated_field! {
    /// Volunteer name
    Name {
        field: "name",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
        constraint: "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    }
}

validated_field! {
    /// Volunteer phone number
    Phone {
        field: "phone",
        pattern: r"^[0-9]{3,}$",
        constraint: "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    }
}

validated_field! {
    /// Volunteer email address
    ///
    /// The local part is alphanumeric runs joined by single `+`, `_`, `.` or `-`.
    /// The domain is labels of alphanumeric runs joined by hyphens, separated
    /// by periods, and the final label has at least two characters.
    Email {
        field: "email",
        pattern: r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*){2,}$",
        constraint: "Emails should be of the format local-part@domain, where the local-part is alphanumeric characters optionally separated by one of +_.- and the domain is period-separated labels whose last label is at least 2 characters long",
    }
}

validated_field! {
    /// Something a volunteer can do
    Skill {
        field: "skill",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
        constraint: "Skills should only contain alphanumeric characters and spaces, and it should not be blank",
    }
}

validated_field! {
    EventName {
        field: "event name",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
        constraint: "Event names should only contain alphanumeric characters and spaces, and it should not be blank",
    }
}

validated_field! {
    /// A role an event needs filled
    Role {
        field: "role",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
        constraint: "Roles should only contain alphanumeric characters and spaces, and it should not be blank",
    }
}

validated_field! {
    Location {
        field: "location",
        pattern: r"^\S.*$",
        constraint: "Locations can take any values, and it should not be blank",
    }
}

validated_field! {
    Description {
        field: "description",
        pattern: r"^\S.*$",
        constraint: "Descriptions can take any values, and it should not be blank",
    }
}

validated_field! {
    /// Something an event needs brought along
    Material {
        field: "material",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
        constraint: "Materials should only contain alphanumeric characters and spaces, and it should not be blank",
    }
}

validated_field! {
    Budget {
        field: "budget",
        pattern: r"^[0-9]+(?:\.[0-9]{1,2})?$",
        constraint: "Budgets should be a non-negative amount with at most 2 decimal places, e.g. 50 or 50.00",
    }
}

/// When an event takes place, accurate to the minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    pub const FIELD: &'static str = "date and time";
    pub const CONSTRAINT: &'static str =
        "Date and time should be in the format d/M/yyyy HHmm, e.g. 23/10/2023 1800, and be a real date and time";

    const INPUT_FORMAT: &'static str = "%d/%m/%Y %H%M";
    const DISPLAY_FORMAT: &'static str = "%-d/%-m/%Y %H%M";

    /// Check the textual shape and the calendar
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn parse(value: &str) -> FieldResult<Self> {
        static SHAPE: OnceLock<Regex> = OnceLock::new();
        let value = value.trim();

        // chrono alone is lenient about widths and inner whitespace
        let shape = SHAPE.get_or_init(|| {
            Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4} [0-9]{4}$").expect("date pattern compiles")
        });
        if !shape.is_match(value) {
            return Err(FieldError::new(Self::FIELD, Self::CONSTRAINT));
        }

        NaiveDateTime::parse_from_str(value, Self::INPUT_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(Self::FIELD, Self::CONSTRAINT))
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}

impl FromStr for DateTime {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}
