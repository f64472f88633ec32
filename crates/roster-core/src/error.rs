// crates/roster-core/src/error.rs - Parse failure taxonomy
//
// Every way a command line can be rejected. All variants are recoverable:
// the caller reports the message and asks for another line.

use thiserror::Error;

use crate::field::FieldError;

/// Fixed message for a command word that matches no alias
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// Prefix shared by every "wrong shape" failure, followed by the usage text
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! ";

/// Shown when an edit command names an index but no field to change
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Errors that can occur while turning a line into a `Command`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty or whitespace only. Carries the help usage text.
    #[error("{}\n{usage}", MESSAGE_INVALID_COMMAND_FORMAT)]
    EmptyInput { usage: &'static str },

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// A required marker, index or keyword was absent, or the preamble had
    /// the wrong shape. Carries the usage text of the command that was asked for.
    #[error("{}\n{usage}", MESSAGE_INVALID_COMMAND_FORMAT)]
    MissingArgument { usage: &'static str },

    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Multiple values specified for the following single-valued field(s): {}", .markers.join(" "))]
    DuplicateField { markers: Vec<String> },

    #[error("{}\n{usage}", MESSAGE_NOT_EDITED)]
    NoChangeSpecified { usage: &'static str },
}

impl ParseError {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "empty_input",
            Self::UnknownCommand => "unknown_command",
            Self::MissingArgument { .. } => "missing_argument",
            Self::InvalidField { .. } => "invalid_field",
            Self::DuplicateField { .. } => "duplicate_field",
            Self::NoChangeSpecified { .. } => "no_change_specified",
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(error: FieldError) -> Self {
        Self::InvalidField {
            field: error.field,
            message: error.constraint.to_string(),
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
