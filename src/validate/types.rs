//! Field names and rejection reasons.

use serde::Serialize;
use thiserror::Error;

/// The kind of value being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Username,
    PhoneNumber,
    NationalId,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Email => write!(f, "email"),
            Field::Username => write!(f, "username"),
            Field::PhoneNumber => write!(f, "phone number"),
            Field::NationalId => write!(f, "national ID"),
        }
    }
}

/// Why a value was rejected.
///
/// Checks short-circuit, so this is always the first failing stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The value was absent or the empty string.
    #[error("value is empty or absent")]
    Empty,

    /// The value does not match the field's grammar.
    #[error("value does not match the expected format")]
    Malformed,

    /// A username character is not a letter, digit or underscore.
    #[error("only letters, digits and underscores are allowed")]
    InvalidCharacter,

    /// A username is too short or too long.
    #[error("length {actual} is outside {min}..={max}")]
    LengthOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// The phone number's operator code is not in the allow-list.
    #[error("unknown operator code '{0}'")]
    UnknownOperator(String),

    /// A national ID is not exactly the required number of characters.
    #[error("expected {expected} characters, found {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A national ID contains something other than ASCII digits.
    #[error("contains a non-digit character")]
    NonDigit,

    /// The first national ID digit is neither `2` nor `3`.
    #[error("unknown century digit '{0}'")]
    UnknownCentury(char),

    /// The encoded birth date does not exist on the calendar.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The governorate code is not in the allow-list.
    #[error("unknown governorate code '{0}'")]
    UnknownGovernorate(String),
}
