use thiserror::Error;

use crate::field::Field;

/// Errors from calendar configuration and field mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("{value} is outside the valid {field} range")]
    FieldOutOfRange { field: Field, value: i64 },

    #[error("Calendar cannot apply a {field} delta of {delta}")]
    CalendarOverflow { field: Field, delta: i64 },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    Core(#[from] useful_core::error::CoreError),
}

pub type TemporalResult<T> = std::result::Result<T, TemporalError>;
