//! Error types for parsing and validating clock times.

use std::fmt;

/// One of the three fields of a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    pub fn name(self) -> &'static str {
        match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        }
    }

    /// Inclusive upper bound accepted for this field.
    pub fn max(self) -> u32 {
        match self {
            TimeField::Hours => 24,
            TimeField::Minutes | TimeField::Seconds => 59,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Custom error type for clock time parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange { field: TimeField, value: String, min: u32, max: u32 },
}

impl ClockError {
    pub(crate) fn out_of_range(field: TimeField, value: impl Into<String>) -> Self {
        ClockError::OutOfRange { field, value: value.into(), min: 0, max: field.max() }
    }

    /// The field the error refers to, when there is one.
    pub fn field(&self) -> Option<TimeField> {
        match self {
            ClockError::InvalidFormat(_) => None,
            ClockError::OutOfRange { field, .. } => Some(*field),
        }
    }
}
