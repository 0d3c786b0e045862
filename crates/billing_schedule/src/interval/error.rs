//! Interval calculation error types.

use billing_core::types::time::Date;
use thiserror::Error;

/// Errors caused by caller input that fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Length and unit do not form an accepted interval.
    ///
    /// Days must be within 7..=365 and months within 1..=12; any other unit
    /// label is rejected outright.
    #[error("Invalid interval length and unit combination: {length} {unit}")]
    InvalidLengthUnitCombo {
        /// The requested length.
        length: u32,
        /// The requested unit, as given.
        unit: String,
    },

    /// Occurrence number outside 1..=max.
    #[error("Occurrence {occurrence} is out of range (must be 1..={max})")]
    OccurrenceOutOfRange {
        /// The requested occurrence number.
        occurrence: u32,
        /// The largest valid occurrence number.
        max: u32,
    },
}

/// Errors raised when a computation cannot produce a date in range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// No occurrence within the occurrence ceiling falls after the date.
    #[error("No occurrence after {after} within {max_occurrences} occurrences")]
    SearchExhausted {
        /// The reference date of the search.
        after: Date,
        /// The occurrence ceiling that was reached.
        max_occurrences: u32,
    },

    /// The projected date lies outside the representable calendar.
    #[error("Date of occurrence {occurrence} is outside the supported calendar range")]
    DateOverflow {
        /// The occurrence whose date could not be represented.
        occurrence: u32,
    },
}

/// Any failure from an occurrence lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// Invalid caller input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Result outside the supported range.
    #[error(transparent)]
    Range(#[from] RangeError),
}
