//! Billing interval calculation.
//!
//! This module provides:
//! - [`IntervalCalculator`]: Occurrence dates for a subscription start date and interval
//! - [`Interval`]: A validated `(length, unit)` pair
//! - [`IntervalUnit`]: Interval granularity (days or calendar months)
//! - [`Occurrence`] / [`Occurrences`]: Numbered occurrence dates and their iterator
//!
//! # Examples
//!
//! ```
//! use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
//! use billing_core::types::Date;
//!
//! let calc = IntervalCalculator::new(
//!     1,
//!     IntervalUnit::Months,
//!     Date::from_ymd(2019, 1, 31).unwrap(),
//! )
//! .unwrap();
//!
//! // February has no 31st: the occurrence lands on the last day of February
//! assert_eq!(
//!     calc.date_of_occurrence(2).unwrap(),
//!     Date::from_ymd(2019, 2, 28).unwrap()
//! );
//! ```

mod calculator;
mod definition;
mod error;
mod occurrence;
mod unit;

pub use calculator::{IntervalCalculator, MAX_OCCURRENCES};
pub use definition::Interval;
pub use error::{IntervalError, RangeError, ValidationError};
pub use occurrence::{Occurrence, Occurrences};
pub use unit::IntervalUnit;
