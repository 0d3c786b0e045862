//! Validated interval definition.

use super::error::ValidationError;
use super::unit::IntervalUnit;
use std::fmt;
use std::str::FromStr;

/// A billing interval: `length` units of `unit` between occurrences.
///
/// Construction enforces the unit's length bounds, so every `Interval`
/// value is one the payment processor accepts.
///
/// # Examples
///
/// ```
/// use billing_schedule::interval::{Interval, IntervalUnit};
///
/// let monthly = Interval::new(1, IntervalUnit::Months).unwrap();
/// assert_eq!(monthly.to_string(), "1 month");
///
/// let fortnightly: Interval = "14 days".parse().unwrap();
/// assert_eq!(fortnightly.length(), 14);
///
/// assert!(Interval::new(6, IntervalUnit::Days).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct Interval {
    length: u32,
    unit: IntervalUnit,
}

impl Interval {
    /// Creates an interval after checking the length against the unit's bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLengthUnitCombo`] when the length is
    /// outside 7..=365 for days or 1..=12 for months.
    pub fn new(length: u32, unit: IntervalUnit) -> Result<Self, ValidationError> {
        if !unit.accepts(length) {
            return Err(ValidationError::InvalidLengthUnitCombo {
                length,
                unit: unit.name().to_string(),
            });
        }
        Ok(Self { length, unit })
    }

    /// Creates a day-based interval.
    pub fn days(length: u32) -> Result<Self, ValidationError> {
        Self::new(length, IntervalUnit::Days)
    }

    /// Creates a month-based interval.
    pub fn months(length: u32) -> Result<Self, ValidationError> {
        Self::new(length, IntervalUnit::Months)
    }

    /// Creates an interval from a textual unit label.
    ///
    /// Unknown labels are reported as an invalid combination, the same as an
    /// out-of-bounds length.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_schedule::interval::{Interval, ValidationError};
    ///
    /// assert!(Interval::with_unit_label(2, "months").is_ok());
    /// assert_eq!(
    ///     Interval::with_unit_label(2, "weeks"),
    ///     Err(ValidationError::InvalidLengthUnitCombo {
    ///         length: 2,
    ///         unit: "weeks".to_string(),
    ///     })
    /// );
    /// ```
    pub fn with_unit_label(length: u32, unit: &str) -> Result<Self, ValidationError> {
        let parsed =
            IntervalUnit::from_str(unit).map_err(|_| ValidationError::InvalidLengthUnitCombo {
                length,
                unit: unit.to_string(),
            })?;
        Self::new(length, parsed)
    }

    /// Returns the number of units per interval.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the interval unit.
    #[inline]
    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.length == 1 {
            self.unit.singular_name()
        } else {
            self.unit.name()
        };
        write!(f, "{} {}", self.length, label)
    }
}

impl FromStr for Interval {
    type Err = String;

    /// Parses `"<length> <unit>"`, e.g. `"30 days"` or `"1 month"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(length), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Expected \"<length> <unit>\", got: {}", s));
        };
        let length: u32 = length
            .parse()
            .map_err(|_| format!("Invalid interval length: {}", length))?;
        Interval::with_unit_label(length, unit).map_err(|e| e.to_string())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval {
    length: u32,
    unit: IntervalUnit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for Interval {
    type Error = ValidationError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.length, raw.unit)
    }
}
