//! IntervalCalculator implementation.

use super::definition::Interval;
use super::error::{IntervalError, RangeError, ValidationError};
use super::occurrence::Occurrences;
use super::unit::IntervalUnit;
use billing_core::types::time::Date;

/// Largest occurrence number a subscription may have.
///
/// This is the processor's ceiling on total billing cycles and bounds every
/// lookup and search.
pub const MAX_OCCURRENCES: u32 = 9999;

/// Occurrence dates for a subscription with a fixed start date and interval.
///
/// Occurrence 1 is the start date. Occurrence `n` lies `(n - 1) * length`
/// units after it, each computed directly from the start date, so month-end
/// adjustments never accumulate from one occurrence to the next.
///
/// The calculator is immutable and `Copy`; queries are pure and may be made
/// from any number of threads concurrently.
///
/// # Examples
///
/// ```
/// use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
/// use billing_core::types::Date;
///
/// let calc = IntervalCalculator::new(
///     30,
///     IntervalUnit::Days,
///     Date::from_ymd(2019, 2, 1).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(calc.date_of_occurrence(1).unwrap(), calc.start_date());
/// assert_eq!(
///     calc.date_of_occurrence(2).unwrap(),
///     Date::from_ymd(2019, 3, 3).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalCalculator {
    /// Validated interval between occurrences.
    interval: Interval,
    /// Date of occurrence 1.
    start_date: Date,
}

impl IntervalCalculator {
    /// Creates a calculator for `length` units of `unit` starting on `start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLengthUnitCombo`] if the length is
    /// outside 7..=365 for days or 1..=12 for months.
    pub fn new(length: u32, unit: IntervalUnit, start_date: Date) -> Result<Self, ValidationError> {
        let interval = Interval::new(length, unit)?;
        Ok(Self::from_interval(interval, start_date))
    }

    /// Creates a calculator from a textual unit label such as `"days"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLengthUnitCombo`] for an unknown
    /// label or an out-of-bounds length.
    pub fn with_unit_label(
        length: u32,
        unit: &str,
        start_date: Date,
    ) -> Result<Self, ValidationError> {
        let interval = Interval::with_unit_label(length, unit)?;
        Ok(Self::from_interval(interval, start_date))
    }

    /// Creates a calculator from an already validated interval.
    #[inline]
    pub fn from_interval(interval: Interval, start_date: Date) -> Self {
        Self {
            interval,
            start_date,
        }
    }

    /// Returns the date of occurrence 1.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the number of units per interval.
    #[inline]
    pub fn length(&self) -> u32 {
        self.interval.length()
    }

    /// Returns the interval unit.
    #[inline]
    pub fn unit(&self) -> IntervalUnit {
        self.interval.unit()
    }

    /// Returns the interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the date of the given occurrence.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OccurrenceOutOfRange`] if `occurrence` is not in
    ///   `1..=MAX_OCCURRENCES`
    /// - [`RangeError::DateOverflow`] if the date is beyond the supported calendar
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
    /// use billing_core::types::Date;
    ///
    /// let calc = IntervalCalculator::new(
    ///     1,
    ///     IntervalUnit::Months,
    ///     Date::from_ymd(2020, 1, 31).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// // 2020 is a leap year
    /// assert_eq!(
    ///     calc.date_of_occurrence(2).unwrap(),
    ///     Date::from_ymd(2020, 2, 29).unwrap()
    /// );
    /// assert!(calc.date_of_occurrence(0).is_err());
    /// ```
    pub fn date_of_occurrence(&self, occurrence: u32) -> Result<Date, IntervalError> {
        if !(1..=MAX_OCCURRENCES).contains(&occurrence) {
            return Err(ValidationError::OccurrenceOutOfRange {
                occurrence,
                max: MAX_OCCURRENCES,
            }
            .into());
        }
        Ok(self.project(occurrence)?)
    }

    /// Returns the first occurrence date strictly after `after`.
    ///
    /// Occurrences are scanned in order from occurrence 1, so if `after`
    /// precedes the start date the start date itself is returned.
    ///
    /// # Errors
    ///
    /// - [`RangeError::SearchExhausted`] if no occurrence up to
    ///   `MAX_OCCURRENCES` is after `after`
    /// - [`RangeError::DateOverflow`] if the scan runs past the supported calendar
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
    /// use billing_core::types::Date;
    ///
    /// let calc = IntervalCalculator::new(
    ///     7,
    ///     IntervalUnit::Days,
    ///     Date::from_ymd(2019, 1, 2).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let next = calc
    ///     .first_occurrence_after(Date::from_ymd(2019, 1, 20).unwrap())
    ///     .unwrap();
    /// assert_eq!(next, Date::from_ymd(2019, 1, 23).unwrap());
    /// ```
    pub fn first_occurrence_after(&self, after: Date) -> Result<Date, RangeError> {
        for occurrence in 1..=MAX_OCCURRENCES {
            let date = self.project(occurrence)?;
            if date > after {
                return Ok(date);
            }
        }
        Err(RangeError::SearchExhausted {
            after,
            max_occurrences: MAX_OCCURRENCES,
        })
    }

    /// Returns an iterator over all occurrences, starting with occurrence 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
    /// use billing_core::types::Date;
    ///
    /// let calc = IntervalCalculator::new(
    ///     3,
    ///     IntervalUnit::Months,
    ///     Date::from_ymd(2019, 3, 31).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let dates: Vec<String> = calc
    ///     .occurrences()
    ///     .take(3)
    ///     .map(|o| o.date().to_string())
    ///     .collect();
    /// assert_eq!(dates, ["2019-03-31", "2019-06-30", "2019-09-30"]);
    /// ```
    pub fn occurrences(&self) -> Occurrences {
        Occurrences::new(*self)
    }

    /// Projects occurrence `occurrence` (already known to be in range).
    pub(crate) fn project(&self, occurrence: u32) -> Result<Date, RangeError> {
        // At most 9998 * 365, well inside u32
        let periods = (occurrence - 1) * self.interval.length();

        let projected = match self.interval.unit() {
            IntervalUnit::Days => self.start_date.checked_add_days(u64::from(periods)),
            IntervalUnit::Months => self.project_months(periods),
        };

        projected.ok_or(RangeError::DateOverflow { occurrence })
    }

    /// Adds `months` to the start date, landing on the last day of the target
    /// month when the start day-of-month does not exist there.
    fn project_months(&self, months: u32) -> Option<Date> {
        let start_day = self.start_date.day();
        let candidate = self.start_date.checked_add_months(months)?;

        if candidate.day() == start_day {
            Some(candidate)
        } else {
            Some(candidate.end_of_month())
        }
    }
}
