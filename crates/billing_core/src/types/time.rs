//! Calendar date type for billing calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Checked calendar arithmetic (whole days, whole months)
//! - Month-end helpers used by month-based billing intervals
//!
//! # Examples
//!
//! ```
//! use billing_core::types::time::Date;
//!
//! let start = Date::from_ymd(2020, 1, 31).unwrap();
//! let candidate = start.checked_add_months(1).unwrap();
//!
//! // February 2020 has 29 days
//! assert_eq!(candidate, Date::from_ymd(2020, 2, 29).unwrap());
//! assert!(candidate.is_end_of_month());
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// A `Date` is a plain calendar date with no time or zone component. It is
/// `Copy`, so any value handed to a calculator is a snapshot: changing the
/// caller's binding afterwards cannot affect stored state.
///
/// # Examples
///
/// ```
/// use billing_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2019, 3, 31).unwrap();
/// assert_eq!(date.year(), 2019);
/// assert_eq!(date.month(), 3);
/// assert_eq!(date.day(), 31);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2019-03-31".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2019, 2, 1).unwrap();
/// let end = Date::from_ymd(2019, 3, 3).unwrap();
/// assert_eq!(end - start, 30);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2019)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2020, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2019, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let date = Date::parse("2019-01-02").unwrap();
    /// assert_eq!(date.day(), 2);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a whole number of calendar days.
    ///
    /// Returns `None` if the result falls outside chrono's representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2019, 12, 31).unwrap();
    /// assert_eq!(
    ///     start.checked_add_days(14),
    ///     Some(Date::from_ymd(2020, 1, 14).unwrap())
    /// );
    /// ```
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Date)
    }

    /// Adds a whole number of calendar months.
    ///
    /// When the target month is shorter than the source day-of-month, the
    /// result is clamped to the last day of the target month (chrono
    /// semantics), so the day-of-month of the result may be smaller than
    /// the source's. Returns `None` if the result falls outside chrono's
    /// representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2019, 1, 31).unwrap();
    /// assert_eq!(
    ///     start.checked_add_months(1),
    ///     Some(Date::from_ymd(2019, 2, 28).unwrap())
    /// );
    /// assert_eq!(
    ///     start.checked_add_months(2),
    ///     Some(Date::from_ymd(2019, 3, 31).unwrap())
    /// );
    /// ```
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }

    /// Returns whether the year of this date is a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in this date's month (28-31).
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2019, 2, 10).unwrap().days_in_month(), 28);
    /// assert_eq!(Date::from_ymd(2020, 2, 10).unwrap().days_in_month(), 29);
    /// assert_eq!(Date::from_ymd(2019, 4, 10).unwrap().days_in_month(), 30);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the last day of this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 3).unwrap();
    /// assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn end_of_month(&self) -> Self {
        // with_day cannot fail: days_in_month is always a valid day for this month
        Date(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Returns whether this date is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

/// Gregorian leap year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_from_ymd_valid() {
        let d = date(2019, 1, 2);
        assert_eq!(d.year(), 2019);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 2);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert_eq!(
            Date::from_ymd(2019, 2, 29),
            Err(DateError::InvalidDate {
                year: 2019,
                month: 2,
                day: 29
            })
        );
        assert!(Date::from_ymd(2019, 13, 1).is_err());
        assert!(Date::from_ymd(2019, 4, 31).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2020-02-29".parse().unwrap();
        assert_eq!(d, date(2020, 2, 29));
        assert_eq!(d.to_string(), "2020-02-29");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Date::parse(" 2019-06-30\n").unwrap(), date(2019, 6, 30));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Date::parse("2019/01/02"),
            Err(DateError::ParseError(_))
        ));
        assert!(matches!(
            Date::parse("2019-02-30"),
            Err(DateError::ParseError(_))
        ));
        assert!(matches!(Date::parse(""), Err(DateError::ParseError(_))));
    }

    #[test]
    fn test_add_days_across_year() {
        assert_eq!(date(2019, 12, 31).checked_add_days(14), Some(date(2020, 1, 14)));
        assert_eq!(date(2019, 1, 2).checked_add_days(365), Some(date(2020, 1, 2)));
        // 2020 is a leap year
        assert_eq!(date(2020, 1, 2).checked_add_days(365), Some(date(2021, 1, 1)));
    }

    #[test]
    fn test_add_days_zero() {
        assert_eq!(date(2019, 1, 2).checked_add_days(0), Some(date(2019, 1, 2)));
    }

    #[test]
    fn test_add_days_overflow() {
        let max = Date::from(NaiveDate::MAX);
        assert_eq!(max.checked_add_days(1), None);
    }

    #[test]
    fn test_add_months_clean() {
        assert_eq!(date(2019, 1, 2).checked_add_months(1), Some(date(2019, 2, 2)));
        assert_eq!(date(2019, 3, 31).checked_add_months(7), Some(date(2019, 10, 31)));
        assert_eq!(date(2019, 11, 15).checked_add_months(3), Some(date(2020, 2, 15)));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(date(2019, 1, 31).checked_add_months(1), Some(date(2019, 2, 28)));
        assert_eq!(date(2020, 1, 31).checked_add_months(1), Some(date(2020, 2, 29)));
        assert_eq!(date(2019, 3, 31).checked_add_months(3), Some(date(2019, 6, 30)));
    }

    #[test]
    fn test_add_months_overflow() {
        let max = Date::from(NaiveDate::MAX);
        assert_eq!(max.checked_add_months(12), None);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(date(2019, 1, 1).days_in_month(), 31);
        assert_eq!(date(2019, 2, 1).days_in_month(), 28);
        assert_eq!(date(2020, 2, 1).days_in_month(), 29);
        assert_eq!(date(1900, 2, 1).days_in_month(), 28);
        assert_eq!(date(2000, 2, 1).days_in_month(), 29);
        assert_eq!(date(2019, 9, 1).days_in_month(), 30);
        assert_eq!(date(2019, 12, 1).days_in_month(), 31);
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(date(2019, 2, 1).end_of_month(), date(2019, 2, 28));
        assert_eq!(date(2020, 2, 29).end_of_month(), date(2020, 2, 29));
        assert_eq!(date(2019, 6, 15).end_of_month(), date(2019, 6, 30));
        assert!(date(2019, 6, 30).is_end_of_month());
        assert!(!date(2019, 5, 30).is_end_of_month());
    }

    #[test]
    fn test_leap_year() {
        assert!(date(2020, 1, 1).is_leap_year());
        assert!(!date(2019, 1, 1).is_leap_year());
        assert!(!date(2100, 1, 1).is_leap_year());
        assert!(date(2000, 1, 1).is_leap_year());
    }

    #[test]
    fn test_sub_days() {
        assert_eq!(date(2019, 3, 3) - date(2019, 2, 1), 30);
        assert_eq!(date(2019, 2, 1) - date(2019, 3, 3), -30);
    }

    #[test]
    fn test_ordering() {
        assert!(date(2019, 1, 2) < date(2019, 1, 3));
        assert!(date(2018, 12, 31) < date(2019, 1, 1));
    }

    #[test]
    fn test_naive_date_conversion() {
        let naive = NaiveDate::from_ymd_opt(2019, 1, 2).unwrap();
        let d = Date::from(naive);
        assert_eq!(NaiveDate::from(d), naive);
        assert_eq!(d.into_inner(), naive);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serialize_iso() {
            let json = serde_json::to_string(&date(2019, 1, 31)).unwrap();
            assert_eq!(json, "\"2019-01-31\"");
        }

        #[test]
        fn test_deserialize_iso() {
            let d: Date = serde_json::from_str("\"2020-02-29\"").unwrap();
            assert_eq!(d, date(2020, 2, 29));
        }

        #[test]
        fn test_deserialize_invalid() {
            assert!(serde_json::from_str::<Date>("\"2019-02-29\"").is_err());
        }
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1900i32..2200i32, 1u32..13u32, 1u32..32u32).prop_filter_map(
                "valid date",
                |(year, month, day)| Date::from_ymd(year, month, day).ok(),
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_end_of_month_is_same_month(d in date_strategy()) {
                let eom = d.end_of_month();
                prop_assert_eq!(eom.year(), d.year());
                prop_assert_eq!(eom.month(), d.month());
                prop_assert!(eom >= d);
                prop_assert!(eom.is_end_of_month());
                prop_assert!(eom.checked_add_days(1).unwrap().day() == 1);
            }

            #[test]
            fn test_add_days_matches_difference(d in date_strategy(), days in 0u64..4000) {
                let later = d.checked_add_days(days).unwrap();
                prop_assert_eq!(later - d, days as i64);
            }

            #[test]
            fn test_add_months_never_exceeds_source_day(d in date_strategy(), months in 0u32..240) {
                let later = d.checked_add_months(months).unwrap();
                prop_assert!(later.day() <= d.day());
                let total = d.year() * 12 + d.month() as i32 - 1 + months as i32;
                prop_assert_eq!(later.year(), total.div_euclid(12));
                prop_assert_eq!(later.month(), total.rem_euclid(12) as u32 + 1);
            }
        }
    }
}
