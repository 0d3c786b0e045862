//! Interval unit enumeration.

use std::fmt;
use std::str::FromStr;

/// Granularity of a billing interval.
///
/// The payment processor accepts only two units, each with its own
/// inclusive length bounds.
///
/// # Examples
///
/// ```
/// use billing_schedule::interval::IntervalUnit;
///
/// assert_eq!(IntervalUnit::Days.min_length(), 7);
/// assert_eq!(IntervalUnit::Days.max_length(), 365);
/// assert!(IntervalUnit::Months.accepts(12));
/// assert!(!IntervalUnit::Months.accepts(13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
}

impl IntervalUnit {
    /// Shortest accepted interval length for this unit.
    #[inline]
    pub fn min_length(&self) -> u32 {
        match self {
            IntervalUnit::Days => 7,
            IntervalUnit::Months => 1,
        }
    }

    /// Longest accepted interval length for this unit.
    #[inline]
    pub fn max_length(&self) -> u32 {
        match self {
            IntervalUnit::Days => 365,
            IntervalUnit::Months => 12,
        }
    }

    /// Returns whether `length` is within this unit's bounds.
    #[inline]
    pub fn accepts(&self, length: u32) -> bool {
        (self.min_length()..=self.max_length()).contains(&length)
    }

    /// Returns the plural label (`"days"` / `"months"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_schedule::interval::IntervalUnit;
    ///
    /// assert_eq!(IntervalUnit::Days.name(), "days");
    /// assert_eq!(IntervalUnit::Months.name(), "months");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            IntervalUnit::Days => "days",
            IntervalUnit::Months => "months",
        }
    }

    /// Returns the singular label (`"day"` / `"month"`).
    #[inline]
    pub fn singular_name(&self) -> &'static str {
        match self {
            IntervalUnit::Days => "day",
            IntervalUnit::Months => "month",
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IntervalUnit {
    type Err = String;

    /// Parses a unit label (case-insensitive).
    ///
    /// Supported formats:
    /// - Days: "days", "day"
    /// - Months: "months", "month"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "days" | "day" => Ok(IntervalUnit::Days),
            "months" | "month" => Ok(IntervalUnit::Months),
            _ => Err(format!("Unknown interval unit: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_unit_impl {
    use super::IntervalUnit;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for IntervalUnit {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for IntervalUnit {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            IntervalUnit::from_str(&s).map_err(de::Error::custom)
        }
    }
}
