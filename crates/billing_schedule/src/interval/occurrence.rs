//! Numbered occurrences and their iterator.

use super::calculator::{IntervalCalculator, MAX_OCCURRENCES};
use billing_core::types::time::Date;
use std::fmt;
use std::iter::FusedIterator;

/// One scheduled billing event: its 1-based number and its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    number: u32,
    date: Date,
}

impl Occurrence {
    /// Returns the occurrence number (1 is the start date).
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the occurrence date.
    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.date)
    }
}

/// Iterator over a calculator's occurrences in order.
///
/// Yields at most [`MAX_OCCURRENCES`] items. Iteration also ends at the
/// first occurrence whose date cannot be represented; use
/// [`IntervalCalculator::date_of_occurrence`] to obtain that error.
#[derive(Debug, Clone)]
pub struct Occurrences {
    calculator: IntervalCalculator,
    next: u32,
}

impl Occurrences {
    pub(crate) fn new(calculator: IntervalCalculator) -> Self {
        Self {
            calculator,
            next: 1,
        }
    }

    fn finish(&mut self) {
        self.next = MAX_OCCURRENCES + 1;
    }
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > MAX_OCCURRENCES {
            return None;
        }
        match self.calculator.project(self.next) {
            Ok(date) => {
                let occurrence = Occurrence {
                    number: self.next,
                    date,
                };
                self.next += 1;
                Some(occurrence)
            }
            Err(_) => {
                self.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_OCCURRENCES + 1).saturating_sub(self.next) as usize;
        (0, Some(remaining))
    }
}

impl FusedIterator for Occurrences {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalUnit;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_first_items() {
        let calc = IntervalCalculator::new(1, IntervalUnit::Months, date(2019, 1, 31)).unwrap();
        let items: Vec<Occurrence> = calc.occurrences().take(4).collect();

        assert_eq!(items[0].number(), 1);
        assert_eq!(items[0].date(), date(2019, 1, 31));
        assert_eq!(items[1].date(), date(2019, 2, 28));
        assert_eq!(items[2].date(), date(2019, 3, 31));
        assert_eq!(items[3].date(), date(2019, 4, 30));
        assert_eq!(items[3].number(), 4);
    }

    #[test]
    fn test_matches_date_of_occurrence() {
        let calc = IntervalCalculator::new(30, IntervalUnit::Days, date(2019, 2, 1)).unwrap();
        for occurrence in calc.occurrences().take(50) {
            assert_eq!(
                calc.date_of_occurrence(occurrence.number()).unwrap(),
                occurrence.date()
            );
        }
    }

    #[test]
    fn test_stops_at_ceiling() {
        let calc = IntervalCalculator::new(7, IntervalUnit::Days, date(2019, 1, 2)).unwrap();
        let mut iter = calc.occurrences();
        assert_eq!(iter.size_hint(), (0, Some(MAX_OCCURRENCES as usize)));

        let last = iter.by_ref().last().unwrap();
        assert_eq!(last.number(), MAX_OCCURRENCES);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_stops_at_calendar_limit() {
        let last = Date::from(chrono::NaiveDate::MAX);
        let calc = IntervalCalculator::new(1, IntervalUnit::Months, last).unwrap();
        let items: Vec<Occurrence> = calc.occurrences().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date(), last);
    }

    #[test]
    fn test_display() {
        let calc = IntervalCalculator::new(7, IntervalUnit::Days, date(2019, 1, 2)).unwrap();
        let second = calc.occurrences().nth(1).unwrap();
        assert_eq!(second.to_string(), "#2 2019-01-09");
    }
}
