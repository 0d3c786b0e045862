//! Occurrence command implementation
//!
//! Prints the date of a single numbered occurrence.

use std::io::Write;

use billing_schedule::interval::IntervalCalculator;
use tracing::info;

use crate::Result;

/// Run the occurrence command
pub fn run<W: Write>(out: &mut W, calculator: &IntervalCalculator, number: u32) -> Result<()> {
    info!(number, interval = %calculator.interval(), "Looking up occurrence");

    let date = calculator.date_of_occurrence(number)?;
    writeln!(out, "{}", date)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use billing_core::types::Date;
    use billing_schedule::interval::{IntervalUnit, ValidationError};

    fn calculator() -> IntervalCalculator {
        IntervalCalculator::new(1, IntervalUnit::Months, Date::from_ymd(2019, 1, 31).unwrap())
            .unwrap()
    }

    #[test]
    fn test_prints_date() {
        let mut out = Vec::new();
        run(&mut out, &calculator(), 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2019-02-28\n");
    }

    #[test]
    fn test_out_of_range() {
        let mut out = Vec::new();
        let result = run(&mut out, &calculator(), 0);
        assert!(matches!(
            result,
            Err(CliError::Validation(
                ValidationError::OccurrenceOutOfRange { occurrence: 0, .. }
            ))
        ));
        assert!(out.is_empty());
    }
}
