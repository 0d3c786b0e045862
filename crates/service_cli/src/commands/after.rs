//! After command implementation
//!
//! Prints the first occurrence strictly after a reference date.

use std::io::Write;

use billing_core::types::Date;
use billing_schedule::interval::IntervalCalculator;
use tracing::info;

use crate::Result;

/// Run the after command
pub fn run<W: Write>(out: &mut W, calculator: &IntervalCalculator, after: &str) -> Result<()> {
    let after = Date::parse(after)?;
    info!(%after, interval = %calculator.interval(), "Searching for next occurrence");

    let date = calculator.first_occurrence_after(after)?;
    writeln!(out, "{}", date)?;

    Ok(())
}
