//! Schedule command implementation
//!
//! Lists the first occurrences of a subscription, one per line.

use std::io::Write;

use billing_schedule::interval::{IntervalCalculator, MAX_OCCURRENCES};
use tracing::{info, trace, warn};

use crate::config::ConfigError;
use crate::Result;

/// Run the schedule command
///
/// `count` overrides the configured `schedule_count`. Requests beyond the
/// occurrence ceiling are reduced to it with a warning.
pub fn run<W: Write>(
    out: &mut W,
    calculator: &IntervalCalculator,
    count: Option<u32>,
    configured_count: u32,
) -> Result<()> {
    let mut count = count.unwrap_or(configured_count);
    if count == 0 {
        return Err(ConfigError::InvalidScheduleCount(count).into());
    }
    if count > MAX_OCCURRENCES {
        warn!(
            requested = count,
            max = MAX_OCCURRENCES,
            "Schedule truncated to the occurrence limit"
        );
        count = MAX_OCCURRENCES;
    }

    info!(
        count,
        interval = %calculator.interval(),
        start = %calculator.start_date(),
        "Listing schedule"
    );

    for number in 1..=count {
        let date = calculator.date_of_occurrence(number)?;
        trace!(number, %date, "Occurrence");
        writeln!(out, "{}\t{}", number, date)?;
    }

    Ok(())
}
