//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod after;
pub mod check;
pub mod occurrence;
pub mod schedule;

use billing_core::types::Date;
use billing_schedule::interval::IntervalCalculator;
use tracing::debug;

use crate::config::SubscriptionDefaults;
use crate::{CliError, Result};

/// Interval arguments shared by the lookup commands.
///
/// Any argument left out falls back to the `[subscription]` table of the
/// configuration file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct IntervalArgs {
    /// Number of units per interval (days: 7-365, months: 1-12)
    #[arg(short, long)]
    pub length: Option<u32>,

    /// Interval unit (days, months)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Date of the first occurrence (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,
}

impl IntervalArgs {
    /// Builds the calculator from command line values and configured defaults.
    pub fn resolve(&self, defaults: &SubscriptionDefaults) -> Result<IntervalCalculator> {
        let length = self
            .length
            .or(defaults.length)
            .ok_or(CliError::MissingArgument("length"))?;

        let unit = match (&self.unit, defaults.unit) {
            (Some(unit), _) => unit.clone(),
            (None, Some(unit)) => unit.name().to_string(),
            (None, None) => return Err(CliError::MissingArgument("unit")),
        };

        let start = match (&self.start, defaults.start) {
            (Some(start), _) => Date::parse(start)?,
            (None, Some(start)) => start,
            (None, None) => return Err(CliError::MissingArgument("start")),
        };

        let calculator = IntervalCalculator::with_unit_label(length, &unit, start)?;
        debug!(
            interval = %calculator.interval(),
            start = %calculator.start_date(),
            "Resolved subscription"
        );
        Ok(calculator)
    }
}
