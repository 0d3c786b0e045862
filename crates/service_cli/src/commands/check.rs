//! Check command implementation
//!
//! Prints the resolved configuration so operators can verify what the other
//! commands will use.

use std::io::Write;

use billing_schedule::interval::MAX_OCCURRENCES;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

fn or_unset<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "(unset)".to_string(), |v| v.to_string())
}

/// Run the check command
pub fn run<W: Write>(out: &mut W, config: &CliConfig) -> Result<()> {
    info!("Checking configuration");

    let subscription = &config.subscription;
    writeln!(out, "billing {}", crate::VERSION)?;
    writeln!(out, "log_level        {}", config.log_level)?;
    writeln!(out, "schedule_count   {}", config.schedule_count)?;
    writeln!(out, "max_occurrences  {}", MAX_OCCURRENCES)?;
    writeln!(out, "length           {}", or_unset(subscription.length))?;
    writeln!(out, "unit             {}", or_unset(subscription.unit))?;
    writeln!(out, "start            {}", or_unset(subscription.start))?;

    Ok(())
}
