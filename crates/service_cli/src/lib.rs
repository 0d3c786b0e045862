//! Billing CLI - Command Line Operations for Subscription Occurrence Dates
//!
//! Library half of the `billing` binary: configuration loading, the error
//! type, and command implementations. Commands write their results to any
//! [`std::io::Write`] so they can be exercised without a terminal.
//!
//! # Architecture
//!
//! As the service layer, this crate is the only place that performs I/O or
//! emits logs; `billing_schedule` and `billing_core` stay pure.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
