//! Calendar types shared by the billing crates.
//!
//! This module provides:
//! - `time`: The `Date` value type used for billing occurrences
//! - `error`: Structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::Date;
