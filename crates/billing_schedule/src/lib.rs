//! # Billing Schedule (L2: Business Logic)
//!
//! Occurrence dates for recurring subscription billing.
//!
//! This crate provides:
//! - Interval definitions bounded by the payment processor's limits
//!   (7..=365 days or 1..=12 months)
//! - Day-based and calendar-month-based date projection
//! - Forward search for the first occurrence after a reference date
//!
//! ## Design Principles
//!
//! - **Closed unit enum**: an interval is either days or months, nothing else
//! - **Validate once**: invalid intervals are rejected at construction
//! - **Pure queries**: every lookup is a function of immutable state, so a
//!   calculator can be shared across threads without locking
//!
//! ```
//! use billing_schedule::interval::{IntervalCalculator, IntervalUnit};
//! use billing_core::types::Date;
//!
//! let calc = IntervalCalculator::new(
//!     3,
//!     IntervalUnit::Months,
//!     Date::from_ymd(2019, 3, 31).unwrap(),
//! )
//! .unwrap();
//!
//! let next = calc
//!     .first_occurrence_after(Date::from_ymd(2020, 4, 1).unwrap())
//!     .unwrap();
//! assert_eq!(next, Date::from_ymd(2020, 6, 30).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod interval;
