//! # billing_core: Calendar Foundation for Billing Intervals
//!
//! ## Layer 1 (Foundation) Role
//!
//! billing_core is the bottom layer of the workspace, providing:
//! - Calendar date type: `Date` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other billing_* crates:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use billing_core::types::Date;
//!
//! let start = Date::from_ymd(2019, 1, 31).unwrap();
//!
//! // Calendar arithmetic
//! let next_month = start.checked_add_months(1).unwrap();
//! assert_eq!(next_month.end_of_month(), Date::from_ymd(2019, 2, 28).unwrap());
//!
//! let in_thirty_days = start.checked_add_days(30).unwrap();
//! assert_eq!(in_thirty_days.to_string(), "2019-03-02");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable ISO 8601 serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
