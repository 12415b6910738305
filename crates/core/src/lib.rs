//! Core aggregation engine for Focolare.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every computation is a stateless function of (expenses, categories, parameters):
//! it reads no clock, performs no I/O, and caches nothing across calls.
//!
//! # Modules
//!
//! - `expense` - Expense domain model and partition classification
//! - `calendar` - Month bucketing keys and calendar arithmetic
//! - `category` - Category directory resolution with guaranteed fallback
//! - `trends` - Monthly trend buckets and month-to-date comparison
//! - `reports` - Category performance and single-month reports
//! - `store` - Collaborator contracts for ledger and category snapshots

pub mod calendar;
pub mod category;
pub mod expense;
pub mod reports;
pub mod store;
pub mod trends;
