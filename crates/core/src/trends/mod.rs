//! Monthly trend buckets and month-to-date comparison.
//!
//! This module provides pure business logic for the dashboard statistics:
//! - Monthly buckets with three-way partitioned sums
//! - Current vs. prior-year month-to-date comparison

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::TrendService;
pub use types::{MonthBucket, MtdStats};
