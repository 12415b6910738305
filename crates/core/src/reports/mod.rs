//! Month-scoped report generation.
//!
//! This module provides pure business logic for the month views:
//! - Category performance (per-category totals and percentage shares)
//! - Month detail report (partitioned totals, breakdown, daily average,
//!   sorted transaction list)

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{CategoryAmount, CategoryPerformance, CategoryShare, MonthReport};
