//! Month bucketing keys and calendar arithmetic.

pub mod month;

pub use month::{MonthKey, ReferenceDate};
