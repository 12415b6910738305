//! Trend data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;

/// Partitioned expense sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Month bucketing key (`"YYYY-MM"`).
    pub key: MonthKey,
    /// Short display label, e.g. `"Jan 2024"`.
    pub label: String,
    /// Sum of regular expenses.
    pub regular: Decimal,
    /// Sum of extra expenses.
    pub extra: Decimal,
    /// Sum of vacation expenses.
    pub vacation: Decimal,
}

impl MonthBucket {
    /// Creates an empty bucket for the given month.
    #[must_use]
    pub fn empty(key: MonthKey) -> Self {
        Self {
            key,
            label: key.label(),
            regular: Decimal::ZERO,
            extra: Decimal::ZERO,
            vacation: Decimal::ZERO,
        }
    }

    /// Returns the sum over all three partitions.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.regular + self.extra + self.vacation
    }
}

/// Month-to-date comparison statistics.
///
/// Vacation-partitioned expenses are excluded from every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtdStats {
    /// Whole-month sum for the reference month.
    pub current_month_total: Decimal,
    /// Sum for the reference month through the reference day.
    pub current_mtd: Decimal,
    /// Sum for the same month one year earlier, through the reference day.
    pub last_year_mtd: Decimal,
    /// Year-over-year MTD change in percent, rounded to 2 decimal places.
    /// Zero when there is no prior-year baseline.
    pub percent_delta: Decimal,
}
