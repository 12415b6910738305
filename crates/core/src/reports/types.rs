//! Report data types.

use focolare_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;
use crate::expense::Expense;

/// Per-category amount with its share of the month total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category identifier (fallback id for unresolved references).
    pub category_id: CategoryId,
    /// Resolved category name.
    pub name: String,
    /// Resolved category display color.
    pub color: String,
    /// Amount spent in this category.
    pub amount: Decimal,
    /// Percentage of the month total, zero when the total is zero.
    pub percentage: Decimal,
}

/// Category performance for one target month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    /// Target month.
    pub month: MonthKey,
    /// Sum of all matched (non-vacation) amounts in the month.
    pub total: Decimal,
    /// Non-zero category shares, descending by amount.
    pub shares: Vec<CategoryShare>,
}

/// Per-category amount for the month detail breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    /// Category identifier (fallback id for unresolved references).
    pub category_id: CategoryId,
    /// Resolved category name.
    pub name: String,
    /// Resolved category display color.
    pub color: String,
    /// Amount spent in this category.
    pub amount: Decimal,
}

/// Full statistics for a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthReport {
    /// Target month.
    pub month: MonthKey,
    /// Sum over all partitions, vacation included.
    pub total: Decimal,
    /// Sum of regular expenses.
    pub regular: Decimal,
    /// Sum of extra expenses.
    pub extra: Decimal,
    /// Sum of vacation expenses.
    pub vacation: Decimal,
    /// Non-vacation per-category sums, descending by amount, zero entries
    /// dropped.
    pub category_breakdown: Vec<CategoryAmount>,
    /// Total divided by the month's true calendar length.
    pub daily_average: Decimal,
    /// The month's expenses, descending by date.
    pub transactions: Vec<Expense>,
}
