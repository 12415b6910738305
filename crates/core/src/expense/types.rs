//! Expense record type.

use chrono::NaiveDate;
use focolare_shared::types::{CategoryId, ExpenseId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::partition::Partition;
use crate::calendar::MonthKey;

/// A single expense record.
///
/// Immutable input owned by the ledger store. `amount` is a non-negative
/// currency value with 2 fractional digits; validation of that contract is
/// caller-side, the engine only aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Expense amount.
    pub amount: Decimal,
    /// Referenced category. May dangle; resolution falls back to the
    /// well-known default category instead of erroring.
    pub category_id: CategoryId,
    /// Free-text description, may be empty.
    pub description: String,
    /// Calendar date of the expense, no time component.
    pub date: NaiveDate,
    /// Marks an out-of-the-ordinary expense.
    pub is_extra: bool,
    /// When present, the expense belongs to the vacation partition
    /// regardless of `is_extra`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacation_name: Option<String>,
}

impl Expense {
    /// Creates a new expense record with a fresh ID.
    ///
    /// `active_vacation` is the current vacation-mode name, passed explicitly
    /// by the caller (never read from ambient state): when set, the new
    /// record is stamped with it and lands in the vacation partition.
    #[must_use]
    pub fn new(
        amount: Decimal,
        category_id: CategoryId,
        description: impl Into<String>,
        date: NaiveDate,
        is_extra: bool,
        active_vacation: Option<&str>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category_id,
            description: description.into(),
            date,
            is_extra,
            vacation_name: active_vacation.map(ToString::to_string),
        }
    }

    /// Classifies this expense into its partition.
    ///
    /// Vacation takes precedence over extra; every expense belongs to
    /// exactly one partition.
    #[must_use]
    pub fn partition(&self) -> Partition {
        if self.vacation_name.is_some() {
            Partition::Vacation
        } else if self.is_extra {
            Partition::Extra
        } else {
            Partition::Regular
        }
    }

    /// Returns the month bucket key for this expense.
    #[must_use]
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}
