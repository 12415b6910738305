//! Partition classification for expenses.

use serde::{Deserialize, Serialize};

/// The mutually exclusive classification of an expense.
///
/// Every expense belongs to exactly one partition: `Vacation` when a
/// vacation name is set, otherwise `Extra` when flagged out-of-ordinary,
/// otherwise `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Ordinary household expense.
    Regular,
    /// Out-of-the-ordinary expense.
    Extra,
    /// Expense incurred as part of a named vacation.
    Vacation,
}
