//! Expense domain model and partition classification.

pub mod partition;
pub mod types;

pub use partition::Partition;
pub use types::Expense;
