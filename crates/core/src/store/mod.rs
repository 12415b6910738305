//! Collaborator contracts for expense and category snapshots.
//!
//! The engine never fetches data itself; callers hand it a complete,
//! immutable snapshot obtained through these traits. No streaming or
//! partial semantics are assumed.

pub mod error;
pub mod snapshot;

pub use error::StoreError;
pub use snapshot::Snapshot;

use crate::category::Category;
use crate::expense::Expense;

/// Supplies the full, unordered collection of expense records as of
/// request time.
pub trait LedgerStore {
    /// Returns the complete current expense snapshot.
    fn fetch_all(&self) -> Result<Vec<Expense>, StoreError>;
}

/// Resolves the category directory, including the well-known fallback
/// entry.
pub trait CategoryDirectory {
    /// Returns the complete current category snapshot.
    fn fetch_all(&self) -> Result<Vec<Category>, StoreError>;
}
