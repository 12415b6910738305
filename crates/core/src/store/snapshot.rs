//! In-memory snapshot implementing both collaborator contracts.

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::{CategoryDirectory, LedgerStore};
use crate::category::Category;
use crate::expense::Expense;

/// A complete in-memory snapshot of expenses and categories.
///
/// Serves as the test double for the collaborator traits and as the wire
/// format of the CLI's JSON snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All expense records.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// The category directory.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Snapshot {
    /// Creates a snapshot from explicit collections.
    #[must_use]
    pub fn new(expenses: Vec<Expense>, categories: Vec<Category>) -> Self {
        Self {
            expenses,
            categories,
        }
    }

    /// Decodes a snapshot from its JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Malformed` if the payload does not decode,
    /// including malformed calendar dates.
    pub fn from_json(payload: &str) -> Result<Self, StoreError> {
        serde_json::from_str(payload).map_err(|e| StoreError::Malformed(e.to_string()))
    }
}

impl LedgerStore for Snapshot {
    fn fetch_all(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.expenses.clone())
    }
}

impl CategoryDirectory for Snapshot {
    fn fetch_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }
}
