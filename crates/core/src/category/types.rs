//! Category type and the well-known fallback entry.

use focolare_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

/// Reserved identifier of the fallback category.
///
/// Used whenever an expense references a category the directory does not
/// know about.
pub const FALLBACK_CATEGORY_ID: &str = "uncategorized";

/// An expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Display color as a hex string, opaque to the engine.
    pub color: String,
}

impl Category {
    /// Returns the well-known fallback category.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: CategoryId::from(FALLBACK_CATEGORY_ID),
            name: "Uncategorized".to_string(),
            color: "#cbd5e1".to_string(),
        }
    }

    /// Returns true if this is the fallback category.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.id.as_str() == FALLBACK_CATEGORY_ID
    }
}
