//! Category lookup with a guaranteed default.

use std::collections::HashMap;

use focolare_shared::types::CategoryId;

use super::types::Category;

/// Resolves category references against a directory snapshot.
///
/// The resolver always answers: an unknown `CategoryId` resolves to the
/// fallback category instead of an error or `None`, so callers never need
/// to null-check category data. The fallback entry is appended to the
/// directory when the snapshot does not already carry one.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    categories: Vec<Category>,
    index: HashMap<CategoryId, usize>,
    fallback_pos: usize,
}

impl CategoryResolver {
    /// Builds a resolver over a directory snapshot, preserving directory
    /// order.
    #[must_use]
    pub fn new(directory: &[Category]) -> Self {
        let mut categories: Vec<Category> = directory.to_vec();
        if !categories.iter().any(Category::is_fallback) {
            categories.push(Category::fallback());
        }

        let index = categories
            .iter()
            .enumerate()
            .map(|(pos, category)| (category.id.clone(), pos))
            .collect();

        // The fallback exists by construction.
        let fallback_pos = categories
            .iter()
            .position(Category::is_fallback)
            .unwrap_or(categories.len() - 1);

        Self {
            categories,
            index,
            fallback_pos,
        }
    }

    /// Resolves a category reference, substituting the fallback for unknown
    /// identifiers.
    #[must_use]
    pub fn resolve(&self, id: &CategoryId) -> &Category {
        let pos = self.position(id);
        &self.categories[pos]
    }

    /// Returns the directory position a reference resolves to.
    #[must_use]
    pub fn position(&self, id: &CategoryId) -> usize {
        self.index.get(id).copied().unwrap_or(self.fallback_pos)
    }

    /// Returns the directory in its original order, fallback included.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the number of directory entries, fallback included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the directory holds no entries.
    ///
    /// Never true in practice: the fallback is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
