//! Category lifecycle manager for linkdock.
//!
//! Maintains the ordered category set and enforces the reserved default
//! category's invariants: always present, always first, never deletable.

use std::collections::HashSet;

use crate::types::category::{Category, RESERVED_CATEGORY_ID};
use crate::types::errors::CategoryError;

/// Ordered category set with a guaranteed reserved default.
pub struct CategoryManager {
    categories: Vec<Category>,
}

impl CategoryManager {
    pub fn new() -> Self {
        Self {
            categories: vec![Category::reserved_default()],
        }
    }

    /// Builds the set from loaded or restored categories, repairing the
    /// reserved default's presence and position.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let mut manager = Self { categories };
        manager.ensure_reserved();
        manager
    }

    /// Ensures the reserved default category exists and sits first.
    pub fn ensure_reserved(&mut self) {
        match self
            .categories
            .iter()
            .position(|c| c.id == RESERVED_CATEGORY_ID)
        {
            None => self.categories.insert(0, Category::reserved_default()),
            Some(0) => {}
            Some(index) => {
                let reserved = self.categories.remove(index);
                self.categories.insert(0, reserved);
            }
        }
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// The known category id set, for link repair.
    pub fn ids(&self) -> HashSet<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Never zero: the reserved default always counts.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Replaces the whole set, as from the category manager dialog or a
    /// backup restore. The reserved default is re-ensured.
    pub fn replace(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.ensure_reserved();
    }

    /// Removes a category. The reserved default is rejected; the caller is
    /// responsible for reassigning the removed category's links.
    pub fn delete(&mut self, id: &str) -> Result<Category, CategoryError> {
        if id == RESERVED_CATEGORY_ID {
            return Err(CategoryError::ReservedCategory);
        }
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;
        let removed = self.categories.remove(index);
        self.ensure_reserved();
        Ok(removed)
    }

    /// Merges imported categories: one sharing an id or a display name with
    /// an existing category is treated as a duplicate and skipped, the rest
    /// append. Returns how many were added.
    pub fn merge(&mut self, incoming: Vec<Category>) -> usize {
        let mut added = 0;
        for category in incoming {
            let duplicate = self
                .categories
                .iter()
                .any(|c| c.id == category.id || c.name == category.name);
            if !duplicate {
                self.categories.push(category);
                added += 1;
            }
        }
        added
    }

    /// The set in iteration order, for persistence and export.
    pub fn snapshot(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

impl Default for CategoryManager {
    fn default() -> Self {
        Self::new()
    }
}
