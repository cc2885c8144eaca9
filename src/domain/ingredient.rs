//! User-entered ingredients and the deduplicated collection that holds them.

use serde::{Deserialize, Serialize};

use super::id::IngredientId;

/// A single ingredient term entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient with a freshly generated id.
    ///
    /// The name is stored as given; normalization happens in
    /// [`IngredientList::add`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: IngredientId::new(),
            name: name.into(),
        }
    }
}

/// Ordered collection of ingredients with case-insensitive uniqueness.
///
/// No two entries have trimmed names that compare equal ignoring case. The
/// first accepted casing wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<Ingredient>,
}

impl IngredientList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient by name.
    ///
    /// Trims whitespace and ignores empty input and names already present
    /// (case-insensitive). Returns the new entry when one was appended.
    pub fn add(&mut self, raw_name: &str) -> Option<&Ingredient> {
        let name = raw_name.trim();
        if name.is_empty() || self.contains_name(name) {
            return None;
        }

        self.items.push(Ingredient::new(name));
        self.items.last()
    }

    /// Remove the entry with the given id. Returns `false` if nothing matched.
    pub fn remove(&mut self, id: &IngredientId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check whether a name is already present, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.items
            .iter()
            .any(|item| item.name.to_lowercase() == needle)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }
}
