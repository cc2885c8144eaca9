//! Store change notifications.

use crate::domain::{DietaryPreference, IngredientId, Recipe, RecipeId};
use crate::error::GenerationError;

/// Events emitted by the store after a mutation has been applied.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// An ingredient was appended.
    IngredientAdded { id: IngredientId, name: String },
    /// An ingredient was removed.
    IngredientRemoved { id: IngredientId },
    /// All ingredients were cleared.
    IngredientsCleared,
    /// A preference was toggled.
    PreferenceToggled {
        preference: DietaryPreference,
        selected: bool,
    },
    /// A generation request started.
    GenerationStarted,
    /// A recipe was generated and prepended to history.
    RecipeGenerated(Box<Recipe>),
    /// A generation request failed.
    GenerationFailed(GenerationError),
    /// Favorite status changed.
    FavoriteToggled { id: RecipeId, favorite: bool },
}

/// Receives [`StoreEvent`]s.
///
/// Called synchronously on the mutating task once the mutation is visible
/// through the store's accessors. Implementations must not call back into
/// store mutators.
pub trait StoreObserver: Send + Sync {
    fn on_event(&self, event: &StoreEvent);
}
