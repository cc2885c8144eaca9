//! Recording observer for asserting on store events.

use parking_lot::Mutex;

use crate::port::{StoreEvent, StoreObserver};

/// Keeps every event it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<StoreEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().clone()
    }

    /// Event names in arrival order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .iter()
            .map(|event| match event {
                StoreEvent::IngredientAdded { .. } => "ingredient_added",
                StoreEvent::IngredientRemoved { .. } => "ingredient_removed",
                StoreEvent::IngredientsCleared => "ingredients_cleared",
                StoreEvent::PreferenceToggled { .. } => "preference_toggled",
                StoreEvent::GenerationStarted => "generation_started",
                StoreEvent::RecipeGenerated(_) => "recipe_generated",
                StoreEvent::GenerationFailed(_) => "generation_failed",
                StoreEvent::FavoriteToggled { .. } => "favorite_toggled",
            })
            .collect()
    }
}

impl StoreObserver for RecordingObserver {
    fn on_event(&self, event: &StoreEvent) {
        self.events.lock().push(event.clone());
    }
}
