//! The recipe store: owns ingredient input, preferences, generated history
//! and favorites, and orchestrates generation.
//!
//! All methods take `&self`; share the store with `Arc<RecipeStore>`.
//! Each mutation is applied under a single write lock, so readers never
//! observe a half-applied operation.
//!
//! # Generation
//!
//! Generation calls are serialized per store: a second call made while one
//! is in flight waits for the first to finish. [`RecipeStore::is_generating`]
//! stays `true` while any call is queued or running.
//!
//! # Favorites
//!
//! Favorites hold independent copies of recipes with `is_favorite = true`,
//! newest first. Toggling keeps the history entry's flag equal to favorites
//! membership. A favorite that is not in history (restored from a previous
//! session) can be unfavorited and re-favorited in the same session; the
//! favorites copy is the source of truth for it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::persistence::{PersistedState, Persister};
use crate::domain::{
    DietaryPreference, GenerateRecipeParams, Ingredient, IngredientId, IngredientList,
    PreferenceSet, Recipe, RecipeId,
};
use crate::error::GenerationError;
use crate::port::{RecipeGenerator, StoreEvent, StoreObserver};

/// Point-in-time copy of everything the store holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub ingredients: Vec<Ingredient>,
    pub dietary_preferences: Vec<DietaryPreference>,
    /// Generated recipes, newest first.
    pub recipes: Vec<Recipe>,
    /// Favorited recipes, most recently favorited first.
    pub favorite_recipes: Vec<Recipe>,
    pub is_generating: bool,
}

#[derive(Debug, Default)]
struct StoreState {
    ingredients: IngredientList,
    preferences: PreferenceSet,
    history: Vec<Recipe>,
    favorites: Vec<Recipe>,
    /// Favorites removed this session that have no history entry.
    detached: Vec<Recipe>,
}

impl StoreState {
    fn persisted(&self) -> PersistedState {
        PersistedState {
            favorite_recipes: self.favorites.clone(),
            dietary_preferences: self.preferences.clone(),
        }
    }

    fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.history
            .iter()
            .chain(self.favorites.iter())
            .chain(self.detached.iter())
            .find(|r| &r.id == id)
    }
}

/// Decrements the in-flight counter when a generation call ends, including
/// when its future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// State-owning service behind the recipe UI.
pub struct RecipeStore {
    state: RwLock<StoreState>,
    generator: Arc<dyn RecipeGenerator>,
    persister: Option<Persister>,
    observers: RwLock<Vec<Arc<dyn StoreObserver>>>,
    in_flight: AtomicUsize,
    generation_lock: tokio::sync::Mutex<()>,
}

impl RecipeStore {
    /// Create an empty store with no persistence.
    pub fn new(generator: Arc<dyn RecipeGenerator>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            generator,
            persister: None,
            observers: RwLock::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            generation_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a store seeded from `persister` that writes favorites and
    /// preferences back on every change to either.
    ///
    /// Restored favorites are deduplicated by id, keeping the first
    /// (most recently favorited) copy.
    pub fn with_persister(generator: Arc<dyn RecipeGenerator>, persister: Persister) -> Self {
        let restored = persister.restore();
        let stored = restored.favorite_recipes.len();

        let mut seen = HashSet::new();
        let favorites: Vec<Recipe> = restored
            .favorite_recipes
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .map(|r| Recipe {
                is_favorite: true,
                ..r
            })
            .collect();
        if favorites.len() != stored {
            warn!(
                dropped = stored - favorites.len(),
                "Dropped duplicate restored favorites"
            );
        }

        let mut store = Self::new(generator);
        {
            let state = store.state.get_mut();
            state.favorites = favorites;
            state.preferences = restored.dietary_preferences;
        }
        store.persister = Some(persister);
        store
    }

    /// Register an observer for [`StoreEvent`]s.
    pub fn subscribe(&self, observer: Arc<dyn StoreObserver>) {
        self.observers.write().push(observer);
    }

    fn emit(&self, event: StoreEvent) {
        let observers = self.observers.read().clone();
        for observer in observers {
            observer.on_event(&event);
        }
    }

    fn persist(&self, state: &StoreState) {
        if let Some(persister) = &self.persister {
            persister.save(state.persisted());
        }
    }

    /// Wait for queued persistence writes to land.
    pub async fn flush(&self) {
        if let Some(persister) = &self.persister {
            persister.flush().await;
        }
    }

    // ---- Ingredients ----

    /// Add an ingredient by name.
    ///
    /// Blank names and names already present (ignoring case and surrounding
    /// whitespace) are ignored. Returns the new ingredient when one was added.
    pub fn add_ingredient(&self, raw_name: &str) -> Option<Ingredient> {
        let added = self.state.write().ingredients.add(raw_name).cloned();

        match &added {
            Some(ingredient) => {
                debug!(id = %ingredient.id, name = %ingredient.name, "Ingredient added");
                self.emit(StoreEvent::IngredientAdded {
                    id: ingredient.id.clone(),
                    name: ingredient.name.clone(),
                });
            }
            None => debug!(input = raw_name, "Ingredient ignored"),
        }
        added
    }

    /// Remove an ingredient. Unknown ids are ignored.
    pub fn remove_ingredient(&self, id: &IngredientId) -> bool {
        let removed = self.state.write().ingredients.remove(id);
        if removed {
            debug!(id = %id, "Ingredient removed");
            self.emit(StoreEvent::IngredientRemoved { id: id.clone() });
        }
        removed
    }

    pub fn clear_ingredients(&self) {
        self.state.write().ingredients.clear();
        debug!("Ingredients cleared");
        self.emit(StoreEvent::IngredientsCleared);
    }

    // ---- Preferences ----

    /// Flip a dietary preference. Returns `true` if it is now selected.
    pub fn toggle_preference(&self, preference: DietaryPreference) -> bool {
        let selected = {
            let mut state = self.state.write();
            let selected = state.preferences.toggle(preference);
            self.persist(&state);
            selected
        };

        debug!(preference = %preference, selected, "Preference toggled");
        self.emit(StoreEvent::PreferenceToggled {
            preference,
            selected,
        });
        selected
    }

    // ---- Generation ----

    /// Generate a recipe and prepend it to history.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidRequest`] if fewer than two ingredients
    ///   are supplied. Nothing changes, not even `is_generating`.
    /// - Any error from the generator. History is untouched and
    ///   `is_generating` is reset before the error is returned.
    pub async fn generate_recipe(
        &self,
        params: GenerateRecipeParams,
    ) -> Result<Recipe, GenerationError> {
        params.validate()?;

        let in_flight = InFlight::enter(&self.in_flight);
        self.emit(StoreEvent::GenerationStarted);

        let result = {
            let _turn = self.generation_lock.lock().await;
            self.generator.generate(&params).await
        };

        match result {
            Ok(recipe) => {
                {
                    let mut state = self.state.write();
                    state.history.insert(0, recipe.clone());
                    drop(in_flight);
                }
                info!(
                    generator = self.generator.name(),
                    recipe_id = %recipe.id,
                    title = %recipe.title,
                    "Recipe generated"
                );
                self.emit(StoreEvent::RecipeGenerated(Box::new(recipe.clone())));
                Ok(recipe)
            }
            Err(e) => {
                drop(in_flight);
                warn!(generator = self.generator.name(), error = %e, "Recipe generation failed");
                self.emit(StoreEvent::GenerationFailed(e.clone()));
                Err(e)
            }
        }
    }

    /// Generate from the current ingredients and selected preferences.
    ///
    /// # Errors
    ///
    /// Same as [`RecipeStore::generate_recipe`].
    pub async fn generate_from_selection(&self) -> Result<Recipe, GenerationError> {
        let params = {
            let state = self.state.read();
            GenerateRecipeParams::new(state.ingredients.as_slice().to_vec())
                .with_preferences(state.preferences.as_slice())
        };
        self.generate_recipe(params).await
    }

    // ---- Favorites ----

    /// Toggle favorite status of a recipe.
    ///
    /// Returns the new status, or `None` if no recipe with `id` is known.
    /// Other recipes are never touched.
    pub fn toggle_favorite_recipe(&self, id: &RecipeId) -> Option<bool> {
        let favorite = {
            let mut state = self.state.write();
            let favorite = Self::apply_favorite_toggle(&mut state, id)?;
            self.persist(&state);
            favorite
        };

        debug!(recipe_id = %id, favorite, "Favorite toggled");
        self.emit(StoreEvent::FavoriteToggled {
            id: id.clone(),
            favorite,
        });
        Some(favorite)
    }

    fn apply_favorite_toggle(state: &mut StoreState, id: &RecipeId) -> Option<bool> {
        let favorite = match state.favorites.iter().position(|r| &r.id == id) {
            Some(pos) => {
                let removed = state.favorites.remove(pos);
                if !state.history.iter().any(|r| &r.id == id) {
                    state.detached.retain(|r| &r.id != id);
                    state.detached.push(Recipe {
                        is_favorite: false,
                        ..removed
                    });
                }
                false
            }
            None => {
                let source = state
                    .history
                    .iter()
                    .find(|r| &r.id == id)
                    .or_else(|| state.detached.iter().find(|r| &r.id == id))?;
                let copy = Recipe {
                    is_favorite: true,
                    ..source.clone()
                };
                state.detached.retain(|r| &r.id != id);
                state.favorites.insert(0, copy);
                true
            }
        };

        for recipe in state.history.iter_mut().filter(|r| &r.id == id) {
            recipe.is_favorite = favorite;
        }
        Some(favorite)
    }

    // ---- Reads ----

    #[must_use]
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.state.read().ingredients.as_slice().to_vec()
    }

    #[must_use]
    pub fn preferences(&self) -> Vec<DietaryPreference> {
        self.state.read().preferences.as_slice().to_vec()
    }

    /// Generated recipes, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<Recipe> {
        self.state.read().history.clone()
    }

    /// Favorited recipes, most recently favorited first.
    #[must_use]
    pub fn favorites(&self) -> Vec<Recipe> {
        self.state.read().favorites.clone()
    }

    /// Look up a recipe for display, checking history then favorites.
    #[must_use]
    pub fn recipe(&self, id: &RecipeId) -> Option<Recipe> {
        let state = self.state.read();
        let mut recipe = state.find(id).cloned()?;
        recipe.is_favorite = state.favorites.iter().any(|r| &r.id == id);
        Some(recipe)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &RecipeId) -> bool {
        self.state.read().favorites.iter().any(|r| &r.id == id)
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read();
        StoreSnapshot {
            ingredients: state.ingredients.as_slice().to_vec(),
            dietary_preferences: state.preferences.as_slice().to_vec(),
            recipes: state.history.clone(),
            favorite_recipes: state.favorites.clone(),
            is_generating: self.is_generating(),
        }
    }
}
