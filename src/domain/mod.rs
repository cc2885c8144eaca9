//! Recipe domain: ingredients, preferences, recipes.
//!
//! Pure data and invariants. Nothing here performs I/O.

pub mod error;
pub mod id;

mod ingredient;
mod preference;
mod recipe;

pub use id::{IngredientId, RecipeId};
pub use ingredient::{Ingredient, IngredientList};
pub use preference::{DietaryPreference, PreferenceSet};
pub use recipe::{Difficulty, GenerateRecipeParams, MealType, Recipe, MIN_INGREDIENTS};
