//! Builders for domain values used across tests.

use chrono::Utc;

use crate::domain::{Difficulty, GenerateRecipeParams, Ingredient, Recipe, RecipeId};

/// Ingredients named after `names`, in order.
pub fn ingredients(names: &[&str]) -> Vec<Ingredient> {
    names.iter().map(|n| Ingredient::new(*n)).collect()
}

/// A request with the given ingredient names and nothing else.
pub fn params(names: &[&str]) -> GenerateRecipeParams {
    GenerateRecipeParams::new(ingredients(names))
}

/// A plain, non-favorite recipe with a fresh id.
pub fn recipe(title: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(),
        title: title.to_string(),
        description: format!("{title} for testing"),
        ingredients: vec!["egg, prepared as needed".into(), "ham, prepared as needed".into()],
        instructions: vec!["Cook everything.".into()],
        health_tips: vec!["Eat slowly.".into()],
        prep_time: 5,
        cook_time: 10,
        servings: 2,
        difficulty: Difficulty::Easy,
        image_url: "https://example.com/recipe.jpg".into(),
        tags: vec!["test".into()],
        is_favorite: false,
        created_at: Utc::now(),
    }
}
