//! `smartchef generate`: one-shot recipe generation.

use crate::app::RecipeStore;
use crate::cli::{output, GenerateArgs};
use crate::domain::{DietaryPreference, GenerateRecipeParams, MealType};
use crate::error::Result;

/// Generate a recipe from command-line ingredients.
///
/// Ingredients pass through the store's dedup, so `rice Rice` counts once.
pub async fn execute(store: &RecipeStore, args: &GenerateArgs) -> Result<()> {
    for name in &args.ingredients {
        store.add_ingredient(name);
    }

    let preferences = args
        .preferences
        .iter()
        .map(|p| p.parse::<DietaryPreference>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let meal = args
        .meal
        .as_deref()
        .map(str::parse::<MealType>)
        .transpose()?;

    let mut params = GenerateRecipeParams::new(store.ingredients())
        .with_preferences(&preferences)
        .with_exclusions(args.exclude.clone());
    if let Some(meal) = meal {
        params = params.with_meal_type(meal);
    }

    let mut recipe = store.generate_recipe(params).await?;
    if args.favorite {
        store.toggle_favorite_recipe(&recipe.id);
        if let Some(updated) = store.recipe(&recipe.id) {
            recipe = updated;
        }
    }
    store.flush().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    output::recipe_detail(&recipe);
    if args.favorite {
        println!();
        output::success("Saved to favorites");
    }
    Ok(())
}
