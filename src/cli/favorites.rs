//! `smartchef favorites` and `smartchef preferences`.

use crate::app::{Config, RecipeStore};
use crate::cli::{output, FavoritesArgs};
use crate::error::Result;

/// Print saved favorites, newest first.
pub fn execute_favorites(store: &RecipeStore, args: &FavoritesArgs) -> Result<()> {
    let favorites = store.favorites();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
        return Ok(());
    }

    output::section("Your Favorite Recipes");
    output::recipe_list(&favorites, true);
    Ok(())
}

/// Print saved dietary preferences.
pub fn execute_preferences(store: &RecipeStore, config: &Config) -> Result<()> {
    output::section("Dietary Preferences");
    output::preferences(&store.preferences());
    output::field("Storage", config.storage.resolve_dir().display());
    Ok(())
}
