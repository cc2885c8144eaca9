//! Interactive session.
//!
//! A menu loop over the store: collect ingredients and preferences,
//! generate, browse history and favorites, open a recipe.

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use crate::app::RecipeStore;
use crate::cli::output;
use crate::domain::{DietaryPreference, Recipe, MIN_INGREDIENTS};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
enum Action {
    AddIngredient,
    RemoveIngredient,
    ClearIngredients,
    Preferences,
    Generate,
    History,
    Favorites,
    Quit,
}

impl Action {
    const ALL: [Self; 8] = [
        Self::AddIngredient,
        Self::RemoveIngredient,
        Self::ClearIngredients,
        Self::Preferences,
        Self::Generate,
        Self::History,
        Self::Favorites,
        Self::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::AddIngredient => "Add ingredient",
            Self::RemoveIngredient => "Remove ingredient",
            Self::ClearIngredients => "Clear ingredients",
            Self::Preferences => "Dietary preferences",
            Self::Generate => "Generate recipe",
            Self::History => "Generated recipes",
            Self::Favorites => "Favorite recipes",
            Self::Quit => "Quit",
        }
    }
}

/// Run blocking terminal I/O without stalling the runtime's other tasks.
fn blocking<T>(f: impl FnOnce() -> T) -> T {
    tokio::task::block_in_place(f)
}

/// Run the interactive session until the user quits.
pub async fn execute(store: &RecipeStore) -> Result<()> {
    let theme = ColorfulTheme::default();
    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Add the ingredients you have on hand and SmartChef will create a recipe for you.");

    loop {
        output::section("Recipe Generator");
        output::ingredients(&store.ingredients());
        output::preferences(&store.preferences());
        println!();

        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let choice = blocking(|| {
            Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()
        })?;

        match Action::ALL[choice] {
            Action::AddIngredient => add_ingredient(store, &theme)?,
            Action::RemoveIngredient => remove_ingredient(store, &theme)?,
            Action::ClearIngredients => store.clear_ingredients(),
            Action::Preferences => edit_preferences(store, &theme)?,
            Action::Generate => generate(store, &theme).await?,
            Action::History => browse(store, &theme, false)?,
            Action::Favorites => browse(store, &theme, true)?,
            Action::Quit => break,
        }
    }

    store.flush().await;
    Ok(())
}

fn add_ingredient(store: &RecipeStore, theme: &ColorfulTheme) -> Result<()> {
    let input: String = blocking(|| {
        Input::with_theme(theme)
            .with_prompt("Add an ingredient (e.g., chicken, tomatoes)")
            .allow_empty(true)
            .interact_text()
    })?;

    // Comma-separated input adds several at once.
    for name in input.split(',') {
        if name.trim().is_empty() {
            continue;
        }
        if store.add_ingredient(name).is_none() {
            output::warning(&format!("'{}' is already on the list", name.trim()));
        }
    }
    Ok(())
}

fn remove_ingredient(store: &RecipeStore, theme: &ColorfulTheme) -> Result<()> {
    let ingredients = store.ingredients();
    if ingredients.is_empty() {
        output::note("Nothing to remove.");
        return Ok(());
    }

    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    let choice = blocking(|| {
        Select::with_theme(theme)
            .with_prompt("Remove which ingredient?")
            .items(&names)
            .interact_opt()
    })?;

    if let Some(index) = choice {
        store.remove_ingredient(&ingredients[index].id);
    }
    Ok(())
}

fn edit_preferences(store: &RecipeStore, theme: &ColorfulTheme) -> Result<()> {
    let current = store.preferences();
    let labels: Vec<&str> = DietaryPreference::ALL.iter().map(|p| p.label()).collect();
    let checked: Vec<bool> = DietaryPreference::ALL
        .iter()
        .map(|p| current.contains(p))
        .collect();

    let selected = blocking(|| {
        MultiSelect::with_theme(theme)
            .with_prompt("Dietary preferences (space to toggle)")
            .items(&labels)
            .defaults(&checked)
            .interact()
    })?;

    for (index, pref) in DietaryPreference::ALL.iter().enumerate() {
        if selected.contains(&index) != current.contains(pref) {
            store.toggle_preference(*pref);
        }
    }
    Ok(())
}

async fn generate(store: &RecipeStore, theme: &ColorfulTheme) -> Result<()> {
    if store.ingredients().len() < MIN_INGREDIENTS {
        output::error("Please add at least 2 ingredients");
        return Ok(());
    }

    output::note("Creating recipe...");
    match store.generate_from_selection().await {
        Ok(recipe) => view_recipe(store, theme, recipe),
        Err(e) => {
            output::error(&e.to_string());
            Ok(())
        }
    }
}

fn browse(store: &RecipeStore, theme: &ColorfulTheme, favorites: bool) -> Result<()> {
    let recipes = if favorites {
        store.favorites()
    } else {
        store.history()
    };

    output::section(if favorites {
        "Your Favorite Recipes"
    } else {
        "Your Generated Recipes"
    });
    if recipes.is_empty() {
        output::recipe_list(&recipes, favorites);
        return Ok(());
    }

    let lines: Vec<String> = recipes.iter().map(output::recipe_line).collect();
    let choice = blocking(|| {
        Select::with_theme(theme)
            .with_prompt("Open a recipe (Esc to go back)")
            .items(&lines)
            .interact_opt()
    })?;

    match choice {
        Some(index) => view_recipe(store, theme, recipes[index].clone()),
        None => Ok(()),
    }
}

fn view_recipe(store: &RecipeStore, theme: &ColorfulTheme, recipe: Recipe) -> Result<()> {
    let mut recipe = recipe;
    loop {
        output::recipe_detail(&recipe);
        println!();

        let toggle_label = if recipe.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        };
        let choice = blocking(|| {
            Select::with_theme(theme)
                .items(&[toggle_label, "Back to recipes"])
                .default(1)
                .interact()
        })?;

        if choice != 0 {
            return Ok(());
        }

        store.toggle_favorite_recipe(&recipe.id);
        match store.recipe(&recipe.id) {
            Some(updated) => recipe = updated,
            None => return Ok(()),
        }
    }
}
