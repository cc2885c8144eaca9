//! Terminal output helpers for consistent recipe rendering.

use std::fmt::Display;

use owo_colors::OwoColorize;

use crate::domain::{DietaryPreference, Ingredient, Recipe};

const RULE_WIDTH: usize = 56;

/// Print the application header with name and version.
pub fn header(version: &str) {
    println!("{} {}", "smartchef".bold(), version.dimmed());
    println!();
}

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("  {message}");
}

/// Summary line used in recipe lists.
#[must_use]
pub fn recipe_line(recipe: &Recipe) -> String {
    let star = if recipe.is_favorite { "★" } else { "☆" };
    format!(
        "{star} {}  ({} min, {} servings, {})",
        recipe.title,
        recipe.total_time(),
        recipe.servings,
        recipe.difficulty
    )
}

pub fn ingredients(items: &[Ingredient]) {
    if items.is_empty() {
        note("Add some ingredients to get started!");
        return;
    }
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    field("Ingredients", names.join(", "));
}

pub fn preferences(selected: &[DietaryPreference]) {
    if selected.is_empty() {
        field("Diet", "no preferences");
        return;
    }
    let labels: Vec<&str> = selected.iter().map(|p| p.label()).collect();
    field("Diet", labels.join(", "));
}

/// Print a list of recipes, or the empty-state hint for that list.
pub fn recipe_list(recipes: &[Recipe], favorites: bool) {
    if recipes.is_empty() {
        if favorites {
            note("No favorite recipes yet");
            note("Save recipes you love and they'll appear here for easy access");
        } else {
            note("Generate your first recipe");
            note("Add ingredients and choose 'Generate recipe' to create your first dish");
        }
        return;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, recipe_line(recipe));
    }
}

/// Print the full recipe view.
pub fn recipe_detail(recipe: &Recipe) {
    section(&recipe.title);
    note(&recipe.description);
    println!();
    field("Prep time", format!("{} min", recipe.prep_time));
    field("Cook time", format!("{} min", recipe.cook_time));
    field("Servings", recipe.servings);
    field("Difficulty", recipe.difficulty);
    field(
        "Favorite",
        if recipe.is_favorite { "yes" } else { "no" },
    );
    if !recipe.tags.is_empty() {
        field("Tags", recipe.tags.join(", "));
    }

    section("Ingredients");
    for item in &recipe.ingredients {
        println!("  • {item}");
    }

    section("Instructions");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {:>2}. {step}", i + 1);
    }

    if !recipe.health_tips.is_empty() {
        section("Health tips");
        for tip in &recipe.health_tips {
            println!("  • {tip}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::recipe;

    #[test]
    fn recipe_line_shows_total_time_and_star() {
        let mut r = recipe("Egg and Ham Stir-Fry");
        assert_eq!(
            recipe_line(&r),
            "☆ Egg and Ham Stir-Fry  (15 min, 2 servings, easy)"
        );

        r.is_favorite = true;
        assert!(recipe_line(&r).starts_with('★'));
    }
}
