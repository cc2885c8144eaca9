//! Command-line interface definitions.

pub mod favorites;
pub mod generate;
pub mod output;
pub mod session;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::adapter::generator;
use crate::adapter::storage::FileStorage;
use crate::app::{Config, Persister, RecipeStore};

/// SmartChef - turn the ingredients you have into a recipe.
#[derive(Parser, Debug)]
#[command(name = "smartchef")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session (default)
    Session,

    /// Generate one recipe from the given ingredients
    Generate(GenerateArgs),

    /// List saved favorite recipes
    Favorites(FavoritesArgs),

    /// Show saved dietary preferences
    Preferences,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Ingredients to cook with (at least two)
    #[arg(required = true)]
    pub ingredients: Vec<String>,

    /// Dietary preference tag, e.g. vegan or glutenFree (repeatable)
    #[arg(short, long = "pref")]
    pub preferences: Vec<String>,

    /// Ingredient to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Meal type: breakfast, lunch, dinner, dessert or snack
    #[arg(short, long)]
    pub meal: Option<String>,

    /// Save the generated recipe to favorites
    #[arg(long)]
    pub favorite: bool,

    /// Print the recipe as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `favorites` subcommand.
#[derive(Parser, Debug)]
pub struct FavoritesArgs {
    /// Print favorites as JSON
    #[arg(long)]
    pub json: bool,
}

/// Build a store backed by on-disk storage as described by `config`.
///
/// Must be called inside a Tokio runtime.
pub fn open_store(config: &Config) -> RecipeStore {
    let storage = Arc::new(FileStorage::new(config.storage.resolve_dir()));
    let persister = Persister::spawn(storage, config.storage.namespace.clone());
    RecipeStore::with_persister(generator::from_config(&config.generation), persister)
}
