//! SmartChef - ingredient-driven recipe generation.
//!
//! Users collect ingredients and dietary preferences, ask for a generated
//! recipe, and keep the ones they like as favorites that survive restarts.
//!
//! # Architecture
//!
//! - **`domain`** - Ingredients, preferences, recipes and their invariants
//! - **`port`** - Traits at the seams: generator, storage, observer
//! - **`adapter`** - Template generator, timeout wrapper, file/memory storage
//! - **`app`** - [`RecipeStore`](app::RecipeStore), persistence, configuration
//! - **`cli`** - Terminal front end
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use smartchef::adapter::generator::TemplateGenerator;
//! use smartchef::app::RecipeStore;
//!
//! # async fn run() -> Result<(), smartchef::error::GenerationError> {
//! let store = RecipeStore::new(Arc::new(TemplateGenerator::with_delay(Duration::ZERO)));
//! store.add_ingredient("chicken");
//! store.add_ingredient("rice");
//!
//! let recipe = store.generate_from_selection().await?;
//! store.toggle_favorite_recipe(&recipe.id);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
