//! Recipe generation port.

use async_trait::async_trait;

use crate::domain::{GenerateRecipeParams, Recipe};
use crate::error::GenerationError;

/// External service that produces a recipe from a set of ingredients.
///
/// Implementations range from the bundled template generator to a real
/// model-backed service. The store only depends on this contract.
///
/// # Contract
///
/// - Fewer than [`MIN_INGREDIENTS`](crate::domain::MIN_INGREDIENTS)
///   ingredients fails with [`GenerationError::InvalidRequest`] before any
///   latency is incurred.
/// - A successful result carries a fresh unique id, `is_favorite = false`
///   and `created_at` set to the moment of generation.
/// - Backend failures surface as [`GenerationError::Service`].
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Return the generator name for logging.
    fn name(&self) -> &'static str;

    /// Generate a recipe.
    ///
    /// # Errors
    ///
    /// See the trait-level contract.
    async fn generate(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerationError>;
}
