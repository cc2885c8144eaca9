//! Deadline wrapper for recipe generators.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{GenerateRecipeParams, Recipe};
use crate::error::GenerationError;
use crate::port::RecipeGenerator;

/// Fails a generation call with [`GenerationError::Service`] if the wrapped
/// generator does not answer within `limit`.
///
/// The inner call is dropped on timeout, so nothing it produces afterwards
/// can reach the store.
pub struct Timeout {
    inner: Arc<dyn RecipeGenerator>,
    limit: Duration,
}

impl Timeout {
    pub fn new(inner: Arc<dyn RecipeGenerator>, limit: Duration) -> Self {
        Self { inner, limit }
    }

    /// The limit in whole milliseconds, saturating at `u64::MAX`.
    fn limit_ms(&self) -> u64 {
        u64::try_from(self.limit.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl RecipeGenerator for Timeout {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn generate(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerationError> {
        match tokio::time::timeout(self.limit, self.inner.generate(params)).await {
            Ok(result) => result,
            Err(_) => {
                let limit_ms = self.limit_ms();
                warn!(
                    generator = self.inner.name(),
                    limit_ms,
                    "Recipe generation timed out"
                );
                Err(GenerationError::service(format!(
                    "Recipe generation timed out after {limit_ms} ms"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::generator::TemplateGenerator;
    use crate::testkit::domain::params;

    #[tokio::test]
    async fn passes_through_fast_results() {
        let inner = Arc::new(TemplateGenerator::with_delay(Duration::ZERO));
        let generator = Timeout::new(inner, Duration::from_secs(5));

        let recipe = generator.generate(&params(&["egg", "ham"])).await.unwrap();
        assert!(recipe.title.contains("egg"));
        assert_eq!(generator.name(), "template");
    }

    #[tokio::test]
    async fn slow_generator_fails_with_service_error() {
        let inner = Arc::new(TemplateGenerator::with_delay(Duration::from_secs(60)));
        let generator = Timeout::new(inner, Duration::from_millis(20));

        let err = generator
            .generate(&params(&["egg", "ham"]))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Service { .. }));
        assert_eq!(err.to_string(), "Recipe generation timed out after 20 ms");
    }

    #[test]
    fn limit_ms_saturates_instead_of_truncating() {
        let inner: Arc<dyn RecipeGenerator> = Arc::new(TemplateGenerator::new());

        let normal = Timeout::new(Arc::clone(&inner), Duration::from_millis(1500));
        assert_eq!(normal.limit_ms(), 1500);

        let huge = Timeout::new(inner, Duration::MAX);
        assert_eq!(huge.limit_ms(), u64::MAX);
    }

    #[tokio::test]
    async fn invalid_request_is_not_masked() {
        let inner = Arc::new(TemplateGenerator::with_delay(Duration::from_secs(60)));
        let generator = Timeout::new(inner, Duration::from_millis(20));

        let err = generator.generate(&params(&["egg"])).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRequest { .. }));
    }
}
