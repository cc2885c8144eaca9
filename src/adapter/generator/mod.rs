//! Recipe generator adapters.
//!
//! Implements the `port::RecipeGenerator` trait.

mod template;
mod timeout;

use std::sync::Arc;

pub use template::{TemplateGenerator, DEFAULT_DELAY};
pub use timeout::Timeout;

use crate::app::GenerationConfig;
use crate::port::RecipeGenerator;

/// Build the generator described by `config`.
///
/// The template generator is wrapped in [`Timeout`] unless the timeout is
/// disabled.
pub fn from_config(config: &GenerationConfig) -> Arc<dyn RecipeGenerator> {
    let generator: Arc<dyn RecipeGenerator> =
        Arc::new(TemplateGenerator::with_delay(config.delay()));

    match config.timeout() {
        Some(limit) => Arc::new(Timeout::new(generator, limit)),
        None => generator,
    }
}
