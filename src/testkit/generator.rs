//! Test doubles for the recipe generator port.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::domain::recipe;
use crate::domain::{GenerateRecipeParams, Recipe};
use crate::error::GenerationError;
use crate::port::RecipeGenerator;

/// Always fails with a [`GenerationError::Service`] carrying `message`.
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerationError> {
        params.validate()?;
        Err(GenerationError::service(self.message.clone()))
    }
}

/// Generator whose calls can be held open until the test releases them.
///
/// Titles are `"<first> and <second> #<n>"` where `n` counts calls from 1.
pub struct ScriptedGenerator {
    gated: bool,
    started: Notify,
    gate: Notify,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    /// Calls complete immediately.
    pub fn immediate() -> Self {
        Self {
            gated: false,
            started: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Each call waits for [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gated: true,
            ..Self::immediate()
        }
    }

    /// Wait until a call has entered the generator.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let one pending (or the next) call finish.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerationError> {
        params.validate()?;
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.started.notify_one();

        if self.gated {
            self.gate.notified().await;
        }

        let title = format!(
            "{} and {} #{n}",
            params.ingredients[0].name, params.ingredients[1].name
        );
        Ok(recipe(&title))
    }
}
