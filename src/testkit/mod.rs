//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for ingredients, recipes and requests.
//! - [`generator`] - Test doubles for [`RecipeGenerator`](crate::port::RecipeGenerator).
//! - [`observer`] - An observer that records every store event.

pub mod domain;
pub mod generator;
pub mod observer;
