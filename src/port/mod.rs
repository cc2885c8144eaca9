//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the store meets the outside world:
//!
//! ```text
//!                 ┌─────────────────────┐
//!                 │     RecipeStore     │
//!                 └─────────────────────┘
//!                    │        │        │
//!                    ▼        ▼        ▼
//!          ┌───────────┐ ┌─────────┐ ┌──────────┐
//!          │ Generator │ │ Storage │ │ Observer │
//!          └───────────┘ └─────────┘ └──────────┘
//! ```
//!
//! - [`RecipeGenerator`] - Turns ingredients and preferences into a recipe
//! - [`Storage`] - Durable key/value strings for persisted state
//! - [`StoreObserver`] - Change notifications after each store mutation

mod generator;
mod observer;
mod storage;

pub use generator::RecipeGenerator;
pub use observer::{StoreEvent, StoreObserver};
pub use storage::Storage;
