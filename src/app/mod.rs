//! Application layer - the recipe store, persistence and configuration.

mod config;
mod persistence;
mod store;

pub use config::{Config, GenerationConfig, LoggingConfig, StorageConfig, DATA_DIR_ENV};
pub use persistence::{decode, encode, PersistedState, Persister, STATE_VERSION};
pub use store::{RecipeStore, StoreSnapshot};
