//! Durable key/value storage port.

use crate::error::PersistenceError;

/// Key/value string storage.
///
/// The storage layer only moves raw strings; encoding is the
/// [`Persister`](crate::app::Persister)'s job.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`. `Ok(None)` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Read`] if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
