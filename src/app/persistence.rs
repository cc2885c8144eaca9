//! Persisted subset of store state.
//!
//! Only favorites and dietary preferences survive a restart. They are
//! stored under a single namespace key as
//! `{"state": {"favoriteRecipes": [...], "dietaryPreferences": [...]}, "version": 0}`.
//!
//! Writes are queued on an unbounded channel and drained by a background
//! task, so a mutation never waits on storage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::domain::{PreferenceSet, Recipe};
use crate::error::PersistenceError;
use crate::port::Storage;

/// Current persisted state format version.
pub const STATE_VERSION: u32 = 0;

/// The two fields that are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub favorite_recipes: Vec<Recipe>,
    #[serde(default)]
    pub dietary_preferences: PreferenceSet,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a PersistedState,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// Serialize state into its stored form.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if serialization fails.
pub fn encode(state: &PersistedState) -> Result<String, PersistenceError> {
    serde_json::to_string(&EnvelopeRef {
        state,
        version: STATE_VERSION,
    })
    .map_err(PersistenceError::Encode)
}

/// Parse stored state.
///
/// # Errors
///
/// Returns [`PersistenceError::Decode`] for malformed JSON and
/// [`PersistenceError::UnsupportedVersion`] for a version this build does
/// not understand.
pub fn decode(raw: &str) -> Result<PersistedState, PersistenceError> {
    let envelope: Envelope = serde_json::from_str(raw).map_err(PersistenceError::Decode)?;
    if envelope.version != STATE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: envelope.version,
            expected: STATE_VERSION,
        });
    }
    Ok(envelope.state)
}

enum Command {
    Save(PersistedState),
    Flush(oneshot::Sender<()>),
}

/// Restores and writes [`PersistedState`] through a [`Storage`] backend.
///
/// Must be created inside a Tokio runtime: [`Persister::spawn`] starts the
/// background writer.
pub struct Persister {
    storage: Arc<dyn Storage>,
    key: String,
    tx: mpsc::UnboundedSender<Command>,
}

impl Persister {
    /// Start the background writer for `key` on `storage`.
    pub fn spawn(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&storage), key.clone(), rx));
        Self { storage, key, tx }
    }

    /// Load persisted state, falling back to empty defaults when it is
    /// missing, unreadable or corrupt.
    #[must_use]
    pub fn restore(&self) -> PersistedState {
        match self.try_restore() {
            Ok(Some(state)) => {
                debug!(
                    key = %self.key,
                    favorites = state.favorite_recipes.len(),
                    preferences = state.dietary_preferences.len(),
                    "Restored persisted state"
                );
                state
            }
            Ok(None) => PersistedState::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable persisted state");
                PersistedState::default()
            }
        }
    }

    /// Load persisted state, reporting why it could not be read.
    ///
    /// # Errors
    ///
    /// Returns the storage or decode failure.
    pub fn try_restore(&self) -> Result<Option<PersistedState>, PersistenceError> {
        self.storage
            .load(&self.key)?
            .map(|raw| decode(&raw))
            .transpose()
    }

    /// Queue `state` for writing. Returns immediately.
    pub fn save(&self, state: PersistedState) {
        if self.tx.send(Command::Save(state)).is_err() {
            warn!(key = %self.key, "Persistence writer stopped; state not saved");
        }
    }

    /// Wait until every save queued before this call has been written.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run_writer(
    storage: Arc<dyn Storage>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<Command>,
) {
    while let Some(command) = rx.recv().await {
        let mut pending = None;
        let mut waiters = Vec::new();

        match command {
            Command::Save(state) => pending = Some(state),
            Command::Flush(done) => waiters.push(done),
        }

        // Only the newest queued state matters.
        while let Ok(next) = rx.try_recv() {
            match next {
                Command::Save(state) => pending = Some(state),
                Command::Flush(done) => waiters.push(done),
            }
        }

        if let Some(state) = pending {
            write_state(Arc::clone(&storage), key.clone(), state).await;
        }

        for done in waiters {
            let _ = done.send(());
        }
    }
}

async fn write_state(storage: Arc<dyn Storage>, key: String, state: PersistedState) {
    let encoded = match encode(&state) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to encode persisted state");
            return;
        }
    };

    let result = tokio::task::spawn_blocking(move || {
        let outcome = storage.save(&key, &encoded);
        (key, outcome)
    })
    .await;

    match result {
        Ok((key, Ok(()))) => debug!(key = %key, "Persisted state written"),
        Ok((key, Err(e))) => warn!(key = %key, error = %e, "Failed to write persisted state"),
        Err(e) => warn!(error = %e, "Persistence write task panicked"),
    }
}
