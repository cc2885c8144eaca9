use thiserror::Error;

use crate::domain::error::DomainError;

/// User-visible message for a request with too few ingredients.
pub const TOO_FEW_INGREDIENTS: &str = "Please add at least 2 ingredients";

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Recipe generation failures.
///
/// The display text is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The request cannot be served; the caller can fix it.
    #[error("{message}")]
    InvalidRequest { message: String },

    /// The generation backend failed or timed out.
    #[error("{message}")]
    Service { message: String },
}

impl GenerationError {
    #[must_use]
    pub fn too_few_ingredients() -> Self {
        Self::InvalidRequest {
            message: TOO_FEW_INGREDIENTS.to_string(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }
}

/// Failures reading or writing persisted store state.
///
/// Never surfaced to the user: restores fall back to empty defaults and the
/// background writer only logs.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read persisted state: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write persisted state: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode persisted state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode persisted state: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unsupported persisted state version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
