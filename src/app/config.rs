//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file; every section has
//! defaults. `SMARTCHEF_DATA_DIR` overrides the storage directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Environment variable overriding `storage.dir`.
pub const DATA_DIR_ENV: &str = "SMARTCHEF_DATA_DIR";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

/// Where persisted favorites and preferences live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key the persisted state is stored under.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "smartchef-storage".into()
}

impl StorageConfig {
    /// Resolve the data directory.
    ///
    /// Order: `SMARTCHEF_DATA_DIR`, then `dir` (with a leading `~/`
    /// expanded), then `<platform data dir>/smartchef`, then `./.smartchef`.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }

        if let Some(dir) = &self.dir {
            if let Ok(rest) = dir.strip_prefix("~") {
                if let Some(home) = dirs::home_dir() {
                    return home.join(rest);
                }
            }
            return dir.clone();
        }

        dirs::data_dir()
            .map(|d| d.join("smartchef"))
            .unwrap_or_else(|| PathBuf::from(".smartchef"))
    }
}

/// Recipe generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Simulated latency of the template generator in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Upper bound on a single generation call. 0 disables the timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

const fn default_delay_ms() -> u64 {
    2000
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl GenerationConfig {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Config {
    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or a validation error.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.namespace.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "storage.namespace",
            }
            .into());
        }
        if let Some(limit) = self.generation.timeout() {
            if limit <= self.generation.delay() {
                return Err(ConfigError::InvalidValue {
                    field: "generation.timeout_ms",
                    reason: format!(
                        "{} ms does not exceed the generation delay of {} ms",
                        self.generation.timeout_ms, self.generation.delay_ms
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Install the global tracing subscriber. Logs go to stderr so stdout
    /// stays clean for command output.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
