use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Config;

/// Why the config file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config path")]
    NoPath,
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns true if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Returns the config directory: `~/.config/clearpane/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("clearpane"))
}

/// Returns the config file path: `~/.config/clearpane/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the log directory: `~/.config/clearpane/logs/`.
pub fn log_dir() -> Option<PathBuf> {
    config_dir().map(|d| d.join("logs"))
}

/// Tries to load and parse the config file at `path`.
///
/// The result is normalised via [`Config::validate`].
pub fn try_load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate();
    Ok(config)
}

/// Tries to load `~/.config/clearpane/config.toml`.
pub fn try_load() -> Result<Config, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoPath)?;
    try_load_from(&path)
}

/// Loads the config file at `path`, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
pub fn load_from(path: &Path) -> Config {
    load_or_default(|| try_load_from(path))
}

/// Loads the configuration from disk, falling back to defaults.
pub fn load() -> Config {
    load_or_default(try_load)
}

/// Loads the config file at `path` without logging.
///
/// Returns defaults plus the error when the file exists but cannot be
/// read or parsed, so callers can report it once logging is set up.
/// A missing file yields defaults and no error.
pub fn load_from_deferred(path: &Path) -> (Config, Option<ConfigError>) {
    split(try_load_from(path))
}

fn split(result: Result<Config, ConfigError>) -> (Config, Option<ConfigError>) {
    match result {
        Ok(config) => (config, None),
        Err(e) if e.is_not_found() => (Config::default(), None),
        Err(e) => (Config::default(), Some(e)),
    }
}

fn load_or_default(try_load: impl FnOnce() -> Result<Config, ConfigError>) -> Config {
    let (config, error) = split(try_load());
    if let Some(e) = error {
        tracing::warn!("Using default config: {e}");
        eprintln!("Warning: {e}");
    }
    config
}
