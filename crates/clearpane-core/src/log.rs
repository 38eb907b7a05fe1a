//! Logging setup.
//!
//! Call sites use the `tracing` macros. [`init`] installs a compact
//! stderr layer and, when enabled, a daily-rolling file layer under
//! `~/.config/clearpane/logs/`. `RUST_LOG` overrides the configured level.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "clearpane.log";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
        }
    }
}

/// Flushes the file writer when dropped. Keep it alive until exit.
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Installs the global subscriber. Call once at startup.
///
/// Returns a guard when file logging is active. A second call leaves
/// the first subscriber in place.
pub fn init(config: &LogConfig) -> Option<LogGuard> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(&config.level)))
    };
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let appender = crate::config::log_dir()
        .filter(|_| config.enabled)
        .and_then(|dir| match file_appender(&dir) {
            Ok(appender) => Some(appender),
            Err(e) => {
                eprintln!("Warning: file logging disabled: {e}");
                None
            }
        });
    let Some(appender) = appender else {
        let _ = tracing_subscriber::registry()
            .with(filter())
            .with(stderr)
            .try_init();
        return None;
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = fmt::layer().with_writer(writer).with_ansi(false);
    let installed = tracing_subscriber::registry()
        .with(filter())
        .with(stderr)
        .with(file)
        .try_init()
        .is_ok();

    installed.then_some(LogGuard { _file: guard })
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}

/// Maps a configured level to a filter directive, defaulting to `info`.
fn level(s: &str) -> &'static str {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_is_lenient() {
        // Assert
        assert_eq!(level("DEBUG"), "debug");
        assert_eq!(level(" warning "), "warn");
        assert_eq!(level("verbose"), "info");
    }

    #[test]
    fn disabled_file_logging_returns_no_guard() {
        // Act
        let guard = init(&LogConfig::default());

        // Assert
        assert!(guard.is_none());
    }
}
