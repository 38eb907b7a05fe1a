pub mod check;
pub mod init;
pub mod run;

use std::path::PathBuf;

use clearpane_core::config;

/// Resolves the config file: the `--config` override, else the default
/// location. Exits when neither is available.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.or_else(config::config_path) {
        return path;
    }
    eprintln!("Error: could not determine home directory.");
    std::process::exit(1);
}
