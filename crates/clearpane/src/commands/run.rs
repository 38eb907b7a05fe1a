use std::path::Path;

use clearpane_core::{config, log};

/// Runs Clearpane in the foreground until its window is closed.
pub fn execute(path: &Path) {
    let (config, load_error) = config::load_from_deferred(path);
    let guard = log::init(&config.logging);
    if let Some(e) = load_error {
        tracing::warn!("Using default config: {e}");
    }

    if let Err(e) = clearpane_windows::run(&config) {
        tracing::error!("Run failed: {e}");
        eprintln!("Error: {e}");
        // Flush the file writer before exiting.
        drop(guard);
        std::process::exit(1);
    }
}
