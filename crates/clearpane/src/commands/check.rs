use std::path::Path;

use clearpane_core::config::{self, Config};

/// ANSI escape helpers for check output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

/// Loads the config at `path` and parses every shortcut.
///
/// Exits with status 1 when the file is malformed or any configured
/// shortcut fails to parse. A missing file checks the defaults.
pub fn execute(path: &Path, json: bool) {
    let config = match config::try_load_from(path) {
        Ok(config) => config,
        Err(e) if e.is_not_found() => {
            if !json {
                println!("  {WARN} {} not found (using defaults)", path.display());
            }
            Config::default()
        }
        Err(e) => {
            eprintln!("  {FAIL} {e}");
            std::process::exit(1);
        }
    };

    let report = config.hotkeys.check();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: could not serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for entry in &report.entries {
            let tag = if entry.outcome.is_failure() { FAIL } else { OK };
            println!("  {tag} {entry}");
        }
        println!(
            "  {OK} Pass-through matches windows titled {:?}",
            config.passthrough.title
        );
    }

    if report.has_parse_failures() {
        std::process::exit(1);
    }
}
