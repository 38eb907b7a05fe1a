use std::path::Path;

use clearpane_core::config;

/// Writes the commented default configuration to `path`.
///
/// An existing file is kept unless `force` is set.
pub fn execute(path: &Path, force: bool) {
    if path.exists() && !force {
        println!("Already exists: {}", path.display());
        println!("Pass --force to overwrite it.");
        return;
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    match std::fs::write(path, config::template::generate()) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
