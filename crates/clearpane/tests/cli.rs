use std::path::Path;
use std::process::{Command, Output};

fn clearpane(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clearpane"))
        .args(args)
        .output()
        .expect("failed to execute clearpane")
}

fn config_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = clearpane(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("click-through"));
}

#[test]
fn version_exits_successfully() {
    // Act
    let output = clearpane(&["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clearpane"));
}

#[test]
fn init_writes_template_and_keeps_existing_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = config_arg(&path);

    // Act
    let first = clearpane(&["init", "--config", &config]);
    std::fs::write(&path, "# mine\n").unwrap();
    let second = clearpane(&["init", "--config", &config]);

    // Assert
    assert!(first.status.success());
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("Already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn init_force_overwrites() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# mine\n").unwrap();

    // Act
    let output = clearpane(&["init", "--force", "--config", &config_arg(&path)]);

    // Assert
    assert!(output.status.success());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[hotkeys]"));
}

#[test]
fn check_accepts_generated_template() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = config_arg(&path);
    clearpane(&["init", "--config", &config]);

    // Act
    let output = clearpane(&["check", "--config", &config]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("toggle_passthrough: Ctrl+Shift+P ok"));
}

#[test]
fn check_json_reports_each_binding() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[hotkeys]\nclone_current = \"\"\n").unwrap();

    // Act
    let output = clearpane(&["check", "--json", "--config", &config_arg(&path)]);

    // Assert
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["label"], "clone_current");
    assert_eq!(entries[0]["status"], "skipped");
    assert_eq!(entries[1]["status"], "parsed");
}

#[test]
fn check_fails_on_unparseable_shortcut() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[hotkeys]\nshow_hide = \"Ctrl+Banana\"\n").unwrap();

    // Act
    let output = clearpane(&["check", "--config", &config_arg(&path)]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("show_hide"));
    assert!(stdout.contains("Banana"));
}

#[test]
fn check_fails_on_malformed_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[hotkeys\n").unwrap();

    // Act
    let output = clearpane(&["check", "--config", &config_arg(&path)]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(not(windows))]
#[test]
fn run_is_rejected_off_windows() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    // Act
    let output = clearpane(&["run", "--config", &config_arg(&path)]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only supported on Windows"));
}

#[cfg(not(windows))]
#[test]
fn run_logs_malformed_config_warning() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[hotkeys\n").unwrap();

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_clearpane"))
        .args(["run", "--config", &config_arg(&path)])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute clearpane");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using default config"));
}
