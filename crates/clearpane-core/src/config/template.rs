/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `clearpane init` to create a starter config file that
/// users can immediately edit.
pub fn generate() -> String {
    r##"# Clearpane configuration
# Location: ~/.config/clearpane/config.toml

[hotkeys]
# Shortcuts are modifiers followed by one key, joined with "+".
# Modifiers: Ctrl, Alt, Shift, Win. Keys: A-Z, 0-9, F1-F24, Num0-Num9,
# Enter, Space, Tab, Esc, Home, End, PageUp, PageDown, arrows, Pause...
# Leave a shortcut empty ("") to disable it.

# Hide the window, or show and focus it again.
show_hide = "Ctrl+Shift+H"
# Clone the window that currently has focus.
clone_current = "Ctrl+Shift+C"
# Make this window (and other Clearpane windows) ignore the mouse.
toggle_passthrough = "Ctrl+Shift+P"

[passthrough]
# Main-window title shared by every Clearpane instance. Windows of other
# processes with exactly this title are toggled together with this one.
title = "Clearpane"
# Also require those processes to run the same executable, when Windows
# lets us read their image path.
match_executable = true

[logging]
# Enable file logging to ~/.config/clearpane/logs/.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
level = "info"
"##
    .to_string()
}
