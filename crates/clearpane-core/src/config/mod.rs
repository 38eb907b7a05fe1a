mod loader;
pub mod template;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Action;
use crate::hotkey::{self, RegistrationEntry, RegistrationReport};
use crate::log::LogConfig;
use crate::passthrough::SiblingIdentity;

pub use loader::{
    ConfigError, config_dir, config_path, load, load_from, load_from_deferred, log_dir, try_load,
    try_load_from,
};

/// Title used to recognise sibling instances when none is configured.
pub const DEFAULT_TITLE: &str = "Clearpane";

/// Top-level configuration for Clearpane.
///
/// Loaded from `~/.config/clearpane/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global shortcuts.
    pub hotkeys: HotkeyConfig,
    /// Click-through behaviour.
    pub passthrough: PassthroughConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Shortcut strings for each action. An empty string leaves the
/// action unbound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Hide the window, or show and focus it.
    pub show_hide: String,
    /// Clone the current foreground window.
    pub clone_current: String,
    /// Toggle click-through.
    pub toggle_passthrough: String,
}

/// Click-through settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassthroughConfig {
    /// Main-window title shared by every instance. Also used as the
    /// host window's own title.
    pub title: String,
    /// Also require sibling processes to run the same executable, when
    /// their image path is readable.
    pub match_executable: bool,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            show_hide: "Ctrl+Shift+H".into(),
            clone_current: "Ctrl+Shift+C".into(),
            toggle_passthrough: "Ctrl+Shift+P".into(),
        }
    }
}

impl Default for PassthroughConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            match_executable: true,
        }
    }
}

impl HotkeyConfig {
    /// Returns every action with its shortcut string, in registration order.
    pub fn bindings(&self) -> [(Action, &str); 3] {
        [
            (Action::CloneCurrent, self.clone_current.as_str()),
            (Action::TogglePassthrough, self.toggle_passthrough.as_str()),
            (Action::ShowHide, self.show_hide.as_str()),
        ]
    }

    /// Parses every binding without registering anything.
    pub fn check(&self) -> RegistrationReport {
        let entries = self
            .bindings()
            .into_iter()
            .map(|(action, text)| RegistrationEntry {
                label: action.config_key().into(),
                text: text.into(),
                outcome: hotkey::check(text),
            })
            .collect();
        RegistrationReport::new(entries)
    }
}

impl PassthroughConfig {
    /// Builds the sibling identity, pinning `executable` when enabled.
    pub fn identity(&self, executable: Option<PathBuf>) -> SiblingIdentity {
        let identity = SiblingIdentity::by_title(self.title.clone());
        match executable {
            Some(path) if self.match_executable => identity.with_executable(path),
            _ => identity,
        }
    }
}

impl Config {
    /// Normalises user input.
    ///
    /// Trims shortcut strings and restores the default title when the
    /// configured one is blank, since an empty title never matches.
    pub fn validate(&mut self) {
        for text in [
            &mut self.hotkeys.show_hide,
            &mut self.hotkeys.clone_current,
            &mut self.hotkeys.toggle_passthrough,
        ] {
            *text = text.trim().to_string();
        }
        if self.passthrough.title.trim().is_empty() {
            self.passthrough.title = DEFAULT_TITLE.into();
        }
    }
}
