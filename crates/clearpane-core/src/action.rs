use std::fmt;

use serde::{Deserialize, Serialize};

/// An action that can be triggered by a global hotkey.
///
/// Hotkey handlers do not act on windows directly. They queue one of
/// these, and the owning controller performs it on the same thread
/// right after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Hide the host window, or show and focus it if hidden.
    ShowHide,
    /// Clone the current foreground window into the host window.
    CloneCurrent,
    /// Toggle click-through on the host and its sibling windows.
    TogglePassthrough,
}

impl Action {
    /// Returns the config key naming this action's shortcut.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::ShowHide => "show_hide",
            Self::CloneCurrent => "clone_current",
            Self::TogglePassthrough => "toggle_passthrough",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}
