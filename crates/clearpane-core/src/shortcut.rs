//! Parsing of human-readable shortcut strings such as `Ctrl+Alt+F9`.
//!
//! A shortcut is one or more `+`-separated tokens: any number of
//! modifiers followed by exactly one key. Tokens are trimmed and matched
//! case-insensitively, and may be wrapped in brackets (`[CTRL]+[ALT]+F9`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::keys;

/// Modifier bit for the Alt key (`MOD_ALT`).
pub const MOD_ALT: u32 = 0x0001;
/// Modifier bit for the Ctrl key (`MOD_CONTROL`).
pub const MOD_CONTROL: u32 = 0x0002;
/// Modifier bit for the Shift key (`MOD_SHIFT`).
pub const MOD_SHIFT: u32 = 0x0004;
/// Modifier bit for the Windows key (`MOD_WIN`).
pub const MOD_WIN: u32 = 0x0008;

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Win,
}

impl Modifier {
    /// Display order used when printing a shortcut.
    const ORDER: [Modifier; 4] = [Self::Ctrl, Self::Alt, Self::Shift, Self::Win];

    /// Returns the Win32 hotkey flag for this modifier.
    pub fn flag(self) -> u32 {
        match self {
            Self::Alt => MOD_ALT,
            Self::Ctrl => MOD_CONTROL,
            Self::Shift => MOD_SHIFT,
            Self::Win => MOD_WIN,
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => Some(Self::Ctrl),
            "ALT" => Some(Self::Alt),
            "SHIFT" => Some(Self::Shift),
            "WIN" | "SUPER" | "META" => Some(Self::Win),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Win => "Win",
        }
    }
}

/// Why a shortcut string could not be decomposed into modifiers and a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    #[error("shortcut is empty")]
    Empty,
    #[error("shortcut {0:?} has no key, only modifiers")]
    MissingKey(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
    #[error("modifier {0:?} is repeated")]
    DuplicateModifier(String),
    #[error("shortcut {0:?} names more than one key")]
    MultipleKeys(String),
}

/// A parsed shortcut: a modifier mask plus a single virtual key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Bitwise OR of the `MOD_*` flags.
    pub modifiers: u32,
    /// Windows virtual key code.
    pub key_code: u32,
}

impl Shortcut {
    pub fn new(modifiers: u32, key_code: u32) -> Self {
        Self {
            modifiers,
            key_code,
        }
    }

    /// Parses a shortcut string such as `"Ctrl+Shift+P"`.
    pub fn parse(text: &str) -> Result<Self, ShortcutError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let tokens: Vec<&str> = text.split('+').map(strip_token).collect();
        let (key_token, modifier_tokens) = tokens.split_last().ok_or(ShortcutError::Empty)?;

        let mut modifiers = 0;
        for token in modifier_tokens {
            let Some(modifier) = Modifier::from_token(token) else {
                return Err(if keys::vk_from_name(token).is_some() {
                    ShortcutError::MultipleKeys(text.to_string())
                } else {
                    ShortcutError::UnknownModifier(token.to_string())
                });
            };
            if modifiers & modifier.flag() != 0 {
                return Err(ShortcutError::DuplicateModifier(token.to_string()));
            }
            modifiers |= modifier.flag();
        }

        if key_token.is_empty() || Modifier::from_token(key_token).is_some() {
            return Err(ShortcutError::MissingKey(text.to_string()));
        }
        let key_code = keys::vk_from_name(key_token)
            .ok_or_else(|| ShortcutError::UnknownKey(key_token.to_string()))?;

        Ok(Self::new(modifiers, key_code))
    }

    /// Returns whether the given modifier is part of this shortcut.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers & modifier.flag() != 0
    }
}

/// Trims whitespace and optional `[...]` brackets from a token.
fn strip_token(token: &str) -> &str {
    let token = token.trim();
    token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .map(str::trim)
        .unwrap_or(token)
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in Modifier::ORDER {
            if self.has(modifier) {
                write!(f, "{}+", modifier.name())?;
            }
        }
        write!(f, "{}", keys::name_from_vk(self.key_code))
    }
}

impl Serialize for Shortcut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Shortcut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_and_function_key() {
        // Act
        let shortcut = Shortcut::parse("Ctrl+Alt+F9").unwrap();

        // Assert
        assert_eq!(shortcut.modifiers, MOD_CONTROL | MOD_ALT);
        assert_eq!(shortcut.key_code, 0x78);
    }

    #[test]
    fn whitespace_case_and_brackets_are_ignored() {
        // Act
        let plain = Shortcut::parse("Ctrl+Shift+P").unwrap();
        let messy = Shortcut::parse("  [CTRL] + shift +p ").unwrap();

        // Assert
        assert_eq!(plain, messy);
    }

    #[test]
    fn key_without_modifiers_is_allowed() {
        // Act
        let shortcut = Shortcut::parse("Pause").unwrap();

        // Assert
        assert_eq!(shortcut, Shortcut::new(0, 0x13));
    }

    #[test]
    fn blank_string_is_empty() {
        // Assert
        assert_eq!(Shortcut::parse("   "), Err(ShortcutError::Empty));
    }

    #[test]
    fn modifiers_only_is_missing_key() {
        // Assert
        assert!(matches!(
            Shortcut::parse("Ctrl+Alt"),
            Err(ShortcutError::MissingKey(_))
        ));
        assert!(matches!(
            Shortcut::parse("Ctrl+"),
            Err(ShortcutError::MissingKey(_))
        ));
    }

    #[test]
    fn two_keys_are_rejected() {
        // Assert
        assert!(matches!(
            Shortcut::parse("Ctrl+A+B"),
            Err(ShortcutError::MultipleKeys(_))
        ));
    }

    #[test]
    fn unknown_tokens_are_reported() {
        // Assert
        assert_eq!(
            Shortcut::parse("Hyper+A"),
            Err(ShortcutError::UnknownModifier("Hyper".into()))
        );
        assert_eq!(
            Shortcut::parse("Ctrl+Banana"),
            Err(ShortcutError::UnknownKey("Banana".into()))
        );
    }

    #[test]
    fn repeated_modifier_is_rejected() {
        // Assert
        assert!(matches!(
            Shortcut::parse("Ctrl+Control+A"),
            Err(ShortcutError::DuplicateModifier(_))
        ));
    }

    #[test]
    fn display_uses_canonical_order() {
        // Arrange
        let shortcut = Shortcut::parse("shift+win+alt+ctrl+k").unwrap();

        // Act / Assert
        assert_eq!(shortcut.to_string(), "Ctrl+Alt+Shift+Win+K");
    }
}
