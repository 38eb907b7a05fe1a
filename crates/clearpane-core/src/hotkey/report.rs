use std::fmt;

use serde::Serialize;

use crate::shortcut::{Shortcut, ShortcutError};

/// Result of one attempt to register a hotkey.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum RegistrationOutcome {
    /// The OS accepted the shortcut; a binding exists under `id`.
    Registered { id: i32, shortcut: Shortcut },
    /// The shortcut string was empty, so nothing was registered.
    Skipped,
    /// The shortcut parsed; registration was not attempted.
    Parsed { shortcut: Shortcut },
    /// The shortcut string could not be parsed; no OS call was made.
    ParseFailed {
        #[serde(serialize_with = "serialize_display")]
        error: ShortcutError,
    },
    /// The OS declined the reservation.
    Rejected {
        id: i32,
        shortcut: Shortcut,
        reason: String,
    },
}

impl RegistrationOutcome {
    /// Returns the trigger id when the registration succeeded.
    pub fn id(&self) -> Option<i32> {
        match self {
            Self::Registered { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Returns whether this outcome is a parse failure or OS rejection.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ParseFailed { .. } | Self::Rejected { .. })
    }
}

/// One line of a [`RegistrationReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationEntry {
    pub label: String,
    pub text: String,
    #[serde(flatten)]
    pub outcome: RegistrationOutcome,
}

/// Outcomes of a batch registration, in request order.
///
/// Registration is best-effort: a bad binding never blocks startup,
/// but the reason is kept here instead of being discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrationReport {
    pub entries: Vec<RegistrationEntry>,
}

impl RegistrationReport {
    pub fn new(entries: Vec<RegistrationEntry>) -> Self {
        Self { entries }
    }

    /// Ids of successful registrations, in request order.
    pub fn registered_ids(&self) -> Vec<i32> {
        self.entries.iter().filter_map(|e| e.outcome.id()).collect()
    }

    /// Returns the id registered for `label`, if any.
    pub fn id_for(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.outcome.id())
    }

    /// Entries that failed to parse or were rejected by the OS.
    pub fn failures(&self) -> impl Iterator<Item = &RegistrationEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Returns whether any entry failed to parse.
    pub fn has_parse_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome, RegistrationOutcome::ParseFailed { .. }))
    }
}

impl fmt::Display for RegistrationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.label)?;
        match &self.outcome {
            RegistrationOutcome::Registered { id, shortcut } => {
                write!(f, "{shortcut} registered (#{id})")
            }
            RegistrationOutcome::Skipped => write!(f, "unbound"),
            RegistrationOutcome::Parsed { shortcut } => write!(f, "{shortcut} ok"),
            RegistrationOutcome::ParseFailed { error } => {
                write!(f, "{:?} ignored: {error}", self.text)
            }
            RegistrationOutcome::Rejected {
                shortcut, reason, ..
            } => write!(f, "{shortcut} rejected by the system: {reason}"),
        }
    }
}

impl fmt::Display for RegistrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

fn serialize_display<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, outcome: RegistrationOutcome) -> RegistrationEntry {
        RegistrationEntry {
            label: label.into(),
            text: String::new(),
            outcome,
        }
    }

    #[test]
    fn failures_exclude_skipped_entries() {
        // Arrange
        let report = RegistrationReport::new(vec![
            entry("a", RegistrationOutcome::Skipped),
            entry(
                "b",
                RegistrationOutcome::ParseFailed {
                    error: ShortcutError::UnknownKey("Banana".into()),
                },
            ),
            entry(
                "c",
                RegistrationOutcome::Registered {
                    id: 4,
                    shortcut: Shortcut::new(0, 0x41),
                },
            ),
        ]);

        // Act
        let failed: Vec<_> = report.failures().map(|e| e.label.as_str()).collect();

        // Assert
        assert_eq!(failed, ["b"]);
        assert!(report.has_parse_failures());
        assert_eq!(report.registered_ids(), [4]);
        assert_eq!(report.id_for("c"), Some(4));
        assert_eq!(report.id_for("a"), None);
    }

    #[test]
    fn display_describes_each_entry() {
        // Arrange
        let report = RegistrationReport::new(vec![
            entry(
                "show_hide",
                RegistrationOutcome::Registered {
                    id: 1,
                    shortcut: Shortcut::new(0x1, 0x78),
                },
            ),
            entry("clone_current", RegistrationOutcome::Skipped),
        ]);

        // Act
        let text = report.to_string();

        // Assert
        assert_eq!(text, "show_hide: Alt+F9 registered (#1)\nclone_current: unbound\n");
    }
}
