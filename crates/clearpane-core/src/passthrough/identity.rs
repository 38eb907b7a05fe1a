use std::path::{Path, PathBuf};

use crate::window::ProcessInfo;

/// How sibling instances of the application are recognised.
///
/// The main-window title must match exactly. When an executable path is
/// configured and the process reports one too, the paths must also
/// match; processes whose image path cannot be read fall back to the
/// title alone. Unrelated programs that happen to share the title are
/// only excluded when their path is readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingIdentity {
    pub title: String,
    pub executable: Option<PathBuf>,
}

impl SiblingIdentity {
    /// Matches by main-window title only.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            executable: None,
        }
    }

    /// Additionally requires the given executable path when available.
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// Returns whether `process` looks like another instance.
    pub fn matches(&self, process: &ProcessInfo) -> bool {
        if self.title.is_empty() || process.main_window_title != self.title {
            return false;
        }
        match (&self.executable, &process.executable) {
            (Some(ours), Some(theirs)) => same_path(ours, theirs),
            _ => true,
        }
    }
}

/// Windows paths compare case-insensitively.
fn same_path(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().eq_ignore_ascii_case(&b.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(title: &str, executable: Option<&str>) -> ProcessInfo {
        ProcessInfo {
            pid: 1,
            main_window_title: title.into(),
            executable: executable.map(PathBuf::from),
        }
    }

    #[test]
    fn title_must_match_exactly() {
        // Arrange
        let identity = SiblingIdentity::by_title("Clearpane");

        // Act / Assert
        assert!(identity.matches(&process("Clearpane", None)));
        assert!(!identity.matches(&process("clearpane", None)));
        assert!(!identity.matches(&process("Clearpane - copy", None)));
    }

    #[test]
    fn empty_title_never_matches() {
        // Arrange
        let identity = SiblingIdentity::by_title("");

        // Act / Assert
        assert!(!identity.matches(&process("", None)));
    }

    #[test]
    fn executable_excludes_impostors_with_same_title() {
        // Arrange
        let identity =
            SiblingIdentity::by_title("Clearpane").with_executable(r"C:\Tools\clearpane.exe");

        // Act / Assert
        assert!(identity.matches(&process("Clearpane", Some(r"c:\tools\CLEARPANE.EXE"))));
        assert!(!identity.matches(&process("Clearpane", Some(r"C:\Other\app.exe"))));
    }

    #[test]
    fn unreadable_executable_falls_back_to_title() {
        // Arrange
        let identity =
            SiblingIdentity::by_title("Clearpane").with_executable(r"C:\Tools\clearpane.exe");

        // Act / Assert
        assert!(identity.matches(&process("Clearpane", None)));
    }
}
