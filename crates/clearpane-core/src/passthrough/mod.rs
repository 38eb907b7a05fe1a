//! Click-through toggle for the host window and its siblings.
//!
//! Activating pass-through ORs `WS_EX_LAYERED | WS_EX_TRANSPARENT` into
//! the extended style of the host window and of one top-level window per
//! sibling instance. Deactivating writes the saved styles back.

mod identity;

use std::collections::HashMap;

use crate::window::{WindowHandle, WindowResult, WindowSystem};

pub use identity::SiblingIdentity;

/// `WS_EX_TRANSPARENT`: the window does not receive pointer input.
pub const WS_EX_TRANSPARENT: u32 = 0x0000_0020;
/// `WS_EX_LAYERED`: the window is composited by the DWM.
pub const WS_EX_LAYERED: u32 = 0x0008_0000;
/// The bits applied while pass-through is active.
pub const PASSTHROUGH_STYLE: u32 = WS_EX_LAYERED | WS_EX_TRANSPARENT;

/// What a transition did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassthroughReport {
    /// State after the transition.
    pub active: bool,
    /// Windows whose style was written, host first.
    pub changed: Vec<WindowHandle>,
    /// Sibling windows that could not be read or written.
    pub failed: Vec<(WindowHandle, String)>,
}

/// Owns the pass-through state machine for one host window.
///
/// Only [`toggle`](Self::toggle) moves between states. While active, the
/// controller owns the pass-through bits of every window it changed;
/// edits made by others in the meantime are overwritten on restore.
#[derive(Debug)]
pub struct PassthroughController {
    host: WindowHandle,
    identity: SiblingIdentity,
    active: bool,
    /// Host style captured by the most recent activation.
    self_original_style: Option<u32>,
    /// Sibling styles captured by the current activation.
    snapshots: HashMap<WindowHandle, u32>,
}

impl PassthroughController {
    pub fn new(host: WindowHandle, identity: SiblingIdentity) -> Self {
        Self {
            host,
            identity,
            active: false,
            self_original_style: None,
            snapshots: HashMap::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn identity(&self) -> &SiblingIdentity {
        &self.identity
    }

    /// Returns the style saved for a sibling window during this cycle.
    pub fn snapshot(&self, window: WindowHandle) -> Option<u32> {
        self.snapshots.get(&window).copied()
    }

    /// Switches pass-through on when off, and off when on.
    ///
    /// Fails only when the host window's style cannot be read or
    /// written, in which case the state is unchanged. Sibling failures
    /// are logged and listed in the report; windows already changed are
    /// not rolled back.
    pub fn toggle<S: WindowSystem>(&mut self, sys: &mut S) -> WindowResult<PassthroughReport> {
        if self.active {
            self.deactivate(sys)
        } else {
            self.activate(sys)
        }
    }

    /// Re-applies the pass-through bits to the host while active.
    ///
    /// The shell may reset extended styles when a hidden window is shown
    /// again. This is not a state transition.
    pub fn reassert<S: WindowSystem>(&self, sys: &mut S) -> WindowResult<()> {
        if !self.active {
            return Ok(());
        }
        let style = sys.extended_style(self.host)?;
        sys.set_extended_style(self.host, style | PASSTHROUGH_STYLE)?;
        Ok(())
    }

    /// Deactivates if active, so no window stays click-through on exit.
    pub fn release<S: WindowSystem>(
        &mut self,
        sys: &mut S,
    ) -> WindowResult<Option<PassthroughReport>> {
        if !self.active {
            return Ok(None);
        }
        self.deactivate(sys).map(Some)
    }

    fn activate<S: WindowSystem>(&mut self, sys: &mut S) -> WindowResult<PassthroughReport> {
        let original = sys.extended_style(self.host)?;
        sys.set_extended_style(self.host, original | PASSTHROUGH_STYLE)?;
        self.self_original_style = Some(original);
        self.snapshots.clear();

        let mut report = PassthroughReport {
            active: true,
            changed: vec![self.host],
            failed: Vec::new(),
        };

        for window in self.siblings(sys) {
            let result = sys.extended_style(window).and_then(|style| {
                sys.set_extended_style(window, style | PASSTHROUGH_STYLE)?;
                Ok(style)
            });
            match result {
                Ok(style) => {
                    self.snapshots.insert(window, sibling_snapshot(style));
                    report.changed.push(window);
                }
                Err(e) => {
                    tracing::warn!("Failed to make window 0x{window:X} click-through: {e}");
                    report.failed.push((window, e.to_string()));
                }
            }
        }

        self.active = true;
        tracing::info!(
            "Pass-through on ({} windows, {} failed)",
            report.changed.len(),
            report.failed.len()
        );
        Ok(report)
    }

    fn deactivate<S: WindowSystem>(&mut self, sys: &mut S) -> WindowResult<PassthroughReport> {
        let original = match self.self_original_style {
            Some(style) => style,
            None => sys.extended_style(self.host)? & !PASSTHROUGH_STYLE,
        };
        sys.set_extended_style(self.host, original)?;

        let snapshots = std::mem::take(&mut self.snapshots);
        let mut report = PassthroughReport {
            active: false,
            changed: vec![self.host],
            failed: Vec::new(),
        };

        for window in self.siblings(sys) {
            // A window without a snapshot appeared after activation (or
            // failed to activate); only the bits we own are cleared.
            let restore = match snapshots.get(&window) {
                Some(style) => Ok(*style),
                None => sys
                    .extended_style(window)
                    .map(|style| style & !PASSTHROUGH_STYLE),
            };
            match restore.and_then(|style| sys.set_extended_style(window, style)) {
                Ok(_) => report.changed.push(window),
                Err(e) => {
                    tracing::warn!("Failed to restore style of window 0x{window:X}: {e}");
                    report.failed.push((window, e.to_string()));
                }
            }
        }

        self.active = false;
        tracing::info!(
            "Pass-through off ({} windows, {} failed)",
            report.changed.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Collects one window per sibling process.
    ///
    /// The first enumerated window of each matching process is used.
    /// When that window is the host itself the process is the host's
    /// own and is skipped. Processes that vanish between listing and
    /// querying have no window.
    fn siblings<S: WindowSystem>(&self, sys: &S) -> Vec<WindowHandle> {
        let processes = match sys.processes() {
            Ok(processes) => processes,
            Err(e) => {
                tracing::warn!("Failed to list processes: {e}");
                return Vec::new();
            }
        };

        processes
            .iter()
            .filter(|process| self.identity.matches(process))
            .filter_map(|process| match sys.top_level_windows(process.pid) {
                Ok(windows) => windows.first().copied().filter(|w| *w != self.host),
                Err(e) => {
                    tracing::debug!("Skipping process {}: {e}", process.pid);
                    None
                }
            })
            .collect()
    }
}

/// Style to restore a sibling to on deactivation.
///
/// A sibling that already carries both pass-through bits was left
/// click-through by another instance; restoring that would keep it
/// click-through, so the bits are dropped. A lone layered or
/// transparent bit belongs to the window and is kept.
fn sibling_snapshot(style: u32) -> u32 {
    if style & PASSTHROUGH_STYLE == PASSTHROUGH_STYLE {
        style & !PASSTHROUGH_STYLE
    } else {
        style
    }
}
