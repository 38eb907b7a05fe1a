use std::path::PathBuf;

/// A boxed error type for window operations.
///
/// Platform crates surface OS failures through this alias so the core
/// never depends on a platform error type.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A raw window handle as a pointer-sized integer.
pub type WindowHandle = usize;

/// A running process as seen by sibling-window matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Title of the process's main window, empty if it has none.
    pub main_window_title: String,
    /// Full image path, when the process could be queried for it.
    pub executable: Option<PathBuf>,
}

/// OS primitives used by the pass-through controller.
///
/// Each platform crate (e.g. `clearpane-windows`) provides its own
/// implementation. All calls are synchronous and run on the thread that
/// owns the host window.
pub trait WindowSystem {
    /// Returns the extended style bitmask of a window.
    fn extended_style(&self, window: WindowHandle) -> WindowResult<u32>;

    /// Replaces the extended style bitmask, returning the previous value.
    fn set_extended_style(&mut self, window: WindowHandle, style: u32) -> WindowResult<u32>;

    /// Lists running processes.
    fn processes(&self) -> WindowResult<Vec<ProcessInfo>>;

    /// Lists the top-level windows of a process, in enumeration order.
    ///
    /// Fails if the process no longer exists.
    fn top_level_windows(&self, pid: u32) -> WindowResult<Vec<WindowHandle>>;

    /// Returns the window that currently has keyboard focus, if any.
    fn foreground_window(&self) -> Option<WindowHandle>;
}

/// The window that owns the hotkeys and is toggled by them.
pub trait HostWindow {
    /// Returns the raw handle of the host window.
    fn handle(&self) -> WindowHandle;

    /// Returns whether the window is currently hidden.
    fn is_hidden(&self) -> bool;

    /// Hides the window without destroying it.
    fn hide(&mut self);

    /// Shows the window and gives it focus.
    fn show_and_focus(&mut self);

    /// Leaves any full-screen or maximized mode, restoring normal bounds.
    fn exit_fullscreen(&mut self);
}

/// Creates a live clone (thumbnail) of another window inside the host.
pub trait CloneSink {
    fn clone_window(&mut self, target: WindowHandle) -> WindowResult<()>;
}
