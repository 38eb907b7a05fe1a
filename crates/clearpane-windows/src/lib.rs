/// Application entry point: host window, controller, and message pump.
#[cfg(windows)]
mod app;

/// Console Ctrl+C handling.
#[cfg(windows)]
pub mod ctrl_c;

#[cfg(windows)]
mod event_loop;

/// The Clearpane host window.
#[cfg(windows)]
pub mod host;

/// Global hotkey registration via `RegisterHotKey`.
#[cfg(windows)]
pub mod hotkey;

/// Process and window enumeration.
#[cfg(windows)]
pub mod process;

/// `WindowSystem` over the live desktop.
#[cfg(windows)]
pub mod system;

/// DWM thumbnail clones.
#[cfg(windows)]
pub mod thumbnail;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use app::run;
#[cfg(windows)]
pub use window::Window;

/// Opens the host window and serves hotkeys until it is closed.
///
/// Only Windows has a host window; elsewhere this always fails.
#[cfg(not(windows))]
pub fn run(_config: &clearpane_core::config::Config) -> clearpane_core::WindowResult<()> {
    Err("clearpane run is only supported on Windows".into())
}
