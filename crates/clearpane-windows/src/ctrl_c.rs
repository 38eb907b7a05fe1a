//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.
//!
//! The handler runs on a system thread, so it asks the host window to
//! close instead of touching any state directly.

use std::sync::atomic::{AtomicUsize, Ordering};

use clearpane_core::{WindowHandle, WindowResult};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::Win32::UI::WindowsAndMessaging::{PostMessageW, WM_CLOSE};
use windows::core::BOOL;

use crate::window::Window;

/// Host window to close, written by `set_handler`.
static TARGET: AtomicUsize = AtomicUsize::new(0);

/// Posts `WM_CLOSE` to `host` on Ctrl+C or Ctrl+Break.
pub fn set_handler(host: WindowHandle) -> WindowResult<()> {
    TARGET.store(host, Ordering::SeqCst);
    // SAFETY: `handler` is a plain function that only reads an atomic.
    unsafe { SetConsoleCtrlHandler(Some(handler), true)? };
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    if ctrl_type != CTRL_C_EVENT && ctrl_type != CTRL_BREAK_EVENT {
        return BOOL(0);
    }
    let host = TARGET.load(Ordering::SeqCst);
    if host == 0 {
        return BOOL(0);
    }
    // SAFETY: PostMessageW is callable from any thread; a stale handle
    // makes it fail harmlessly.
    unsafe {
        let _ = PostMessageW(
            Some(Window::from_raw(host).hwnd()),
            WM_CLOSE,
            WPARAM(0),
            LPARAM(0),
        );
    }
    BOOL(1)
}
