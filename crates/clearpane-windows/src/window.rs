use clearpane_core::{WindowHandle, WindowResult};

use windows::Win32::Foundation::{GetLastError, HWND, SetLastError, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    GW_OWNER, GWL_EXSTYLE, GetWindow, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW,
    IsWindowVisible, SetWindowLongPtrW,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the OS.
/// This struct holds that handle and queries the OS lazily for metadata.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This allows the core to refer to windows without depending on the
    /// `windows` crate.
    pub fn from_raw(handle: WindowHandle) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the handle as a pointer-sized integer.
    pub fn raw(&self) -> WindowHandle {
        self.hwnd.0 as WindowHandle
    }

    /// Returns the window title, empty if it has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // without modifying state. Invalid handles yield zero length.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    /// Returns whether the window has the `WS_VISIBLE` style.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns whether the window has no owner window.
    ///
    /// Owned windows are dialogs and tool palettes, never a process's
    /// main window.
    pub fn is_unowned(&self) -> bool {
        // SAFETY: GetWindow only reads the window's owner link.
        unsafe { GetWindow(self.hwnd, GW_OWNER) }.map_or(true, |owner| owner.is_invalid())
    }

    /// Reads the extended style (`GWL_EXSTYLE`).
    pub fn ex_style(&self) -> WindowResult<u32> {
        // GetWindowLongPtrW returns 0 both for "no bits set" and for
        // failure, so the last-error value tells the two apart.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let style = GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE);
            if style == 0 {
                check_last_error("GetWindowLongPtrW", self.raw())?;
            }
            Ok(style as u32)
        }
    }

    /// Replaces the extended style, returning the previous value.
    pub fn set_ex_style(&self, style: u32) -> WindowResult<u32> {
        // SAFETY: SetWindowLongPtrW with GWL_EXSTYLE only changes style
        // bits. The shell re-reads them on the next frame change.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, style as isize);
            if previous == 0 {
                check_last_error("SetWindowLongPtrW", self.raw())?;
            }
            Ok(previous as u32)
        }
    }
}

fn check_last_error(call: &str, handle: WindowHandle) -> WindowResult<()> {
    // SAFETY: GetLastError reads the calling thread's last-error value.
    let error = unsafe { GetLastError() };
    if error.0 != 0 {
        return Err(format!("{call} failed for window 0x{handle:X} (error {})", error.0).into());
    }
    Ok(())
}
