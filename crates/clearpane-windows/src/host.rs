use std::sync::Once;

use clearpane_core::{HostWindow, WindowHandle, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, IDC_ARROW, IsZoomed,
    LoadCursorW, PostQuitMessage, RegisterClassW, SW_HIDE, SW_RESTORE, SW_SHOW,
    SetForegroundWindow, ShowWindow, WINDOW_EX_STYLE, WM_CLOSE, WM_SIZE, WNDCLASSW,
    WS_OVERLAPPEDWINDOW, WS_VISIBLE,
};
use windows::core::{HSTRING, w};

use crate::thumbnail;
use crate::window::Window;

static REGISTER_CLASS: Once = Once::new();

/// The Clearpane top-level window.
///
/// Closing it ends the message pump instead of destroying it, so
/// hotkeys can be released while the window still exists. The window
/// is destroyed on drop.
pub struct Win32Host {
    window: Window,
}

impl Win32Host {
    /// Creates and shows the host window with the given title.
    pub fn create(title: &str) -> WindowResult<Self> {
        ensure_class_registered();

        let title = HSTRING::from(title);
        // SAFETY: the class is registered above; a null parent and
        // instance create a top-level window owned by this module.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                w!("ClearpaneHost"),
                &title,
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                480,
                320,
                None,
                None,
                None,
                None,
            )?
        };

        Ok(Self {
            window: Window::new(hwnd),
        })
    }
}

impl HostWindow for Win32Host {
    fn handle(&self) -> WindowHandle {
        self.window.raw()
    }

    fn is_hidden(&self) -> bool {
        !self.window.is_visible()
    }

    fn hide(&mut self) {
        // SAFETY: ShowWindow on a window this struct owns.
        unsafe {
            let _ = ShowWindow(self.window.hwnd(), SW_HIDE);
        }
    }

    fn show_and_focus(&mut self) {
        // SAFETY: see `hide`.
        unsafe {
            let _ = ShowWindow(self.window.hwnd(), SW_SHOW);
            let _ = SetForegroundWindow(self.window.hwnd());
        }
    }

    fn exit_fullscreen(&mut self) {
        // SAFETY: IsZoomed is a read-only query.
        if unsafe { IsZoomed(self.window.hwnd()) }.as_bool() {
            // SAFETY: see `hide`.
            unsafe {
                let _ = ShowWindow(self.window.hwnd(), SW_RESTORE);
            }
        }
    }
}

impl Drop for Win32Host {
    fn drop(&mut self) {
        // SAFETY: the window was created by `create` and is destroyed once.
        unsafe {
            let _ = DestroyWindow(self.window.hwnd());
        }
    }
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_wnd_proc),
            lpszClassName: w!("ClearpaneHost"),
            // SAFETY: IDC_ARROW is a system cursor; no module is needed.
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
            ..Default::default()
        };
        // SAFETY: `wc` points at a static class name and a valid WNDPROC.
        unsafe {
            if RegisterClassW(&wc) == 0 {
                tracing::error!("Failed to register ClearpaneHost class");
            }
        }
    });
}

/// WNDPROC for the host window.
///
/// `WM_CLOSE` posts `WM_QUIT` so the pump returns with the window
/// still alive; `WM_SIZE` keeps the clone filling the client area.
unsafe extern "system" fn host_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CLOSE => {
            // SAFETY: called on the thread that owns the message queue.
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        WM_SIZE => {
            thumbnail::refit(hwnd);
            LRESULT(0)
        }
        // SAFETY: forwards the arguments Windows passed in unchanged.
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
