use clearpane_core::{ProcessInfo, WindowHandle, WindowResult, WindowSystem};
use windows::Win32::UI::WindowsAndMessaging::GetForegroundWindow;

use crate::process;
use crate::window::Window;

/// The live Win32 desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl WindowSystem for Win32WindowSystem {
    fn extended_style(&self, window: WindowHandle) -> WindowResult<u32> {
        Window::from_raw(window).ex_style()
    }

    fn set_extended_style(&mut self, window: WindowHandle, style: u32) -> WindowResult<u32> {
        let previous = Window::from_raw(window).set_ex_style(style)?;
        tracing::trace!("Window 0x{window:X} style 0x{previous:X} -> 0x{style:X}");
        Ok(previous)
    }

    fn processes(&self) -> WindowResult<Vec<ProcessInfo>> {
        process::list_processes()
    }

    fn top_level_windows(&self, pid: u32) -> WindowResult<Vec<WindowHandle>> {
        process::process_windows(pid)
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        // SAFETY: GetForegroundWindow has no preconditions.
        let hwnd = unsafe { GetForegroundWindow() };
        (!hwnd.is_invalid()).then(|| Window::new(hwnd).raw())
    }
}
