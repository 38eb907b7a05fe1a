use std::cell::Cell;

use clearpane_core::{CloneSink, WindowHandle, WindowResult};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{
    DWM_THUMBNAIL_PROPERTIES, DwmRegisterThumbnail, DwmUnregisterThumbnail,
    DwmUpdateThumbnailProperties,
};
use windows::Win32::UI::WindowsAndMessaging::GetClientRect;
use windows::core::BOOL;

use crate::window::Window;

const DWM_TNP_RECTDESTINATION: u32 = 0x1;
const DWM_TNP_VISIBLE: u32 = 0x8;

thread_local! {
    /// The thumbnail currently shown in the host, read by its WNDPROC
    /// on resize.
    static CURRENT: Cell<Option<isize>> = const { Cell::new(None) };
}

/// Shows a live DWM thumbnail of another window inside the host.
///
/// Only one clone exists at a time; cloning a new window replaces it.
pub struct DwmCloneSink {
    destination: HWND,
}

impl DwmCloneSink {
    pub fn new(destination: WindowHandle) -> Self {
        Self {
            destination: Window::from_raw(destination).hwnd(),
        }
    }

    /// Removes the current thumbnail, if any.
    pub fn release(&mut self) {
        if let Some(id) = CURRENT.with(Cell::take) {
            // SAFETY: `id` came from DwmRegisterThumbnail on this thread.
            unsafe {
                let _ = DwmUnregisterThumbnail(id);
            }
        }
    }
}

impl CloneSink for DwmCloneSink {
    fn clone_window(&mut self, target: WindowHandle) -> WindowResult<()> {
        self.release();

        // SAFETY: both handles are top-level windows; DWM validates them
        // and fails with an error for anything else.
        let source = Window::from_raw(target).hwnd();
        let id = unsafe { DwmRegisterThumbnail(self.destination, source)? };
        CURRENT.with(|current| current.set(Some(id)));
        tracing::info!("Cloning window 0x{target:X}");

        fit(self.destination, id)
    }
}

impl Drop for DwmCloneSink {
    fn drop(&mut self) {
        self.release();
    }
}

/// Stretches the current thumbnail over the host's client area.
pub(crate) fn refit(destination: HWND) {
    if let Some(id) = CURRENT.with(Cell::get) {
        if let Err(e) = fit(destination, id) {
            tracing::debug!("Failed to resize thumbnail: {e}");
        }
    }
}

fn fit(destination: HWND, id: isize) -> WindowResult<()> {
    let mut client = RECT::default();
    // SAFETY: GetClientRect writes into a RECT we own.
    unsafe { GetClientRect(destination, &mut client)? };

    let properties = DWM_THUMBNAIL_PROPERTIES {
        dwFlags: DWM_TNP_RECTDESTINATION | DWM_TNP_VISIBLE,
        rcDestination: client,
        fVisible: BOOL(1),
        ..Default::default()
    };
    // SAFETY: `properties` lives across the call.
    unsafe { DwmUpdateThumbnailProperties(id, &properties)? };
    Ok(())
}
