use clearpane_core::{HotkeyRegistrar, Shortcut, WindowHandle, WindowResult};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_NOREPEAT, RegisterHotKey, UnregisterHotKey,
};

use crate::window::Window;

/// Registers hotkeys with `RegisterHotKey`.
///
/// `WM_HOTKEY` messages are posted to the owner window's thread and
/// arrive via the message pump running there.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Registrar;

impl HotkeyRegistrar for Win32Registrar {
    fn register_hotkey(
        &mut self,
        owner: WindowHandle,
        id: i32,
        shortcut: Shortcut,
    ) -> WindowResult<()> {
        // Holding the keys down must not fire the hotkey repeatedly.
        let modifiers = HOT_KEY_MODIFIERS(shortcut.modifiers) | MOD_NOREPEAT;

        // SAFETY: RegisterHotKey reserves a system-wide hotkey for the
        // owner window. The registry hands out unique ids.
        unsafe {
            RegisterHotKey(
                Some(Window::from_raw(owner).hwnd()),
                id,
                modifiers,
                shortcut.key_code,
            )?
        };
        Ok(())
    }

    fn unregister_hotkey(&mut self, owner: WindowHandle, id: i32) -> WindowResult<()> {
        // SAFETY: UnregisterHotKey removes a registration made above.
        unsafe { UnregisterHotKey(Some(Window::from_raw(owner).hwnd()), id)? };
        Ok(())
    }
}
