use clearpane_core::{CloneSink, HostWindow, HotkeyRegistrar, WindowStateController, WindowSystem};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

/// The Win32 message pump. Routes `WM_HOTKEY` to the controller and
/// blocks until `WM_QUIT` is received.
///
/// Must run on the thread that created the host window.
pub(crate) fn run_message_pump<S, R, H, C>(controller: &mut WindowStateController<S, R, H, C>)
where
    S: WindowSystem,
    R: HotkeyRegistrar,
    H: HostWindow,
    C: CloneSink,
{
    let mut msg = MSG::default();

    // SAFETY: `msg` is a valid MSG owned by this frame for every call.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY && controller.on_hotkey_fired(msg.wParam.0 as i32) {
            continue;
        }

        // SAFETY: `msg` was just filled in by GetMessageW.
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
