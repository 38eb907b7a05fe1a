use clearpane_core::config::Config;
use clearpane_core::{HostWindow, WindowResult, WindowStateController};

use crate::event_loop::run_message_pump;
use crate::host::Win32Host;
use crate::hotkey::Win32Registrar;
use crate::system::Win32WindowSystem;
use crate::thumbnail::DwmCloneSink;
use crate::{ctrl_c, process};

/// Opens the host window and serves hotkeys until it is closed.
///
/// Hotkeys are released and pass-through is turned off before the
/// window is destroyed.
pub fn run(config: &Config) -> WindowResult<()> {
    let host = Win32Host::create(&config.passthrough.title)?;
    let handle = host.handle();

    let executable = process::executable_path(std::process::id());
    let identity = config.passthrough.identity(executable);

    let mut controller = WindowStateController::new(
        Win32WindowSystem,
        Win32Registrar,
        host,
        DwmCloneSink::new(handle),
        identity,
    );

    let report = controller.refresh_hotkeys(&config.hotkeys);
    if report.registered_ids().is_empty() {
        tracing::warn!("No hotkeys registered; the window only responds to direct input");
    }

    if let Err(e) = ctrl_c::set_handler(handle) {
        tracing::warn!("Failed to install Ctrl+C handler: {e}");
    }

    tracing::info!("Clearpane running (window 0x{handle:X})");
    run_message_pump(&mut controller);

    controller.shutdown();
    tracing::info!("Clearpane stopped");
    Ok(())
}
