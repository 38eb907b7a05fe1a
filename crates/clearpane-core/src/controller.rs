//! Ties the hotkey registry to the actions it triggers.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::Action;
use crate::config::HotkeyConfig;
use crate::hotkey::{HotkeyRegistrar, HotkeyRegistry, HotkeyRequest, RegistrationReport};
use crate::passthrough::{PassthroughController, SiblingIdentity};
use crate::window::{CloneSink, HostWindow, WindowSystem};

/// Reacts to hotkey notifications for one host window.
///
/// Lives exactly as long as the host window: construct it once the
/// window exists and call [`shutdown`](Self::shutdown) before the
/// window is destroyed. Everything runs on the window's thread.
pub struct WindowStateController<S, R, H, C>
where
    S: WindowSystem,
    R: HotkeyRegistrar,
    H: HostWindow,
    C: CloneSink,
{
    system: S,
    host: H,
    clones: C,
    registry: HotkeyRegistry<R>,
    passthrough: PassthroughController,
    sender: Sender<Action>,
    actions: Receiver<Action>,
    enabled: bool,
}

impl<S, R, H, C> WindowStateController<S, R, H, C>
where
    S: WindowSystem,
    R: HotkeyRegistrar,
    H: HostWindow,
    C: CloneSink,
{
    /// Creates a controller. No hotkeys are registered until
    /// [`refresh_hotkeys`](Self::refresh_hotkeys) is called.
    pub fn new(system: S, registrar: R, host: H, clones: C, identity: SiblingIdentity) -> Self {
        let (sender, actions) = mpsc::channel();
        let handle = host.handle();
        Self {
            system,
            host,
            clones,
            registry: HotkeyRegistry::new(registrar, handle),
            passthrough: PassthroughController::new(handle, identity),
            sender,
            actions,
            enabled: true,
        }
    }

    /// Re-registers every configured shortcut.
    ///
    /// Order is clone-current, toggle-passthrough, show/hide. The
    /// report is logged; failures never stop the remaining shortcuts.
    pub fn refresh_hotkeys(&mut self, hotkeys: &HotkeyConfig) -> RegistrationReport {
        let requests = hotkeys.bindings().map(|(action, text)| {
            let sender = self.sender.clone();
            HotkeyRequest::new(
                action.config_key(),
                text,
                Box::new(move || {
                    let _ = sender.send(action);
                }),
            )
        });

        let report = self.registry.refresh_all(requests);
        for entry in &report.entries {
            if entry.outcome.is_failure() {
                tracing::warn!("{entry}");
            } else {
                tracing::info!("{entry}");
            }
        }
        report
    }

    /// Handles a `WM_HOTKEY` notification.
    ///
    /// Returns whether the id belonged to this controller. Actions
    /// queued by the handler are performed before returning.
    pub fn on_hotkey_fired(&mut self, id: i32) -> bool {
        if !self.enabled {
            return false;
        }
        let consumed = self.registry.dispatch(id);
        while let Ok(action) = self.actions.try_recv() {
            self.perform(action);
        }
        consumed
    }

    /// Performs one action immediately.
    pub fn perform(&mut self, action: Action) {
        tracing::debug!("Performing {action}");
        match action {
            Action::ShowHide => self.show_hide(),
            Action::CloneCurrent => self.clone_current(),
            Action::TogglePassthrough => self.toggle_passthrough(),
        }
    }

    /// Enables or disables hotkey handling without unregistering.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Releases every hotkey and turns pass-through off.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn shutdown(&mut self) {
        self.registry.shutdown();
        if let Err(e) = self.passthrough.release(&mut self.system) {
            tracing::warn!("Failed to turn pass-through off on shutdown: {e}");
        }
    }

    pub fn passthrough(&self) -> &PassthroughController {
        &self.passthrough
    }

    pub fn registry(&self) -> &HotkeyRegistry<R> {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }

    pub fn clones(&self) -> &C {
        &self.clones
    }

    /// Hides the host, or shows and focuses it.
    ///
    /// Showing a window can reset its extended style, so pass-through
    /// bits are applied again when active.
    fn show_hide(&mut self) {
        self.host.exit_fullscreen();

        if !self.host.is_hidden() {
            self.host.hide();
            return;
        }

        self.host.show_and_focus();
        if let Err(e) = self.passthrough.reassert(&mut self.system) {
            tracing::warn!("Failed to re-apply pass-through after show: {e}");
        }
    }

    /// Clones the foreground window unless it is the host itself.
    fn clone_current(&mut self) {
        let Some(target) = self.system.foreground_window() else {
            tracing::debug!("No foreground window to clone");
            return;
        };
        if target == self.host.handle() {
            return;
        }
        if let Err(e) = self.clones.clone_window(target) {
            tracing::warn!("Failed to clone window 0x{target:X}: {e}");
        }
    }

    fn toggle_passthrough(&mut self) {
        if let Err(e) = self.passthrough.toggle(&mut self.system) {
            tracing::error!("Failed to toggle pass-through: {e}");
        }
    }
}

impl<S, R, H, C> Drop for WindowStateController<S, R, H, C>
where
    S: WindowSystem,
    R: HotkeyRegistrar,
    H: HostWindow,
    C: CloneSink,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}
