//! Global hotkey registry.
//!
//! Owns the mapping from OS trigger ids to handlers. The OS side is
//! abstracted behind [`HotkeyRegistrar`] so the registry's bookkeeping
//! can run (and be tested) without a real message queue.

mod report;

use std::collections::BTreeMap;

use crate::shortcut::{Shortcut, ShortcutError};
use crate::window::{WindowHandle, WindowResult};

pub use report::{RegistrationEntry, RegistrationOutcome, RegistrationReport};

/// Highest id an application may pass to `RegisterHotKey`.
pub const MAX_HOTKEY_ID: i32 = 0xBFFF;

/// A hotkey callback. Invoked synchronously on the dispatching thread.
pub type Handler = Box<dyn FnMut()>;

/// OS primitive for reserving system-wide shortcuts.
pub trait HotkeyRegistrar {
    /// Reserves `shortcut` for `owner` under `id`.
    ///
    /// Fails when the OS declines, typically because another
    /// application already claimed the combination.
    fn register_hotkey(
        &mut self,
        owner: WindowHandle,
        id: i32,
        shortcut: Shortcut,
    ) -> WindowResult<()>;

    /// Releases the reservation made under `id`.
    fn unregister_hotkey(&mut self, owner: WindowHandle, id: i32) -> WindowResult<()>;
}

/// A shortcut string paired with the handler it should trigger.
pub struct HotkeyRequest {
    /// Name shown in reports and logs.
    pub label: String,
    /// Shortcut string, e.g. `"Ctrl+Shift+P"`. Empty means unbound.
    pub text: String,
    pub handler: Handler,
}

impl HotkeyRequest {
    pub fn new(label: impl Into<String>, text: impl Into<String>, handler: Handler) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            handler,
        }
    }
}

impl<S: Into<String>> From<(S, Handler)> for HotkeyRequest {
    fn from((text, handler): (S, Handler)) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            text,
            handler,
        }
    }
}

/// Parses `text` the way registration would, without touching the OS.
///
/// Returns `Skipped` for an empty string, `ParseFailed` for a bad one,
/// and `Parsed` otherwise.
pub fn check(text: &str) -> RegistrationOutcome {
    match Shortcut::parse(text) {
        Ok(shortcut) => RegistrationOutcome::Parsed { shortcut },
        Err(ShortcutError::Empty) => RegistrationOutcome::Skipped,
        Err(error) => RegistrationOutcome::ParseFailed { error },
    }
}

/// A live OS registration and its handler.
struct Binding {
    shortcut: Shortcut,
    handler: Handler,
}

/// Manages global hotkey registrations for one owner window.
///
/// Hotkeys are registered on the owner's message queue. The message
/// pump running on that thread forwards `WM_HOTKEY` ids to
/// [`HotkeyRegistry::dispatch`]. Every registration is released on
/// [`HotkeyRegistry::shutdown`] or when the registry is dropped.
pub struct HotkeyRegistry<R: HotkeyRegistrar> {
    registrar: R,
    owner: WindowHandle,
    bindings: BTreeMap<i32, Binding>,
    last_id: i32,
}

impl<R: HotkeyRegistrar> HotkeyRegistry<R> {
    /// Creates an empty registry bound to `owner`.
    pub fn new(registrar: R, owner: WindowHandle) -> Self {
        Self {
            registrar,
            owner,
            bindings: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Parses `text` and registers it with the OS.
    ///
    /// An empty string is a valid "unbound" configuration and makes no OS
    /// call. Parse failures and OS rejections are logged and returned;
    /// neither stores a binding.
    pub fn register_handler(&mut self, text: &str, handler: Handler) -> RegistrationOutcome {
        let shortcut = match check(text) {
            RegistrationOutcome::Parsed { shortcut } => shortcut,
            RegistrationOutcome::ParseFailed { error } => {
                tracing::warn!("Ignoring hotkey {text:?}: {error}");
                return RegistrationOutcome::ParseFailed { error };
            }
            other => return other,
        };

        let id = self.next_id();
        if let Err(e) = self.registrar.register_hotkey(self.owner, id, shortcut) {
            tracing::warn!(
                "Failed to create hotkey {shortcut} (vk=0x{:02X}, modifiers=0x{:X}): {e}",
                shortcut.key_code,
                shortcut.modifiers
            );
            return RegistrationOutcome::Rejected {
                id,
                shortcut,
                reason: e.to_string(),
            };
        }

        tracing::debug!("Registered hotkey #{id}: {shortcut}");
        self.bindings.insert(id, Binding { shortcut, handler });
        RegistrationOutcome::Registered { id, shortcut }
    }

    /// Releases every binding, then registers `requests` in order.
    ///
    /// A failure on one request never stops the ones after it.
    pub fn refresh_all<I, T>(&mut self, requests: I) -> RegistrationReport
    where
        I: IntoIterator<Item = T>,
        T: Into<HotkeyRequest>,
    {
        self.clear();

        let entries = requests
            .into_iter()
            .map(Into::into)
            .map(|request| {
                let outcome = self.register_handler(&request.text, request.handler);
                RegistrationEntry {
                    label: request.label,
                    text: request.text,
                    outcome,
                }
            })
            .collect();

        RegistrationReport::new(entries)
    }

    /// Invokes the handler bound to `id`.
    ///
    /// Returns `false` for ids this registry does not own; other
    /// consumers may share the same notification channel.
    pub fn dispatch(&mut self, id: i32) -> bool {
        let Some(binding) = self.bindings.get_mut(&id) else {
            return false;
        };
        tracing::debug!("Hotkey #{id} fired: {}", binding.shortcut);
        (binding.handler)();
        true
    }

    /// Releases every OS registration.
    ///
    /// Must run before the owner window is destroyed; `Drop` does this
    /// as a fallback.
    pub fn shutdown(&mut self) {
        self.clear();
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Ids of live bindings, ascending.
    pub fn ids(&self) -> Vec<i32> {
        self.bindings.keys().copied().collect()
    }

    /// Returns the shortcut bound under `id`.
    pub fn shortcut(&self, id: i32) -> Option<Shortcut> {
        self.bindings.get(&id).map(|b| b.shortcut)
    }

    /// Returns the OS registrar.
    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    fn clear(&mut self) {
        for id in std::mem::take(&mut self.bindings).into_keys() {
            if let Err(e) = self.registrar.unregister_hotkey(self.owner, id) {
                tracing::warn!("Failed to unregister hotkey #{id}: {e}");
            }
        }
    }

    /// Returns a fresh id, wrapping within the range Win32 allows.
    fn next_id(&mut self) -> i32 {
        loop {
            self.last_id = if self.last_id >= MAX_HOTKEY_ID {
                1
            } else {
                self.last_id + 1
            };
            if !self.bindings.contains_key(&self.last_id) {
                return self.last_id;
            }
        }
    }
}

impl<R: HotkeyRegistrar> Drop for HotkeyRegistry<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
