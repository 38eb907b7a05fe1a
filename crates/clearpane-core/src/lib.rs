pub mod action;
pub mod config;
pub mod controller;
pub mod hotkey;
pub mod keys;
pub mod log;
pub mod passthrough;
pub mod shortcut;
pub mod window;

#[cfg(test)]
mod fakes;

pub use action::Action;
pub use controller::WindowStateController;
pub use hotkey::{HotkeyRegistrar, HotkeyRegistry, RegistrationReport};
pub use passthrough::{PassthroughController, SiblingIdentity};
pub use shortcut::{Shortcut, ShortcutError};
pub use window::{CloneSink, HostWindow, ProcessInfo, WindowHandle, WindowResult, WindowSystem};
