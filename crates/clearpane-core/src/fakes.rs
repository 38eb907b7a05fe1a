//! In-memory stand-ins for the OS seams, used by unit tests.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use crate::hotkey::HotkeyRegistrar;
use crate::shortcut::Shortcut;
use crate::window::{CloneSink, HostWindow, ProcessInfo, WindowHandle, WindowResult, WindowSystem};

/// Records hotkey reservations like a system-wide hotkey table.
#[derive(Default)]
pub struct FakeRegistrar {
    /// Live reservations by id.
    pub active: BTreeMap<i32, Shortcut>,
    /// Shortcuts another application already owns.
    pub claimed_elsewhere: HashSet<Shortcut>,
    /// When set, every unregister call reports failure (but still releases).
    pub fail_unregister: bool,
    pub register_calls: usize,
    pub unregister_calls: usize,
}

impl FakeRegistrar {
    pub fn claiming(shortcuts: &[&str]) -> Self {
        Self {
            claimed_elsewhere: shortcuts.iter().map(|s| s.parse().unwrap()).collect(),
            ..Default::default()
        }
    }
}

impl HotkeyRegistrar for FakeRegistrar {
    fn register_hotkey(
        &mut self,
        _owner: WindowHandle,
        id: i32,
        shortcut: Shortcut,
    ) -> WindowResult<()> {
        self.register_calls += 1;
        if self.claimed_elsewhere.contains(&shortcut) || self.active.values().any(|s| *s == shortcut)
        {
            return Err("hot key is already registered".into());
        }
        self.active.insert(id, shortcut);
        Ok(())
    }

    fn unregister_hotkey(&mut self, _owner: WindowHandle, id: i32) -> WindowResult<()> {
        self.unregister_calls += 1;
        let existed = self.active.remove(&id).is_some();
        if self.fail_unregister || !existed {
            return Err(format!("hot key #{id} is not registered").into());
        }
        Ok(())
    }
}

struct FakeProcess {
    info: ProcessInfo,
    windows: Vec<WindowHandle>,
}

/// A process table and per-window extended styles.
#[derive(Default)]
pub struct FakeWindowSystem {
    styles: HashMap<WindowHandle, u32>,
    processes: Vec<FakeProcess>,
    /// Pids whose window listing fails, as if the process just exited.
    pub vanished: HashSet<u32>,
    /// Windows whose style cannot be written.
    pub locked: HashSet<WindowHandle>,
    pub fail_process_listing: bool,
    pub foreground: Option<WindowHandle>,
    /// Every successful style write, in order.
    pub writes: Vec<(WindowHandle, u32)>,
}

impl FakeWindowSystem {
    pub fn with_window(mut self, window: WindowHandle, style: u32) -> Self {
        self.styles.insert(window, style);
        self
    }

    /// Adds a process whose windows all start with `style`.
    pub fn with_process(
        mut self,
        pid: u32,
        title: &str,
        windows: &[WindowHandle],
        style: u32,
    ) -> Self {
        for window in windows {
            self.styles.entry(*window).or_insert(style);
        }
        self.processes.push(FakeProcess {
            info: ProcessInfo {
                pid,
                main_window_title: title.into(),
                executable: None,
            },
            windows: windows.to_vec(),
        });
        self
    }

    /// Sets the image path reported for `pid`.
    pub fn with_executable(mut self, pid: u32, path: &str) -> Self {
        if let Some(p) = self.processes.iter_mut().find(|p| p.info.pid == pid) {
            p.info.executable = Some(PathBuf::from(path));
        }
        self
    }

    pub fn style(&self, window: WindowHandle) -> u32 {
        self.styles[&window]
    }

    /// Changes a style behind the controller's back.
    pub fn poke(&mut self, window: WindowHandle, style: u32) {
        self.styles.insert(window, style);
    }

    /// Windows written at least once.
    pub fn touched(&self) -> HashSet<WindowHandle> {
        self.writes.iter().map(|(w, _)| *w).collect()
    }
}

impl WindowSystem for FakeWindowSystem {
    fn extended_style(&self, window: WindowHandle) -> WindowResult<u32> {
        self.styles
            .get(&window)
            .copied()
            .ok_or_else(|| format!("invalid window handle 0x{window:X}").into())
    }

    fn set_extended_style(&mut self, window: WindowHandle, style: u32) -> WindowResult<u32> {
        if self.locked.contains(&window) {
            return Err(format!("access denied for 0x{window:X}").into());
        }
        let previous = self.extended_style(window)?;
        self.styles.insert(window, style);
        self.writes.push((window, style));
        Ok(previous)
    }

    fn processes(&self) -> WindowResult<Vec<ProcessInfo>> {
        if self.fail_process_listing {
            return Err("snapshot failed".into());
        }
        Ok(self.processes.iter().map(|p| p.info.clone()).collect())
    }

    fn top_level_windows(&self, pid: u32) -> WindowResult<Vec<WindowHandle>> {
        if self.vanished.contains(&pid) {
            return Err(format!("process {pid} has exited").into());
        }
        self.processes
            .iter()
            .find(|p| p.info.pid == pid)
            .map(|p| p.windows.clone())
            .ok_or_else(|| format!("no process {pid}").into())
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.foreground
    }
}

/// Host window that only tracks visibility.
pub struct FakeHost {
    pub handle: WindowHandle,
    pub hidden: bool,
    pub fullscreen: bool,
    pub shows: usize,
}

impl FakeHost {
    pub fn new(handle: WindowHandle) -> Self {
        Self {
            handle,
            hidden: false,
            fullscreen: false,
            shows: 0,
        }
    }
}

impl HostWindow for FakeHost {
    fn handle(&self) -> WindowHandle {
        self.handle
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn show_and_focus(&mut self) {
        self.hidden = false;
        self.shows += 1;
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }
}

/// Clone sink that records requested targets.
#[derive(Default)]
pub struct FakeCloneSink {
    pub targets: Vec<WindowHandle>,
    pub fail: bool,
}

impl CloneSink for FakeCloneSink {
    fn clone_window(&mut self, target: WindowHandle) -> WindowResult<()> {
        if self.fail {
            return Err("thumbnail registration failed".into());
        }
        self.targets.push(target);
        Ok(())
    }
}
