use std::collections::HashMap;
use std::mem;
use std::path::PathBuf;

use clearpane_core::{ProcessInfo, WindowHandle, WindowResult};
use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND, LPARAM};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CREATE_TOOLHELP_SNAPSHOT_FLAGS, CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW,
    Process32NextW, TH32CS_SNAPPROCESS, TH32CS_SNAPTHREAD, THREADENTRY32, Thread32First,
    Thread32Next,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumThreadWindows, EnumWindows, GetWindowThreadProcessId,
};
use windows::core::{BOOL, PWSTR};

use crate::window::Window;

/// Lists running processes with their main window title and executable.
///
/// A process's main window is its first visible, unowned top-level
/// window. Processes without one report an empty title and are not
/// queried for their executable.
pub fn list_processes() -> WindowResult<Vec<ProcessInfo>> {
    let titles = main_window_titles()?;
    let snapshot = Snapshot::new(TH32CS_SNAPPROCESS)?;

    let mut entry = PROCESSENTRY32W {
        dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };
    let mut processes = Vec::new();

    // SAFETY: the snapshot handle is valid for the lifetime of `snapshot`
    // and `entry.dwSize` is set as the API requires.
    let mut more = unsafe { Process32FirstW(snapshot.0, &mut entry) }.is_ok();
    while more {
        let pid = entry.th32ProcessID;
        let main_window_title = titles.get(&pid).cloned().unwrap_or_default();
        let executable = if main_window_title.is_empty() {
            None
        } else {
            executable_path(pid)
        };
        processes.push(ProcessInfo {
            pid,
            main_window_title,
            executable,
        });

        // SAFETY: same snapshot and entry as above.
        more = unsafe { Process32NextW(snapshot.0, &mut entry) }.is_ok();
    }

    Ok(processes)
}

/// Lists the visible top-level windows owned by `pid`, in enumeration
/// order. Fails when the process has no threads left.
pub fn process_windows(pid: u32) -> WindowResult<Vec<WindowHandle>> {
    let threads = thread_ids(pid)?;
    if threads.is_empty() {
        return Err(format!("process {pid} has exited").into());
    }

    let mut windows: Vec<WindowHandle> = Vec::new();
    for thread in threads {
        // SAFETY: EnumThreadWindows runs synchronously; the Vec outlives
        // the call and the callback casts LPARAM back to it.
        unsafe {
            let _ = EnumThreadWindows(
                thread,
                Some(collect_visible),
                LPARAM(&mut windows as *mut _ as isize),
            );
        }
    }
    Ok(windows)
}

/// Returns the full path of the process image, if it can be opened.
pub fn executable_path(pid: u32) -> Option<PathBuf> {
    // SAFETY: the handle is opened with the least-privilege right that
    // allows querying the image name, and closed before returning.
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
        let mut buffer = [0u16; 1024];
        let mut len = buffer.len() as u32;
        let result = QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut len,
        );
        let _ = CloseHandle(handle);
        result.ok()?;
        Some(PathBuf::from(String::from_utf16_lossy(&buffer[..len as usize])))
    }
}

/// Maps each pid to the title of its first visible, unowned window.
fn main_window_titles() -> WindowResult<HashMap<u32, String>> {
    let mut windows: Vec<WindowHandle> = Vec::new();

    // SAFETY: EnumWindows runs synchronously; the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(collect_visible),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    let mut titles = HashMap::new();
    for window in windows.into_iter().map(Window::from_raw) {
        if !window.is_unowned() {
            continue;
        }
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the owning pid.
        unsafe { GetWindowThreadProcessId(window.hwnd(), Some(&mut pid)) };
        if pid != 0 && !titles.contains_key(&pid) {
            titles.insert(pid, window.title());
        }
    }
    Ok(titles)
}

fn thread_ids(pid: u32) -> WindowResult<Vec<u32>> {
    let snapshot = Snapshot::new(TH32CS_SNAPTHREAD)?;
    let mut entry = THREADENTRY32 {
        dwSize: mem::size_of::<THREADENTRY32>() as u32,
        ..Default::default()
    };
    let mut threads = Vec::new();

    // SAFETY: see `list_processes`.
    let mut more = unsafe { Thread32First(snapshot.0, &mut entry) }.is_ok();
    while more {
        if entry.th32OwnerProcessID == pid {
            threads.push(entry.th32ThreadID);
        }
        // SAFETY: same snapshot and entry as above.
        more = unsafe { Thread32Next(snapshot.0, &mut entry) }.is_ok();
    }
    Ok(threads)
}

/// Pushes visible windows into the `Vec<WindowHandle>` behind `lparam`.
unsafe extern "system" fn collect_visible(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam points to the Vec passed by the enumerating caller.
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<WindowHandle>) };

    let window = Window::new(hwnd);
    if window.is_visible() {
        windows.push(window.raw());
    }

    BOOL(1) // continue
}

/// A ToolHelp snapshot handle, closed on drop.
struct Snapshot(HANDLE);

impl Snapshot {
    fn new(flags: CREATE_TOOLHELP_SNAPSHOT_FLAGS) -> WindowResult<Self> {
        // SAFETY: a pid of 0 snapshots the whole system.
        let handle = unsafe { CreateToolhelp32Snapshot(flags, 0)? };
        Ok(Self(handle))
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateToolhelp32Snapshot and is
        // closed exactly once.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}
