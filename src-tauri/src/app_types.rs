use std::{
    path::PathBuf,
    process::Child,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard,
    },
};

use crate::{
    append_shutdown_log, backend_config, exit_state, update_status::UpdateStatus,
    update_transport::UpdateTransportKind,
};

#[derive(Debug)]
pub(crate) struct LaunchPlan {
    pub(crate) cmd: String,
    pub(crate) args: Vec<String>,
    pub(crate) cwd: PathBuf,
}

/// A spawned game backend plus the bookkeeping the exit monitor needs to
/// tell a deliberate stop apart from a crash.
pub(crate) struct BackendProcess {
    pub(crate) child: Child,
    /// Set strictly before the kill signal is sent, under the same lock
    /// hold, so the monitor never misreads a deliberate stop as a crash.
    pub(crate) killed_by_us: bool,
}

/// An installer payload fetched ahead of time; installation waits for the
/// player to confirm the restart.
pub(crate) struct DownloadedUpdate {
    pub(crate) update: tauri_plugin_updater::Update,
    pub(crate) bytes: Vec<u8>,
    pub(crate) version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowContent {
    Game,
    UpdatePending,
    RestartPrompt,
}

impl WindowContent {
    pub(crate) fn label(self) -> &'static str {
        match self {
            WindowContent::Game => "game",
            WindowContent::UpdatePending => "update pending",
            WindowContent::RestartPrompt => "restart prompt",
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct DesktopBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

pub(crate) struct ShellState {
    pub(crate) backend: Mutex<Option<BackendProcess>>,
    pub(crate) game_url: String,
    pub(crate) update_transport: UpdateTransportKind,
    update_status: Mutex<UpdateStatus>,
    downloaded_update: Mutex<Option<DownloadedUpdate>>,
    window_content: Mutex<Option<WindowContent>>,
    exit_state: Mutex<exit_state::ExitStateMachine>,
    pub(crate) update_check_in_flight: AtomicBool,
}

impl ShellState {
    pub(crate) fn update_status(&self) -> UpdateStatus {
        *lock_or_recover(&self.update_status)
    }

    pub(crate) fn set_update_status(&self, status: UpdateStatus) {
        *lock_or_recover(&self.update_status) = status;
    }

    /// What the main window is currently showing, if it exists.
    pub(crate) fn window_content(&self) -> Option<WindowContent> {
        *lock_or_recover(&self.window_content)
    }

    pub(crate) fn set_window_content(&self, content: Option<WindowContent>) {
        *lock_or_recover(&self.window_content) = content;
    }

    pub(crate) fn store_downloaded_update(&self, payload: DownloadedUpdate) {
        *lock_or_recover(&self.downloaded_update) = Some(payload);
    }

    pub(crate) fn take_downloaded_update(&self) -> Option<DownloadedUpdate> {
        lock_or_recover(&self.downloaded_update).take()
    }

    pub(crate) fn mark_quitting(&self) {
        self.lock_exit_state().mark_quitting();
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.lock_exit_state().is_quitting()
    }

    /// True for exactly one caller; the winner runs the shutdown sequence.
    pub(crate) fn try_begin_exit_cleanup(&self) -> bool {
        self.lock_exit_state().try_begin_cleanup()
    }

    fn lock_exit_state(&self) -> MutexGuard<'_, exit_state::ExitStateMachine> {
        self.exit_state.lock().unwrap_or_else(|error| {
            append_shutdown_log("Exit state lock was poisoned; recovering");
            error.into_inner()
        })
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            backend: Mutex::new(None),
            game_url: backend_config::resolve_game_url(),
            update_transport: UpdateTransportKind::for_current_platform(),
            update_status: Mutex::new(UpdateStatus::Unknown),
            downloaded_update: Mutex::new(None),
            window_content: Mutex::new(None),
            exit_state: Mutex::new(exit_state::ExitStateMachine::default()),
            update_check_in_flight: AtomicBool::new(false),
        }
    }
}

/// Recovers from a poisoned lock instead of propagating the panic; the
/// shell keeps running on the last state the lock held.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|error| error.into_inner())
}

pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
