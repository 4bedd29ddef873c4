use std::thread;

use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log,
    app_types::lock_or_recover,
    backend_process_lifecycle::{classify_backend_exit, BackendExit},
    exit_cleanup, ShellState, BACKEND_EXIT_POLL_INTERVAL,
};

/// Watches the spawned backend from a dedicated thread. A deliberate stop
/// empties the slot and ends the watch; a crash takes the shell down with
/// it so the player never sits in front of a dead window.
pub(crate) fn spawn_backend_monitor(app_handle: AppHandle) {
    thread::spawn(move || loop {
        thread::sleep(BACKEND_EXIT_POLL_INTERVAL);

        let state = app_handle.state::<ShellState>();
        let exit = {
            let mut slot = lock_or_recover(&state.backend);
            if let Some(process) = slot.as_mut() {
                match process.child.try_wait() {
                    Ok(Some(status)) => {
                        let classified =
                            classify_backend_exit(process.killed_by_us, status.code());
                        *slot = None;
                        classified
                    }
                    Ok(None) => continue,
                    Err(error) => {
                        append_desktop_log(&format!(
                            "Failed to poll backend process status: {error}"
                        ));
                        return;
                    }
                }
            } else {
                return;
            }
        };

        match exit {
            BackendExit::ExpectedAfterKill => return,
            BackendExit::CleanExit => {
                append_desktop_log("Backend exited cleanly (code 0); leaving the shell open");
                return;
            }
            BackendExit::Crash { code } => {
                append_shutdown_log(&format!(
                    "Backend exited unexpectedly (code {code}); shutting down"
                ));
                exit_cleanup::run_shutdown(&app_handle);
                app_handle.exit(1);
                return;
            }
        }
    });
}
