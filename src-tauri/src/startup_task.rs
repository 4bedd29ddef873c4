use std::thread;

use tauri::{AppHandle, Manager};

use crate::{
    backend_process_lifecycle, backend_readiness, exit_cleanup, main_window, ui_dispatch,
    ShellState, BACKEND_READY_TIMEOUT,
};

/// Brings the system up off the main thread: backend first, then the
/// readiness wait, then the window. A backend that cannot start at all is
/// fatal; the log is the only witness, so it gets the full story.
pub(crate) fn spawn_startup_task<F>(app_handle: AppHandle, log: F)
where
    F: Fn(&str) + Send + 'static,
{
    thread::spawn(move || {
        if let Err(error) = backend_process_lifecycle::start_backend(&app_handle) {
            log(&format!("Failed to start the game backend: {error}"));
            log("Exiting; nothing to show without a backend");
            exit_cleanup::run_shutdown(&app_handle);
            app_handle.exit(1);
            return;
        }

        let state = app_handle.state::<ShellState>();
        if state.update_status().supersedes_backend() {
            log("Skipping the readiness wait; an update took over startup");
        } else if backend_readiness::wait_for_game_endpoint(&state.game_url, || {
            let state = app_handle.state::<ShellState>();
            state.update_status().supersedes_backend() || state.is_quitting()
        }) {
            log(&format!("Backend is answering at {}", state.game_url));
        } else {
            log(&format!(
                "Backend did not answer within {}s; opening the window anyway",
                BACKEND_READY_TIMEOUT.as_secs()
            ));
        }

        if state.is_quitting() {
            log("Shutdown began during startup; not opening a window");
            return;
        }

        ui_dispatch::dispatch_on_main(&app_handle, "main window creation", move |handle| {
            if let Err(error) = main_window::create_main_window(handle) {
                log(&error);
            }
        });
    });
}
