use tauri::{AppHandle, Manager};

use crate::{
    append_debug_log, append_shutdown_log, backend_process_lifecycle, main_window, ShellState,
};

/// The one teardown path. Every exit trigger funnels through here; only
/// the first caller does any work, the rest return immediately.
pub(crate) fn run_shutdown(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if !state.try_begin_exit_cleanup() {
        append_debug_log("Shutdown already handled; nothing to do");
        return;
    }

    append_shutdown_log("Shutting down: closing the window and stopping the backend");
    main_window::close_main_window(app_handle, append_shutdown_log);
    backend_process_lifecycle::kill_backend(&state, append_shutdown_log);
    append_shutdown_log("Shutdown complete");
}
