use tauri::{AppHandle, Manager};

use crate::{append_desktop_log, exit_cleanup, ShellState};

/// macOS convention: closing the last window leaves the app in the dock.
/// An exit request with no code means exactly that case; everything else
/// (explicit exit, restart, quit menu) really quits.
pub(crate) fn should_stay_alive_without_windows(code: Option<i32>, quitting: bool) -> bool {
    cfg!(target_os = "macos") && code.is_none() && !quitting
}

pub(crate) fn handle_exit_requested(
    app_handle: &AppHandle,
    api: &tauri::ExitRequestApi,
    code: Option<i32>,
) {
    let state = app_handle.state::<ShellState>();
    if should_stay_alive_without_windows(code, state.is_quitting()) {
        append_desktop_log("Last window closed; staying alive in the dock");
        api.prevent_exit();
        return;
    }

    state.mark_quitting();
    exit_cleanup::run_shutdown(app_handle);
}

/// Final safety net once the event loop is done; a no-op when the exit
/// request already cleaned up.
pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    exit_cleanup::run_shutdown(app_handle);
}

#[cfg(target_os = "macos")]
pub(crate) fn handle_reopen(app_handle: &AppHandle, has_visible_windows: bool) {
    if has_visible_windows {
        return;
    }
    append_desktop_log("Dock activation with no windows; reopening the main window");
    if let Err(error) = crate::main_window::create_main_window(app_handle) {
        append_desktop_log(&format!("Failed to reopen main window: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::should_stay_alive_without_windows;

    #[test]
    fn only_a_codeless_exit_request_keeps_the_shell_alive() {
        let expected = cfg!(target_os = "macos");
        assert_eq!(should_stay_alive_without_windows(None, false), expected);
    }

    #[test]
    fn explicit_exit_codes_always_quit() {
        assert!(!should_stay_alive_without_windows(Some(0), false));
        assert!(!should_stay_alive_without_windows(Some(1), false));
    }

    #[test]
    fn a_quitting_shell_never_lingers() {
        assert!(!should_stay_alive_without_windows(None, true));
    }
}
