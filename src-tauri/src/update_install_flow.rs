use tauri::{AppHandle, Manager};

use crate::{
    append_update_log, backend_process_lifecycle, update_transport::UpdateTransportKind,
    ShellState,
};

/// Installs the staged update and restarts the shell. The backend dies
/// first: on Windows the installer may replace and relaunch us without
/// ever returning, and a still-running backend would be orphaned.
///
/// A failed install puts the payload back and leaves the shell fully
/// alive, so the restart prompt can offer another attempt.
pub(crate) fn run_quit_and_install(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle.state::<ShellState>();

    if state.update_transport != UpdateTransportKind::Native {
        return Err(
            "Updates are not installable from inside the game on this platform.".to_string(),
        );
    }
    let payload = state
        .take_downloaded_update()
        .ok_or_else(|| "No downloaded update is ready to install.".to_string())?;

    append_update_log(&format!(
        "Stopping the game to install update {}",
        payload.version
    ));
    backend_process_lifecycle::kill_backend(&state, |message| append_update_log(message));

    if let Err(error) = payload.update.install(&payload.bytes) {
        let version = payload.version.clone();
        state.store_downloaded_update(payload);
        return Err(format!("Failed to install update {version}: {error}"));
    }

    state.mark_quitting();
    append_update_log("Update installed; restarting the shell");
    app_handle.request_restart();
    Ok(())
}
