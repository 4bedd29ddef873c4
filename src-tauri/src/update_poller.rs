use tauri::{AppHandle, Manager};

use crate::{
    append_debug_log, append_update_log, update_checker, AtomicFlagGuard, ShellState,
    UPDATE_CHECK_INTERVAL,
};

/// Checks for updates right away, then on a fixed interval for as long as
/// the shell runs. A check that outlives the interval (a slow download,
/// say) makes the next tick a no-op instead of piling up.
pub(crate) fn spawn_update_poller(app_handle: AppHandle) {
    append_update_log(&format!(
        "Checking for updates every {} minutes via {}",
        UPDATE_CHECK_INTERVAL.as_secs() / 60,
        app_handle
            .state::<ShellState>()
            .update_transport
            .label()
    ));
    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(UPDATE_CHECK_INTERVAL);
        loop {
            ticker.tick().await;
            let handle = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<ShellState>();
                match AtomicFlagGuard::try_set(&state.update_check_in_flight) {
                    Some(_guard) => update_checker::run_update_check(&handle).await,
                    None => {
                        append_debug_log("Skipping update tick; the previous check is still running")
                    }
                };
            });
        }
    });
}
