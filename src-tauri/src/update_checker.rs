use tauri::{AppHandle, Manager};
use tauri_plugin_updater::UpdaterExt;

use crate::{
    append_debug_log,
    update_events::{self, UpdateEvent},
    update_feed::{self, FeedCheckOutcome},
    update_transport::UpdateTransportKind,
    DownloadedUpdate, ShellState,
};

/// One full check on whatever transport this platform has. Failures
/// surface as a `CheckFailed` event; the next tick tries again.
pub(crate) async fn run_update_check(app_handle: &AppHandle) {
    let transport = {
        let state = app_handle.state::<ShellState>();
        if state.update_status() == state.update_transport.terminal_status() {
            append_debug_log("Skipping update check; transport already finished");
            return;
        }
        state.update_transport
    };

    update_events::apply_update_event(app_handle, UpdateEvent::Checking);

    let result = match transport {
        UpdateTransportKind::Native => run_native_check(app_handle).await,
        UpdateTransportKind::PollingFallback => run_fallback_check(app_handle).await,
    };
    if let Err(reason) = result {
        update_events::apply_update_event(app_handle, UpdateEvent::CheckFailed { reason });
    }
}

/// Check, download, and stage an installer payload. The restart prompt
/// only appears once the payload is fully in hand, so a download failure
/// leaves the pending view up and the next tick retries.
async fn run_native_check(app_handle: &AppHandle) -> Result<(), String> {
    let updater = app_handle
        .updater()
        .map_err(|error| format!("Failed to build updater: {error}"))?;

    let update = match updater
        .check()
        .await
        .map_err(|error| format!("Failed to check for updates: {error}"))?
    {
        Some(update) => update,
        None => {
            update_events::apply_update_event(app_handle, UpdateEvent::NotAvailable);
            return Ok(());
        }
    };

    let version = update.version.clone();
    update_events::apply_update_event(
        app_handle,
        UpdateEvent::Available {
            version: Some(version.clone()),
        },
    );

    let bytes = update
        .download(|_, _| {}, || {})
        .await
        .map_err(|error| format!("Failed to download update {version}: {error}"))?;

    app_handle
        .state::<ShellState>()
        .store_downloaded_update(DownloadedUpdate {
            update,
            bytes,
            version: version.clone(),
        });
    update_events::apply_update_event(app_handle, UpdateEvent::Downloaded { version });
    Ok(())
}

async fn run_fallback_check(app_handle: &AppHandle) -> Result<(), String> {
    let current_version = app_handle.package_info().version.to_string();
    match update_feed::query_feed(&current_version).await? {
        FeedCheckOutcome::UpdateAvailable => {
            update_events::apply_update_event(app_handle, UpdateEvent::Available { version: None });
        }
        FeedCheckOutcome::UpToDate => {
            update_events::apply_update_event(app_handle, UpdateEvent::NotAvailable);
        }
    }
    Ok(())
}
