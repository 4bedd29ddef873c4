use tauri::AppHandle;

use crate::append_desktop_log;

/// Runs a window operation on the main thread, where every webview call
/// must happen. Failures land in the log under the caller's description.
pub(crate) fn dispatch_on_main<F>(app_handle: &AppHandle, description: &'static str, action: F)
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let handle = app_handle.clone();
    if let Err(error) = app_handle.run_on_main_thread(move || action(&handle)) {
        append_desktop_log(&format!("Failed to dispatch {description}: {error}"));
    }
}
