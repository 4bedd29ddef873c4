use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use url::Url;

use crate::{
    append_debug_log, append_desktop_log, debug_mode, ui_dispatch, update_status::UpdateStatus,
    webui_paths, ShellState, WindowContent, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

/// What the window should show for a given update status. Consulted at
/// creation time, so a window opened late still lands on the right view.
pub(crate) fn window_content_for_status(status: UpdateStatus) -> WindowContent {
    match status {
        UpdateStatus::Downloaded => WindowContent::RestartPrompt,
        UpdateStatus::Available => WindowContent::UpdatePending,
        _ => WindowContent::Game,
    }
}

fn content_url(content: WindowContent, game_url: &str) -> String {
    match content {
        WindowContent::Game => game_url.to_string(),
        WindowContent::UpdatePending => webui_paths::update_pending_page_url(),
        WindowContent::RestartPrompt => webui_paths::restart_prompt_page_url(),
    }
}

/// Opens the main window if it does not exist yet. Must run on the main
/// thread.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<(), String> {
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_some() {
        append_debug_log("Main window already exists; not creating another");
        return Ok(());
    }

    let state = app_handle.state::<ShellState>();
    let content = window_content_for_status(state.update_status());
    let raw = content_url(content, &state.game_url);
    let url = Url::parse(&raw)
        .map_err(|error| format!("Invalid {} view URL {raw}: {error}", content.label()))?;

    let window = WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, WebviewUrl::External(url))
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .build()
        .map_err(|error| format!("Failed to create the main window: {error}"))?;

    state.set_window_content(Some(content));
    append_desktop_log(&format!("Main window opened on the {} view", content.label()));

    if debug_mode::debug_enabled() {
        window.open_devtools();
    }
    Ok(())
}

/// Swaps the main window over to `content`, from any thread. With no
/// window open this is a no-op; creation picks the right view itself.
pub(crate) fn show_window_content(app_handle: &AppHandle, content: WindowContent) {
    ui_dispatch::dispatch_on_main(app_handle, "window content change", move |handle| {
        apply_window_content(handle, content);
    });
}

fn apply_window_content(app_handle: &AppHandle, content: WindowContent) {
    let state = app_handle.state::<ShellState>();
    let window = match app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        Some(window) => window,
        None => {
            append_desktop_log(&format!(
                "No main window yet; the {} view will appear when it opens",
                content.label()
            ));
            return;
        }
    };
    if state.window_content() == Some(content) {
        append_debug_log(&format!(
            "Main window already shows the {} view",
            content.label()
        ));
        return;
    }

    let raw = content_url(content, &state.game_url);
    let url = match Url::parse(&raw) {
        Ok(url) => url,
        Err(error) => {
            append_desktop_log(&format!(
                "Invalid {} view URL {raw}: {error}",
                content.label()
            ));
            return;
        }
    };
    match window.navigate(url) {
        Ok(()) => {
            state.set_window_content(Some(content));
            append_desktop_log(&format!(
                "Main window now shows the {} view",
                content.label()
            ));
        }
        Err(error) => append_desktop_log(&format!(
            "Failed to show the {} view: {error}",
            content.label()
        )),
    }
}

pub(crate) fn close_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    match app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        Some(window) => match window.close() {
            Ok(()) => log("Main window closed"),
            Err(error) => log(&format!("Failed to close main window: {error}")),
        },
        None => log("Main window already closed"),
    }
}
