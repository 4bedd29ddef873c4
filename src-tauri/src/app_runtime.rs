use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_debug_log, append_desktop_log, append_startup_log, debug_mode, desktop_bridge,
    exit_events, runtime_paths, single_instance, startup_task, update_poller, ShellState,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("Jason's Game desktop shell starting");
    append_startup_log(&format!(
        "Shell log path: {}",
        runtime_paths::shell_log_path().display()
    ));
    if debug_mode::debug_enabled() {
        append_startup_log("Debug mode is on (JGDEBUG); mirroring logs to stderr");
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, argv, cwd| {
            single_instance::handle_second_instance(app_handle, argv, cwd);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_request_install,
            crate::desktop_bridge_commands::desktop_bridge_get_version,
            crate::desktop_bridge_commands::desktop_bridge_open_external,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                let app_handle = window.app_handle();
                app_handle.state::<ShellState>().set_window_content(None);
                append_debug_log("Main window destroyed");
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_debug_log(&format!("Page load started: {}", payload.url()));
                let state = webview.app_handle().state::<ShellState>();
                if desktop_bridge::should_inject_desktop_bridge(&state.game_url, payload.url()) {
                    desktop_bridge::inject_desktop_bridge(webview, append_desktop_log);
                }
            }
            PageLoadEvent::Finished => {
                append_debug_log(&format!("Page load finished: {}", payload.url()));
                let state = webview.app_handle().state::<ShellState>();
                if desktop_bridge::should_inject_desktop_bridge(&state.game_url, payload.url()) {
                    desktop_bridge::inject_desktop_bridge(webview, append_desktop_log);
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            startup_task::spawn_startup_task(app_handle.clone(), append_startup_log);
            update_poller::spawn_update_poller(app_handle);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(app_handle, &api, code);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                exit_events::handle_reopen(app_handle, has_visible_windows);
            }
            _ => {}
        });
}
