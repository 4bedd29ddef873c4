use tauri::{AppHandle, Manager};

use crate::{append_desktop_log, MAIN_WINDOW_LABEL};

/// Runs in the surviving instance when a second launch was attempted. The
/// second process is already gone; we bring the existing window forward.
pub(crate) fn handle_second_instance(app_handle: &AppHandle, argv: Vec<String>, cwd: String) {
    append_desktop_log(&describe_second_instance(&argv, &cwd));

    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("No main window to focus for the second launch");
        return;
    };
    if let Err(error) = window.show() {
        append_desktop_log(&format!("Failed to show main window: {error}"));
    }
    if let Err(error) = window.unminimize() {
        append_desktop_log(&format!("Failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        append_desktop_log(&format!("Failed to focus main window: {error}"));
    }
}

fn describe_second_instance(argv: &[String], cwd: &str) -> String {
    format!("Second launch blocked (argv {argv:?}, cwd {cwd}); focusing the existing window")
}

#[cfg(test)]
mod tests {
    use super::describe_second_instance;

    #[test]
    fn second_launch_log_line_names_the_attempt() {
        let line = describe_second_instance(
            &["jasonsgame".to_string(), "--fullscreen".to_string()],
            "/home/jason",
        );
        assert!(line.contains("--fullscreen"));
        assert!(line.contains("/home/jason"));
        assert!(line.contains("focusing"));
    }
}
