use std::process::{Command, Stdio};
use tauri::AppHandle;
use url::Url;

use crate::{append_desktop_log, append_update_log, update_install_flow, DesktopBridgeResult};

/// Only web links leave the shell; anything else stays inside.
fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("No URL was given.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Could not parse URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Only http and https links open externally (got '{scheme}')."
        )),
    }
}

fn run_browser_tool(tool: &str, args: &[&str]) -> Result<(), String> {
    Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{tool}': {error}"))
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    run_browser_tool("open", &[url])
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    run_browser_tool("rundll32", &["url.dll,FileProtocolHandler", url])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    run_browser_tool("xdg-open", &[url])
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

/// Player confirmed the restart on the prompt page: install the staged
/// update and relaunch. Runs async so the teardown never blocks the UI.
#[tauri::command]
pub(crate) async fn desktop_bridge_request_install(app_handle: AppHandle) -> DesktopBridgeResult {
    match update_install_flow::run_quit_and_install(&app_handle) {
        Ok(()) => DesktopBridgeResult {
            ok: true,
            reason: None,
        },
        Err(error) => {
            append_update_log(&format!("Install request failed: {error}"));
            DesktopBridgeResult {
                ok: false,
                reason: Some(error),
            }
        }
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_version(app_handle: AppHandle) -> String {
    app_handle.package_info().version.to_string()
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_external(url: String) -> DesktopBridgeResult {
    let parsed = match parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => {
            return DesktopBridgeResult {
                ok: false,
                reason: Some(error),
            };
        }
    };

    match open_url_with_system_browser(parsed.as_ref()) {
        Ok(()) => {
            append_desktop_log(&format!("Opened {parsed} in the system browser"));
            DesktopBridgeResult {
                ok: true,
                reason: None,
            }
        }
        Err(error) => DesktopBridgeResult {
            ok: false,
            reason: Some(error),
        },
    }
}
