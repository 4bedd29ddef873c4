use url::Url;

/// URL of one of the bundled shell pages. Windows serves the bundle over
/// `http://tauri.localhost`, every other platform over `tauri://localhost`.
pub(crate) fn shell_page_url(page: &str) -> String {
    let trimmed = page.trim_start_matches('/');
    if cfg!(target_os = "windows") {
        format!("http://tauri.localhost/{trimmed}")
    } else {
        format!("tauri://localhost/{trimmed}")
    }
}

pub(crate) fn update_pending_page_url() -> String {
    shell_page_url("update-pending.html")
}

pub(crate) fn restart_prompt_page_url() -> String {
    shell_page_url("restart-prompt.html")
}

pub(crate) fn is_shell_page_url(url: &Url) -> bool {
    match url.scheme() {
        "tauri" => true,
        "http" | "https" => url.host_str() == Some("tauri.localhost"),
        _ => false,
    }
}
