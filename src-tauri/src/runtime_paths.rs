use std::path::PathBuf;

use crate::{BACKEND_LOG_FILE, LOG_DIR_NAME, SHELL_LOG_FILE};

/// Per-user log directory, matching where the packaged game has always
/// written: `~/Library/Logs` on macOS, roaming app data on Windows,
/// `~/.config` elsewhere.
pub(crate) fn default_log_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home::home_dir().map(|home| home.join("Library").join("Logs").join(LOG_DIR_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|home| home.join("AppData").join("Roaming")))
            .map(|roaming| roaming.join(LOG_DIR_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        home::home_dir().map(|home| home.join(".config").join(LOG_DIR_NAME))
    }
}

pub(crate) fn shell_log_path() -> PathBuf {
    crate::logging::resolve_shell_log_path(default_log_dir(), SHELL_LOG_FILE)
}

/// Where the backend's stdout/stderr are redirected. None when no home
/// directory can be resolved; the spawn falls back to discarding output.
pub(crate) fn backend_log_path() -> Option<PathBuf> {
    default_log_dir().map(|dir| dir.join(BACKEND_LOG_FILE))
}

/// Repository root in development builds; the dev-tree backend search and
/// custom launch commands run relative to it.
pub(crate) fn workspace_root_dir() -> PathBuf {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    candidate
        .canonicalize()
        .unwrap_or_else(|_| candidate.to_path_buf())
}
