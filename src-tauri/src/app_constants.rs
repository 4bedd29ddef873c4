use std::time::Duration;

/// Where the backend serves the game UI once it is up.
pub(crate) const DEFAULT_GAME_URL: &str = "http://localhost:8080/";
pub(crate) const GAME_URL_ENV: &str = "JASONS_GAME_URL";

/// Full command line replacing backend discovery, for running the game
/// server from a source checkout.
pub(crate) const BACKEND_CMD_ENV: &str = "JASONS_GAME_BACKEND_CMD";
/// Set on the spawned backend so its own logs land next to ours.
pub(crate) const BACKEND_LOG_DIR_ENV: &str = "JASONS_GAME_LOG_DIR";
pub(crate) const UPDATE_FEED_ENV: &str = "JASONS_GAME_UPDATE_FEED";
pub(crate) const DEBUG_ENV: &str = "JGDEBUG";

pub(crate) const DEFAULT_UPDATE_FEED_BASE: &str = "https://updates.jasonsgame.com";
pub(crate) const UPDATE_CHECK_INTERVAL: Duration = Duration::from_secs(15 * 60);
pub(crate) const UPDATE_FEED_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Jason's Game";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1366.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 768.0;

/// Subdirectory of the install (packaged) or repository root (development)
/// holding the backend executable.
pub(crate) const BACKEND_BIN_DIR: &str = "bin";

pub(crate) const BACKEND_READY_TIMEOUT: Duration = Duration::from_secs(15);
pub(crate) const BACKEND_READY_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub(crate) const BACKEND_PING_TIMEOUT_MS: u64 = 800;
pub(crate) const BACKEND_EXIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub(crate) const LOG_DIR_NAME: &str = "jasons-game";
pub(crate) const SHELL_LOG_FILE: &str = "shell.log";
pub(crate) const BACKEND_LOG_FILE: &str = "backend.log";
pub(crate) const SHELL_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub(crate) const BACKEND_LOG_MAX_BYTES: u64 = 20 * 1024 * 1024;
pub(crate) const LOG_BACKUP_COUNT: usize = 5;

#[cfg(target_os = "windows")]
pub(crate) const CREATE_NO_WINDOW: u32 = 0x0800_0000;
