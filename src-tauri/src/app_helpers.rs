use std::sync::{Mutex, OnceLock};

use crate::logging::{append_shell_log, ShellLogCategory};
use crate::{runtime_paths, LOG_BACKUP_COUNT, SHELL_LOG_FILE, SHELL_LOG_MAX_BYTES};

static SHELL_LOG_WRITE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn append_categorized_log(category: ShellLogCategory, message: &str) {
    append_shell_log(
        category,
        message,
        runtime_paths::default_log_dir(),
        SHELL_LOG_FILE,
        SHELL_LOG_MAX_BYTES,
        LOG_BACKUP_COUNT,
        &SHELL_LOG_WRITE_LOCK,
    );
}

pub(crate) fn append_desktop_log(message: &str) {
    append_categorized_log(ShellLogCategory::Runtime, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_categorized_log(ShellLogCategory::Startup, message);
}

pub(crate) fn append_update_log(message: &str) {
    append_categorized_log(ShellLogCategory::Update, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_categorized_log(ShellLogCategory::Shutdown, message);
}

/// Dropped unless debug mode is active; see `debug_mode`.
pub(crate) fn append_debug_log(message: &str) {
    append_categorized_log(ShellLogCategory::Debug, message);
}
