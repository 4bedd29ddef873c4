use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, OnceLock},
};

use chrono::Local;

use crate::debug_mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellLogCategory {
    Startup,
    Runtime,
    Update,
    Shutdown,
    Debug,
}

impl ShellLogCategory {
    fn label(self) -> &'static str {
        match self {
            ShellLogCategory::Startup => "startup",
            ShellLogCategory::Runtime => "runtime",
            ShellLogCategory::Update => "update",
            ShellLogCategory::Shutdown => "shutdown",
            ShellLogCategory::Debug => "debug",
        }
    }
}

pub(crate) fn resolve_shell_log_path(log_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    log_dir.unwrap_or_else(std::env::temp_dir).join(file_name)
}

/// Appends one timestamped line. Debug-category lines are dropped unless
/// debug mode is on; every line is mirrored to stderr in debug mode. Log
/// writing must never take the shell down, so failures only reach stderr.
pub(crate) fn append_shell_log(
    category: ShellLogCategory,
    message: &str,
    log_dir: Option<PathBuf>,
    file_name: &str,
    max_bytes: u64,
    backup_count: usize,
    write_lock: &'static OnceLock<Mutex<()>>,
) {
    if category == ShellLogCategory::Debug && !debug_mode::debug_enabled() {
        return;
    }

    let line = format!(
        "[{}][{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category.label(),
        message
    );
    if debug_mode::debug_enabled() {
        eprint!("{line}");
    }

    let path = resolve_shell_log_path(log_dir, file_name);
    let lock = write_lock.get_or_init(|| Mutex::new(()));
    let _guard = match lock.lock() {
        Ok(guard) => guard,
        Err(error) => error.into_inner(),
    };
    if let Err(error) = append_line(&path, &line, max_bytes, backup_count) {
        eprintln!("shell log write failed for {}: {error}", path.display());
    }
}

fn append_line(path: &Path, line: &str, max_bytes: u64, backup_count: usize) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    rotate_if_needed(path, max_bytes, backup_count)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

/// Numbered rotation: `shell.log` becomes `shell.log.1`, pushing older
/// backups up until the oldest falls off at `backup_count`.
pub(crate) fn rotate_if_needed(
    path: &Path,
    max_bytes: u64,
    backup_count: usize,
) -> std::io::Result<()> {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => return Err(error),
    };
    if size < max_bytes || backup_count == 0 {
        return Ok(());
    }

    let backup_path = |index: usize| -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    };

    let oldest = backup_path(backup_count);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for index in (1..backup_count).rev() {
        let from = backup_path(index);
        if from.exists() {
            fs::rename(&from, backup_path(index + 1))?;
        }
    }
    fs::rename(path, backup_path(1))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{resolve_shell_log_path, rotate_if_needed};

    #[test]
    fn resolve_shell_log_path_falls_back_to_temp_dir() {
        let path = resolve_shell_log_path(None, "shell.log");
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("shell.log"));
    }

    #[test]
    fn rotation_is_skipped_below_the_size_limit() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let log = dir.path().join("shell.log");
        fs::write(&log, b"short").expect("write log");

        rotate_if_needed(&log, 1024, 3).expect("rotate");
        assert!(log.exists());
        assert!(!dir.path().join("shell.log.1").exists());
    }

    #[test]
    fn rotation_shifts_backups_and_drops_the_oldest() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let log = dir.path().join("shell.log");

        fs::write(&log, b"current current").expect("write log");
        fs::write(dir.path().join("shell.log.1"), b"one").expect("write backup 1");
        fs::write(dir.path().join("shell.log.2"), b"two").expect("write backup 2");

        rotate_if_needed(&log, 1, 2).expect("rotate");

        assert!(!log.exists());
        assert_eq!(
            fs::read(dir.path().join("shell.log.1")).expect("read backup 1"),
            b"current current"
        );
        assert_eq!(
            fs::read(dir.path().join("shell.log.2")).expect("read backup 2"),
            b"one"
        );
    }

    #[test]
    fn rotation_with_a_missing_file_is_a_no_op() {
        let dir = tempfile::tempdir().expect("create temp dir");
        rotate_if_needed(&dir.path().join("absent.log"), 1, 2).expect("rotate");
    }
}
