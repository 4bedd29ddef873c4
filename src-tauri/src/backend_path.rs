use std::fmt;
use std::path::PathBuf;

use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::{runtime_paths, BACKEND_BIN_DIR};

#[derive(Debug)]
pub(crate) struct ExecutableNotFoundError {
    pub(crate) searched: Vec<PathBuf>,
}

impl fmt::Display for ExecutableNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listed = self
            .searched
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "game backend executable not found (searched: {listed})")
    }
}

/// Platform tag the release pipeline bakes into backend artifact names.
pub(crate) fn platform_tag() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else if cfg!(target_os = "windows") {
        "win32"
    } else {
        "linux"
    }
}

pub(crate) fn backend_executable_name() -> String {
    let extension = if cfg!(target_os = "windows") {
        ".exe"
    } else {
        ""
    };
    format!("jasonsgame-{}-public{extension}", platform_tag())
}

/// Looks in the bundled resources first, then the development tree.
pub(crate) fn locate_backend_executable(
    app_handle: &AppHandle,
) -> Result<PathBuf, ExecutableNotFoundError> {
    let name = backend_executable_name();
    let packaged = app_handle
        .path()
        .resolve(format!("{BACKEND_BIN_DIR}/{name}"), BaseDirectory::Resource)
        .ok();
    let dev = runtime_paths::workspace_root_dir()
        .join(BACKEND_BIN_DIR)
        .join(&name);
    pick_backend_executable(packaged, dev)
}

pub(crate) fn pick_backend_executable(
    packaged: Option<PathBuf>,
    dev: PathBuf,
) -> Result<PathBuf, ExecutableNotFoundError> {
    let mut searched = Vec::new();

    if let Some(candidate) = packaged {
        if candidate.is_file() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    if dev.is_file() {
        return Ok(dev);
    }
    searched.push(dev);

    Err(ExecutableNotFoundError { searched })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{backend_executable_name, pick_backend_executable, platform_tag};

    #[test]
    fn executable_name_carries_the_platform_tag() {
        let name = backend_executable_name();
        assert!(name.starts_with("jasonsgame-"));
        assert!(name.contains(platform_tag()));
        if cfg!(target_os = "windows") {
            assert!(name.ends_with("-public.exe"));
        } else {
            assert!(name.ends_with("-public"));
        }
    }

    #[test]
    fn packaged_binary_wins_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let packaged = dir.path().join("packaged-backend");
        fs::write(&packaged, b"binary").expect("write packaged");
        let dev = dir.path().join("missing-dev-backend");

        let picked = pick_backend_executable(Some(packaged.clone()), dev).expect("should pick");
        assert_eq!(picked, packaged);
    }

    #[test]
    fn dev_tree_binary_is_the_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let packaged = dir.path().join("missing-packaged-backend");
        let dev = dir.path().join("dev-backend");
        fs::write(&dev, b"binary").expect("write dev");

        let picked = pick_backend_executable(Some(packaged), dev.clone()).expect("should pick");
        assert_eq!(picked, dev);
    }

    #[test]
    fn missing_everywhere_reports_every_searched_location() {
        let dir = tempfile::tempdir().expect("tempdir");
        let packaged = dir.path().join("missing-packaged-backend");
        let dev = dir.path().join("missing-dev-backend");

        let error = pick_backend_executable(Some(packaged.clone()), dev.clone())
            .expect_err("nothing should be found");
        assert_eq!(error.searched, vec![packaged.clone(), dev.clone()]);

        let message = error.to_string();
        assert!(message.contains(&packaged.display().to_string()));
        assert!(message.contains(&dev.display().to_string()));
    }
}
