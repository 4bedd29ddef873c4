use std::{
    env,
    fs::{self, File, OpenOptions},
    path::PathBuf,
    process::{Child, Command, Stdio},
};

use tauri::AppHandle;

use crate::{
    backend_path, logging, runtime_paths, LaunchPlan, BACKEND_CMD_ENV, BACKEND_LOG_DIR_ENV,
    BACKEND_LOG_MAX_BYTES, LOG_BACKUP_COUNT,
};

/// Decides what to run: the command-line override when set, otherwise the
/// packaged or development-tree backend executable.
pub(crate) fn resolve_launch_plan(app_handle: &AppHandle) -> Result<LaunchPlan, String> {
    if let Some(custom_cmd) = env::var(BACKEND_CMD_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    {
        return resolve_custom_launch(custom_cmd);
    }

    let executable =
        backend_path::locate_backend_executable(app_handle).map_err(|error| error.to_string())?;
    let cwd = executable
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(runtime_paths::workspace_root_dir);

    Ok(LaunchPlan {
        cmd: executable.to_string_lossy().into_owned(),
        args: Vec::new(),
        cwd,
    })
}

fn resolve_custom_launch(custom_cmd: String) -> Result<LaunchPlan, String> {
    let mut pieces = shlex::split(&custom_cmd)
        .ok_or_else(|| format!("Invalid {BACKEND_CMD_ENV}: {custom_cmd}"))?;
    if pieces.is_empty() {
        return Err(format!("{BACKEND_CMD_ENV} is empty."));
    }

    let cmd = pieces.remove(0);
    Ok(LaunchPlan {
        cmd,
        args: pieces,
        cwd: runtime_paths::workspace_root_dir(),
    })
}

pub(crate) fn spawn_backend<F>(plan: &LaunchPlan, log: F) -> Result<Child, String>
where
    F: Fn(&str),
{
    let mut command = build_backend_command(plan);
    attach_backend_log(&mut command, &log);

    command.spawn().map_err(|error| {
        format!(
            "Failed to spawn backend process with command {:?}: {}",
            build_debug_command(plan),
            error
        )
    })
}

fn build_backend_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(&plan.cmd);
    command
        .args(&plan.args)
        .current_dir(&plan.cwd)
        .stdin(Stdio::null());

    if let Some(log_dir) = runtime_paths::default_log_dir() {
        command.env(BACKEND_LOG_DIR_ENV, &log_dir);
    }

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(crate::CREATE_NO_WINDOW);
    }

    command
}

pub(crate) fn build_debug_command(plan: &LaunchPlan) -> Vec<String> {
    let mut parts = vec![plan.cmd.clone()];
    parts.extend(plan.args.clone());
    parts
}

fn attach_backend_log<F>(command: &mut Command, log: &F)
where
    F: Fn(&str),
{
    match open_backend_log(log) {
        Some((stdout_file, stderr_file)) => {
            command.stdout(Stdio::from(stdout_file));
            command.stderr(Stdio::from(stderr_file));
        }
        None => {
            command.stdout(Stdio::null());
            command.stderr(Stdio::null());
        }
    }
}

fn open_backend_log<F>(log: &F) -> Option<(File, File)>
where
    F: Fn(&str),
{
    let log_path = match runtime_paths::backend_log_path() {
        Some(path) => path,
        None => {
            log("Backend log path could not be resolved; discarding backend output");
            return None;
        }
    };

    if let Some(parent) = log_path.parent() {
        if let Err(error) = fs::create_dir_all(parent) {
            log(&format!(
                "Failed to create backend log directory {}: {}",
                parent.display(),
                error
            ));
            return None;
        }
    }

    if let Err(error) = logging::rotate_if_needed(&log_path, BACKEND_LOG_MAX_BYTES, LOG_BACKUP_COUNT)
    {
        log(&format!(
            "Failed to rotate backend log {}: {}",
            log_path.display(),
            error
        ));
    }

    let stdout_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(error) => {
            log(&format!(
                "Failed to open backend log {}: {}",
                log_path.display(),
                error
            ));
            return None;
        }
    };
    let stderr_file = match stdout_file.try_clone() {
        Ok(file) => file,
        Err(error) => {
            log(&format!("Failed to clone backend log handle: {error}"));
            return None;
        }
    };
    Some((stdout_file, stderr_file))
}
