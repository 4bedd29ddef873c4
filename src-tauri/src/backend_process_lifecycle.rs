use tauri::{AppHandle, Manager};

use crate::{
    append_startup_log, app_types::lock_or_recover, backend_launch, backend_monitor,
    process_control, BackendProcess, ShellState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackendExit {
    /// We asked the backend to stop; nothing to report.
    ExpectedAfterKill,
    /// The backend shut itself down with exit code zero.
    CleanExit,
    Crash { code: i32 },
}

/// Signal deaths carry no exit code and count as crashes with code -1.
pub(crate) fn classify_backend_exit(killed_by_us: bool, code: Option<i32>) -> BackendExit {
    if killed_by_us {
        return BackendExit::ExpectedAfterKill;
    }
    match code {
        Some(0) => BackendExit::CleanExit,
        Some(code) => BackendExit::Crash { code },
        None => BackendExit::Crash { code: -1 },
    }
}

pub(crate) fn start_backend(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle.state::<ShellState>();

    if state.update_status().supersedes_backend() {
        append_startup_log("Skipping backend launch; an update is already pending");
        return Ok(());
    }

    let plan = backend_launch::resolve_launch_plan(app_handle)?;
    append_startup_log(&format!(
        "Launching backend with command {:?} in {}",
        backend_launch::build_debug_command(&plan),
        plan.cwd.display()
    ));

    let child = backend_launch::spawn_backend(&plan, |message| append_startup_log(message))?;
    let pid = child.id();
    *lock_or_recover(&state.backend) = Some(BackendProcess {
        child,
        killed_by_us: false,
    });
    append_startup_log(&format!("Backend process started (pid {pid})"));

    backend_monitor::spawn_backend_monitor(app_handle.clone());
    Ok(())
}

/// Stops the backend if it is running. The flag flips before the signal
/// goes out and the slot clears under the same lock hold, so the monitor
/// either sees a deliberate stop or an empty slot.
pub(crate) fn kill_backend<F>(state: &ShellState, log: F)
where
    F: Fn(&str),
{
    let mut slot = lock_or_recover(&state.backend);
    match slot.as_mut() {
        Some(process) => {
            process.killed_by_us = true;
            let pid = process.child.id();
            process_control::stop_child_process(&mut process.child);
            *slot = None;
            log(&format!("Backend process stopped (pid {pid})"));
        }
        None => log("Backend process already stopped"),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_backend_exit, BackendExit};

    #[test]
    fn deliberate_kills_are_never_crashes() {
        assert_eq!(
            classify_backend_exit(true, Some(0)),
            BackendExit::ExpectedAfterKill
        );
        assert_eq!(
            classify_backend_exit(true, Some(3)),
            BackendExit::ExpectedAfterKill
        );
        assert_eq!(classify_backend_exit(true, None), BackendExit::ExpectedAfterKill);
    }

    #[test]
    fn clean_exit_requires_code_zero() {
        assert_eq!(classify_backend_exit(false, Some(0)), BackendExit::CleanExit);
    }

    #[test]
    fn nonzero_and_signal_exits_are_crashes() {
        assert_eq!(
            classify_backend_exit(false, Some(7)),
            BackendExit::Crash { code: 7 }
        );
        assert_eq!(
            classify_backend_exit(false, None),
            BackendExit::Crash { code: -1 }
        );
    }

    #[test]
    fn killing_with_no_backend_running_is_a_no_op() {
        use std::sync::Mutex;

        use super::kill_backend;
        use crate::ShellState;

        let state = ShellState::default();
        let logged = Mutex::new(Vec::new());
        kill_backend(&state, |message| {
            logged.lock().expect("log lock").push(message.to_string())
        });
        kill_backend(&state, |message| {
            logged.lock().expect("log lock").push(message.to_string())
        });

        let lines = logged.lock().expect("log lock");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.contains("already stopped")));
    }

    #[cfg(unix)]
    #[test]
    fn killing_a_live_backend_clears_the_slot() {
        use std::process::{Command, Stdio};
        use std::sync::Mutex;

        use super::kill_backend;
        use crate::{app_types::lock_or_recover, BackendProcess, ShellState};

        let state = ShellState::default();
        let child = Command::new("/bin/sleep")
            .arg("60")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn sleep");
        *lock_or_recover(&state.backend) = Some(BackendProcess {
            child,
            killed_by_us: false,
        });

        let logged = Mutex::new(Vec::new());
        kill_backend(&state, |message| {
            logged.lock().expect("log lock").push(message.to_string())
        });

        assert!(lock_or_recover(&state.backend).is_none());
        let lines = logged.lock().expect("log lock");
        assert!(lines.iter().any(|line| line.contains("stopped")));
    }
}
