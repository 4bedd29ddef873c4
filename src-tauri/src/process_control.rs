use std::process::Child;

/// Stops a child and reaps it. Windows needs `taskkill /t` so the whole
/// process tree goes down with the backend.
pub(crate) fn stop_child_process(child: &mut Child) {
    #[cfg(target_os = "windows")]
    {
        use std::process::{Command, Stdio};

        let _ = Command::new("taskkill")
            .args(["/pid", &child.id().to_string(), "/t", "/f"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .stdin(Stdio::null())
            .status();
        let _ = child.wait();
        return;
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = child.kill();
        let _ = child.wait();
    }
}
