use tauri::{AppHandle, Manager};

use crate::{
    append_update_log, backend_process_lifecycle, main_window, update_status::UpdateStatus,
    ShellState, WindowContent,
};

/// One observation from an update check, regardless of transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpdateEvent {
    Checking,
    Available { version: Option<String> },
    NotAvailable,
    Downloaded { version: String },
    CheckFailed { reason: String },
}

impl UpdateEvent {
    pub(crate) fn describe(&self) -> String {
        match self {
            UpdateEvent::Checking => "Checking for updates".to_string(),
            UpdateEvent::Available {
                version: Some(version),
            } => format!("Update {version} is available"),
            UpdateEvent::Available { version: None } => "An update is available".to_string(),
            UpdateEvent::NotAvailable => "No update available".to_string(),
            UpdateEvent::Downloaded { version } => format!("Update {version} downloaded"),
            UpdateEvent::CheckFailed { reason } => format!("Update check failed: {reason}"),
        }
    }
}

/// Everything applying an event does to the shell, computed up front so
/// the sequencing rules stay testable without a running app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UpdateReaction {
    pub(crate) status: UpdateStatus,
    pub(crate) stop_backend: bool,
    pub(crate) show: Option<WindowContent>,
}

pub(crate) fn reaction_for_event(current: UpdateStatus, event: &UpdateEvent) -> UpdateReaction {
    let proposed = match event {
        UpdateEvent::Checking => UpdateStatus::Checking,
        UpdateEvent::Available { .. } => UpdateStatus::Available,
        UpdateEvent::NotAvailable => UpdateStatus::NotAvailable,
        UpdateEvent::Downloaded { .. } => UpdateStatus::Downloaded,
        // A failed check only clears an in-flight one; a noticed update
        // stays noticed.
        UpdateEvent::CheckFailed { .. } => {
            if current == UpdateStatus::Checking {
                UpdateStatus::Unknown
            } else {
                current
            }
        }
    };
    let status = current.advance(proposed);

    let newly_available = status == UpdateStatus::Available && current != UpdateStatus::Available;
    let newly_downloaded =
        status == UpdateStatus::Downloaded && current != UpdateStatus::Downloaded;

    let show = if newly_downloaded {
        Some(WindowContent::RestartPrompt)
    } else if newly_available {
        Some(WindowContent::UpdatePending)
    } else {
        None
    };

    UpdateReaction {
        status,
        stop_backend: newly_available || newly_downloaded,
        show,
    }
}

pub(crate) fn apply_update_event(app_handle: &AppHandle, event: UpdateEvent) {
    let state = app_handle.state::<ShellState>();
    let current = state.update_status();
    let reaction = reaction_for_event(current, &event);

    append_update_log(&format!(
        "{} (status {} -> {})",
        event.describe(),
        current.label(),
        reaction.status.label()
    ));
    state.set_update_status(reaction.status);

    if reaction.stop_backend {
        backend_process_lifecycle::kill_backend(&state, |message| append_update_log(message));
    }
    if let Some(content) = reaction.show {
        main_window::show_window_content(app_handle, content);
    }
}

#[cfg(test)]
mod tests {
    use super::{reaction_for_event, UpdateEvent};
    use crate::update_status::UpdateStatus;
    use crate::WindowContent;

    fn available() -> UpdateEvent {
        UpdateEvent::Available {
            version: Some("0.9.4".to_string()),
        }
    }

    fn downloaded() -> UpdateEvent {
        UpdateEvent::Downloaded {
            version: "0.9.4".to_string(),
        }
    }

    fn failed() -> UpdateEvent {
        UpdateEvent::CheckFailed {
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn checking_moves_the_status_without_side_effects() {
        let reaction = reaction_for_event(UpdateStatus::Unknown, &UpdateEvent::Checking);
        assert_eq!(reaction.status, UpdateStatus::Checking);
        assert!(!reaction.stop_backend);
        assert!(reaction.show.is_none());
    }

    #[test]
    fn a_noticed_update_stops_the_backend_and_shows_the_pending_view() {
        let reaction = reaction_for_event(UpdateStatus::Checking, &available());
        assert_eq!(reaction.status, UpdateStatus::Available);
        assert!(reaction.stop_backend);
        assert_eq!(reaction.show, Some(WindowContent::UpdatePending));
    }

    #[test]
    fn a_finished_download_swaps_to_the_restart_prompt() {
        let reaction = reaction_for_event(UpdateStatus::Available, &downloaded());
        assert_eq!(reaction.status, UpdateStatus::Downloaded);
        assert!(reaction.stop_backend);
        assert_eq!(reaction.show, Some(WindowContent::RestartPrompt));
    }

    #[test]
    fn a_download_straight_from_checking_still_shows_the_prompt() {
        let reaction = reaction_for_event(UpdateStatus::Checking, &downloaded());
        assert_eq!(reaction.status, UpdateStatus::Downloaded);
        assert!(reaction.stop_backend);
        assert_eq!(reaction.show, Some(WindowContent::RestartPrompt));
    }

    #[test]
    fn not_available_never_regresses_a_noticed_update() {
        let reaction = reaction_for_event(UpdateStatus::Available, &UpdateEvent::NotAvailable);
        assert_eq!(reaction.status, UpdateStatus::Available);
        assert!(!reaction.stop_backend);
        assert!(reaction.show.is_none());
    }

    #[test]
    fn a_failed_check_resets_only_an_in_flight_one() {
        let from_checking = reaction_for_event(UpdateStatus::Checking, &failed());
        assert_eq!(from_checking.status, UpdateStatus::Unknown);
        assert!(!from_checking.stop_backend);
        assert!(from_checking.show.is_none());

        let from_available = reaction_for_event(UpdateStatus::Available, &failed());
        assert_eq!(from_available.status, UpdateStatus::Available);

        let from_not_available = reaction_for_event(UpdateStatus::NotAvailable, &failed());
        assert_eq!(from_not_available.status, UpdateStatus::NotAvailable);
    }

    #[test]
    fn a_check_can_still_succeed_after_an_earlier_failure() {
        let mut status = UpdateStatus::Unknown;
        for event in [UpdateEvent::Checking, failed(), UpdateEvent::Checking] {
            status = reaction_for_event(status, &event).status;
        }

        let reaction = reaction_for_event(status, &available());
        assert_eq!(reaction.status, UpdateStatus::Available);
        assert!(reaction.stop_backend);
        assert_eq!(reaction.show, Some(WindowContent::UpdatePending));
    }

    #[test]
    fn downloaded_absorbs_every_later_event() {
        for event in [
            UpdateEvent::Checking,
            available(),
            UpdateEvent::NotAvailable,
            downloaded(),
            failed(),
        ] {
            let reaction = reaction_for_event(UpdateStatus::Downloaded, &event);
            assert_eq!(reaction.status, UpdateStatus::Downloaded);
            assert!(!reaction.stop_backend);
            assert!(reaction.show.is_none());
        }
    }
}
