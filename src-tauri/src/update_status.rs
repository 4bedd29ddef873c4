#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateStatus {
    Unknown,
    Checking,
    Available,
    Downloaded,
    NotAvailable,
}

impl UpdateStatus {
    /// Later checks only move forward: a noticed update never un-notices
    /// itself, and a downloaded one stays downloaded.
    pub(crate) fn advance(self, proposed: UpdateStatus) -> UpdateStatus {
        match self {
            UpdateStatus::Downloaded => UpdateStatus::Downloaded,
            UpdateStatus::Available => match proposed {
                UpdateStatus::Downloaded => UpdateStatus::Downloaded,
                _ => UpdateStatus::Available,
            },
            _ => proposed,
        }
    }

    /// While an update is pending the backend stays down and the window
    /// shows the update views instead of the game.
    pub(crate) fn supersedes_backend(self) -> bool {
        matches!(self, UpdateStatus::Available | UpdateStatus::Downloaded)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            UpdateStatus::Unknown => "unknown",
            UpdateStatus::Checking => "checking",
            UpdateStatus::Available => "available",
            UpdateStatus::Downloaded => "downloaded",
            UpdateStatus::NotAvailable => "not available",
        }
    }
}
