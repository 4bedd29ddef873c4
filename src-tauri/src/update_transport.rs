use crate::update_status::UpdateStatus;

/// How updates reach this platform: the bundled updater installs them in
/// place on macOS and Windows; elsewhere we can only poll the release feed
/// and point players at the downloads page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateTransportKind {
    Native,
    PollingFallback,
}

impl UpdateTransportKind {
    pub(crate) fn for_current_platform() -> Self {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            UpdateTransportKind::Native
        } else {
            UpdateTransportKind::PollingFallback
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            UpdateTransportKind::Native => "native updater",
            UpdateTransportKind::PollingFallback => "update feed polling",
        }
    }

    /// The status past which this transport has nothing further to do.
    pub(crate) fn terminal_status(self) -> UpdateStatus {
        match self {
            UpdateTransportKind::Native => UpdateStatus::Downloaded,
            UpdateTransportKind::PollingFallback => UpdateStatus::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateTransportKind;
    use crate::update_status::UpdateStatus;

    #[test]
    fn native_transport_finishes_at_downloaded() {
        assert_eq!(
            UpdateTransportKind::Native.terminal_status(),
            UpdateStatus::Downloaded
        );
    }

    #[test]
    fn fallback_transport_finishes_at_available() {
        assert_eq!(
            UpdateTransportKind::PollingFallback.terminal_status(),
            UpdateStatus::Available
        );
    }

    #[test]
    fn current_platform_maps_to_a_transport() {
        let kind = UpdateTransportKind::for_current_platform();
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            assert_eq!(kind, UpdateTransportKind::Native);
        } else {
            assert_eq!(kind, UpdateTransportKind::PollingFallback);
        }
    }
}
