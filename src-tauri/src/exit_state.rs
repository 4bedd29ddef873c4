/// Tracks whether the shell is on its way down. `quitting` flips once and
/// never back; `cleanup_started` hands the actual teardown to exactly one
/// caller.
#[derive(Debug, Default)]
pub(crate) struct ExitStateMachine {
    quitting: bool,
    cleanup_started: bool,
}

impl ExitStateMachine {
    pub(crate) fn mark_quitting(&mut self) {
        self.quitting = true;
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Returns true exactly once; the caller that wins runs teardown.
    pub(crate) fn try_begin_cleanup(&mut self) -> bool {
        if self.cleanup_started {
            return false;
        }
        self.quitting = true;
        self.cleanup_started = true;
        true
    }
}
