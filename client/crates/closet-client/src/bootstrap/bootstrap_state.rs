use crate::navigation::Route;

/// Progress of the startup sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    /// Constructed, not yet running
    Started,
    /// Splash is up; waiting on credential, minimum duration and animation
    Animating,
    /// Terminal: the single navigation has been issued
    Navigated(Route),
    /// Terminal: the owning view went away before navigation
    Cancelled,
}

impl BootstrapState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootstrapState::Navigated(_) | BootstrapState::Cancelled)
    }
}
