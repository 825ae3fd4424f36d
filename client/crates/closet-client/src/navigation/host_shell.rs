/// The platform shell around the client.
pub trait HostShell: Send + Sync {
    /// Stop holding the native launch screen. Called once, right before the
    /// first navigation, so no blank frame shows in between.
    fn release_native_splash(&self);
}

/// Shell for hosts that have no native launch screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHostShell;

impl HostShell for NoopHostShell {
    fn release_native_splash(&self) {}
}
