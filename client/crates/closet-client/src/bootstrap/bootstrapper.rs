use crate::bootstrap::{
    AnimationSignal, BootstrapHandle, BootstrapState, StartupTimings, ViewLifecycle,
};
use crate::navigation::{HostShell, Navigator, Route};
use crate::session::SessionContext;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::Instant;

/// Decides, once per launch, whether the user lands on the dashboard or login.
///
/// Three things must be done before navigating: the stored credential has
/// been read, `min_duration` has elapsed since start, and the intro
/// animation has finished (or `animation_grace` past the minimum ran out).
pub struct Bootstrapper {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    shell: Arc<dyn HostShell>,
    timings: StartupTimings,
    started: AtomicBool,
    state_tx: watch::Sender<BootstrapState>,
}

impl Bootstrapper {
    pub fn new(
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        shell: Arc<dyn HostShell>,
        timings: StartupTimings,
    ) -> Self {
        let (state_tx, _) = watch::channel(BootstrapState::Started);
        Self {
            session,
            navigator,
            shell,
            timings,
            started: AtomicBool::new(false),
            state_tx,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.state_tx.subscribe()
    }

    /// Spawn the sequence on the runtime, tied to a fresh view lifecycle.
    pub fn launch(self: Arc<Self>, animation: AnimationSignal) -> BootstrapHandle {
        let lifecycle = ViewLifecycle::new();
        let task_lifecycle = lifecycle.clone();
        let task = tokio::spawn(async move { self.run(animation, &task_lifecycle).await });
        BootstrapHandle::new(lifecycle, task)
    }

    /// Run the sequence. Returns the route navigated to, or None when this
    /// was a repeat invocation or the view unmounted first.
    pub async fn run(
        &self,
        mut animation: AnimationSignal,
        lifecycle: &ViewLifecycle,
    ) -> Option<Route> {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Startup sequence already running, ignoring repeat invocation");
            return None;
        }

        if lifecycle.is_unmounted() {
            self.cancel();
            return None;
        }

        let start = Instant::now();
        self.set_state(BootstrapState::Animating);

        let min_deadline = start + self.timings.min_duration;
        let animation_deadline = min_deadline + self.timings.animation_grace;

        let ready = async {
            let (credential, _, animation_result) = tokio::join!(
                self.read_credential(),
                tokio::time::sleep_until(min_deadline),
                tokio::time::timeout_at(animation_deadline, animation.wait()),
            );

            if animation_result.is_err() {
                warn!(
                    "Intro animation still running after {:?}, continuing",
                    self.timings.min_duration + self.timings.animation_grace
                );
            }

            credential
        };

        let credential = tokio::select! {
            biased;
            _ = lifecycle.unmounted() => {
                self.cancel();
                return None;
            }
            credential = ready => credential,
        };

        if lifecycle.is_unmounted() {
            self.cancel();
            return None;
        }

        let target = if credential.is_some() {
            Route::Dashboard
        } else {
            Route::Login
        };

        info!(
            "Startup resolved after {:?}, routing to {target}",
            start.elapsed()
        );

        self.shell.release_native_splash();
        self.navigator.navigate(target.clone());
        self.set_state(BootstrapState::Navigated(target.clone()));

        Some(target)
    }

    /// Read failures route to login rather than leaving the splash up.
    async fn read_credential(&self) -> Option<String> {
        match self.session.credential().await {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Could not read stored credential, treating as logged out: {e}");
                None
            }
        }
    }

    fn cancel(&self) {
        info!("Splash unmounted before navigation, cancelling startup");
        self.set_state(BootstrapState::Cancelled);
    }

    fn set_state(&self, state: BootstrapState) {
        self.state_tx.send_replace(state);
    }
}
