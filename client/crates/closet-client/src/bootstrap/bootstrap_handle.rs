use crate::bootstrap::ViewLifecycle;
use crate::navigation::Route;

use log::warn;
use tokio::task::JoinHandle;

/// Owns a launched startup sequence. Dropping it unmounts the splash view.
pub struct BootstrapHandle {
    lifecycle: ViewLifecycle,
    task: Option<JoinHandle<Option<Route>>>,
}

impl BootstrapHandle {
    pub(crate) fn new(lifecycle: ViewLifecycle, task: JoinHandle<Option<Route>>) -> Self {
        Self {
            lifecycle,
            task: Some(task),
        }
    }

    /// Tear down the splash view; a navigation that has not happened yet never will.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    /// Wait for the sequence to finish and return where it navigated, if anywhere.
    pub async fn join(mut self) -> Option<Route> {
        let task = self.task.take()?;
        match task.await {
            Ok(route) => route,
            Err(e) => {
                warn!("Startup task failed: {e}");
                None
            }
        }
    }
}

impl Drop for BootstrapHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.lifecycle.unmount();
        }
    }
}
