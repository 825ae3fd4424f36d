use std::sync::Arc;

use tokio::sync::watch;

/// Mounted/unmounted state of the view that owns a pending action.
#[derive(Debug, Clone)]
pub struct ViewLifecycle {
    unmounted: Arc<watch::Sender<bool>>,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            unmounted: Arc::new(tx),
        }
    }

    pub fn unmount(&self) {
        self.unmounted.send_replace(true);
    }

    pub fn is_unmounted(&self) -> bool {
        *self.unmounted.borrow()
    }

    /// Resolves once `unmount` has been called.
    pub async fn unmounted(&self) {
        let mut rx = self.unmounted.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
