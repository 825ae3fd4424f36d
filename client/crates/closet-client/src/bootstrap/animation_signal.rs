use tokio::sync::watch;

/// Held by the presentation layer; completes the intro animation.
#[derive(Debug)]
pub struct AnimationCompleter {
    tx: watch::Sender<bool>,
}

impl AnimationCompleter {
    pub fn complete(self) {
        self.tx.send_replace(true);
    }
}

/// Completion signal of the intro animation, awaited by the bootstrapper.
///
/// Dropping the completer without calling `complete` also counts as done.
#[derive(Debug, Clone)]
pub struct AnimationSignal {
    rx: watch::Receiver<bool>,
}

impl AnimationSignal {
    pub fn channel() -> (AnimationCompleter, AnimationSignal) {
        let (tx, rx) = watch::channel(false);
        (AnimationCompleter { tx }, AnimationSignal { rx })
    }

    /// A signal that is already complete, for hosts without an animation.
    pub fn finished() -> AnimationSignal {
        let (_tx, rx) = watch::channel(true);
        AnimationSignal { rx }
    }

    pub fn is_finished(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn wait(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
