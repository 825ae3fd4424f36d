//! One-shot startup routing shown behind the splash presentation.

pub(crate) mod animation_signal;
pub(crate) mod bootstrap_handle;
pub(crate) mod bootstrap_state;
pub(crate) mod bootstrapper;
pub(crate) mod startup_timings;
pub(crate) mod view_lifecycle;

pub use animation_signal::{AnimationCompleter, AnimationSignal};
pub use bootstrap_handle::BootstrapHandle;
pub use bootstrap_state::BootstrapState;
pub use bootstrapper::Bootstrapper;
pub use startup_timings::StartupTimings;
pub use view_lifecycle::ViewLifecycle;
