pub(crate) mod host_shell;
pub(crate) mod navigator;
pub(crate) mod otp_purpose;
pub(crate) mod recording_navigator;
pub(crate) mod route;

pub use host_shell::{HostShell, NoopHostShell};
pub use navigator::Navigator;
pub use otp_purpose::OtpPurpose;
pub use recording_navigator::RecordingNavigator;
pub use route::Route;
