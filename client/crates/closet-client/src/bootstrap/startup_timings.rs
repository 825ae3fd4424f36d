use closet_config::StartupConfig;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupTimings {
    /// The splash never navigates earlier than this after start
    pub min_duration: Duration,
    /// How long past `min_duration` to wait for the intro animation
    pub animation_grace: Duration,
}

impl StartupTimings {
    pub fn new(min_duration: Duration, animation_grace: Duration) -> Self {
        Self {
            min_duration,
            animation_grace,
        }
    }
}

impl Default for StartupTimings {
    fn default() -> Self {
        Self::from(&StartupConfig::default())
    }
}

impl From<&StartupConfig> for StartupTimings {
    fn from(config: &StartupConfig) -> Self {
        Self::new(config.min_duration(), config.animation_grace())
    }
}
