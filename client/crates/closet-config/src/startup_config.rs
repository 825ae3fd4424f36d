use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ANIMATION_GRACE_MS, DEFAULT_MIN_DURATION_MS,
    MAX_ANIMATION_GRACE_MS, MAX_MIN_DURATION_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Splash presentation timing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Minimum time the splash stays up before navigating
    pub min_duration_ms: u64,
    /// Extra time allowed for the intro animation after the minimum elapsed
    pub animation_grace_ms: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: DEFAULT_MIN_DURATION_MS,
            animation_grace_ms: DEFAULT_ANIMATION_GRACE_MS,
        }
    }
}

impl StartupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_duration_ms > MAX_MIN_DURATION_MS {
            return Err(ConfigError::startup(format!(
                "startup.min_duration_ms must be <= {}, got {}",
                MAX_MIN_DURATION_MS, self.min_duration_ms
            )));
        }

        if self.animation_grace_ms > MAX_ANIMATION_GRACE_MS {
            return Err(ConfigError::startup(format!(
                "startup.animation_grace_ms must be <= {}, got {}",
                MAX_ANIMATION_GRACE_MS, self.animation_grace_ms
            )));
        }

        Ok(())
    }

    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }

    pub fn animation_grace(&self) -> Duration {
        Duration::from_millis(self.animation_grace_ms)
    }
}
