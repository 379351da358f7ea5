//! Refresh cadences for polled views.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_conveyance_interval_secs() -> u64 {
    30
}

const fn default_attendance_interval_secs() -> u64 {
    60
}

const fn default_clock_tick_millis() -> u64 {
    1_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// How often the conveyance list is re-fetched while displayed.
    #[serde(default = "default_conveyance_interval_secs")]
    pub conveyance_interval_secs: u64,

    /// How often attendance status is re-synced while the duty view is open.
    #[serde(default = "default_attendance_interval_secs")]
    pub attendance_interval_secs: u64,

    /// Elapsed shift clock refresh cadence.
    #[serde(default = "default_clock_tick_millis")]
    pub clock_tick_millis: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            conveyance_interval_secs: default_conveyance_interval_secs(),
            attendance_interval_secs: default_attendance_interval_secs(),
            clock_tick_millis: default_clock_tick_millis(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub const fn conveyance_interval(&self) -> Duration {
        Duration::from_secs(self.conveyance_interval_secs)
    }

    #[must_use]
    pub const fn attendance_interval(&self) -> Duration {
        Duration::from_secs(self.attendance_interval_secs)
    }

    #[must_use]
    pub const fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_millis)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.conveyance_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "polling.conveyance_interval_secs",
                "must be at least 1",
            ));
        }
        if self.attendance_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "polling.attendance_interval_secs",
                "must be at least 1",
            ));
        }
        if self.clock_tick_millis == 0 {
            return Err(ConfigError::invalid(
                "polling.clock_tick_millis",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
