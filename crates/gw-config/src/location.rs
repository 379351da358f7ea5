//! Device geolocation settings.

use std::time::Duration;

use gw_core::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_clock_in_timeout_secs() -> u64 {
    10
}

const fn default_report_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Fixed device latitude (headless devices without a GPS fix).
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Fixed device longitude.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Bounded wait for a position at clock-in.
    #[serde(default = "default_clock_in_timeout_secs")]
    pub clock_in_timeout_secs: u64,

    /// Bounded wait for a position when submitting a report.
    #[serde(default = "default_report_timeout_secs")]
    pub report_timeout_secs: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            clock_in_timeout_secs: default_clock_in_timeout_secs(),
            report_timeout_secs: default_report_timeout_secs(),
        }
    }
}

impl LocationConfig {
    /// The configured fixed position, if both coordinates are set.
    #[must_use]
    pub fn fixed_position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn clock_in_timeout(&self) -> Duration {
        Duration::from_secs(self.clock_in_timeout_secs)
    }

    #[must_use]
    pub const fn report_timeout(&self) -> Duration {
        Duration::from_secs(self.report_timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => {
                GeoPoint::checked(lat, lng)
                    .map_err(|e| ConfigError::invalid("location", e.to_string()))?;
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::invalid(
                    "location",
                    "latitude and longitude must be set together",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_fixed_position() {
        let config = LocationConfig::default();
        assert!(config.fixed_position().is_none());
        assert_eq!(config.clock_in_timeout(), Duration::from_secs(10));
        assert_eq!(config.report_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn half_set_position_is_rejected() {
        let config = LocationConfig {
            latitude: Some(12.9),
            ..Default::default()
        };
        assert!(config.fixed_position().is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let config = LocationConfig {
            latitude: Some(12.9),
            longitude: Some(200.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
