//! Best-effort device position.

use std::future::Future;
use std::time::Duration;

use gw_core::GeoPoint;

use crate::error::LocationError;

/// Source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send;
}

/// A position fixed by configuration, for devices without a receiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    position: Option<GeoPoint>,
}

impl FixedLocation {
    #[must_use]
    pub const fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }
}

impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<GeoPoint, LocationError> {
        self.position
            .ok_or_else(|| LocationError::Unavailable("no position configured".to_string()))
    }
}

/// Ask `provider` for a position, giving up after `wait`.
///
/// Failures are logged at warn and yield `None`; location never blocks the
/// action that asked for it.
pub async fn locate_within<L: LocationProvider>(provider: &L, wait: Duration) -> Option<GeoPoint> {
    let result = tokio::time::timeout(wait, provider.current_position())
        .await
        .unwrap_or(Err(LocationError::TimedOut));
    match result {
        Ok(position) => Some(position),
        Err(error) => {
            tracing::warn!(%error, wait_secs = wait.as_secs(), "continuing without location");
            None
        }
    }
}
