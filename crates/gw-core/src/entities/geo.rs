use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A WGS84 position as reported by the device or the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a point, rejecting out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either coordinate is out of range or NaN.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, CoreError> {
        let point = Self::new(lat, lng);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(CoreError::Validation(format!(
                "coordinates out of range: lat={lat}, lng={lng}"
            )))
        }
    }

    /// Whether both coordinates fall inside their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
