use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;
use crate::enums::ConveyanceStatus;

/// A guard's request to leave their assigned geofenced site.
///
/// The server owns the lifecycle; the client only reads lists and writes the
/// pending → approved/denied transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConveyanceRequest {
    pub id: String,
    pub guard_id: String,
    pub guard_name: String,
    pub site_id: String,
    pub site_name: String,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
    pub status: ConveyanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,
    /// Minutes the guard expects to be away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<GeoPoint>,
}

impl ConveyanceRequest {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, ConveyanceStatus::Pending)
    }
}
