use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;
use crate::enums::ShiftType;

/// One attendance shift. Open while `clock_out_time` is unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffAttendance {
    pub id: String,
    pub staff_id: String,
    pub clock_in_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_time: Option<DateTime<Utc>>,
    pub shift_type: ShiftType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub date: NaiveDate,
}

impl StaffAttendance {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.clock_out_time.is_none()
    }
}
