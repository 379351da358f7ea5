//! Attendance endpoints: status, clock-in, clock-out.

use chrono::{DateTime, Utc};
use gw_core::{GeoPoint, ShiftType, StaffAttendance};
use serde::{Deserialize, Serialize};

use crate::{
    PlatformClient,
    error::ApiError,
    http::{check_response, decode_json, decode_optional},
};

/// Body of `POST /staff/attendance/clock-in`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInRequest {
    pub staff_id: String,
    pub shift_type: ShiftType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl ClockInRequest {
    #[must_use]
    pub fn new(staff_id: impl Into<String>, shift_type: ShiftType, location: Option<GeoPoint>) -> Self {
        Self {
            staff_id: staff_id.into(),
            shift_type,
            lat: location.map(|p| p.lat),
            lng: location.map(|p| p.lng),
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        self.lat.zip(self.lng).map(|(lat, lng)| GeoPoint::new(lat, lng))
    }
}

/// The server-issued identity of a new attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInReceipt {
    pub id: String,
    pub clock_in_time: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClockOutRequest<'a> {
    staff_id: &'a str,
}

impl PlatformClient {
    /// `GET /staff/attendance/status/{staffId}`. A `null` or empty body means
    /// the server has no attendance for this staff member.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn get_attendance_status(
        &self,
        staff_id: &str,
    ) -> Result<Option<StaffAttendance>, ApiError> {
        let url = self.url(&format!(
            "/staff/attendance/status/{}",
            urlencoding::encode(staff_id)
        ));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_optional(resp).await
    }

    /// `POST /staff/attendance/clock-in`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn post_clock_in(&self, request: &ClockInRequest) -> Result<ClockInReceipt, ApiError> {
        tracing::debug!(staff_id = %request.staff_id, shift = %request.shift_type, "clock in");
        let resp = self
            .http
            .post(self.url("/staff/attendance/clock-in"))
            .json(request)
            .send()
            .await?;
        decode_json(check_response(resp).await?).await
    }

    /// `POST /staff/attendance/clock-out`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn post_clock_out(&self, staff_id: &str) -> Result<(), ApiError> {
        tracing::debug!(staff_id, "clock out");
        let resp = self
            .http
            .post(self.url("/staff/attendance/clock-out"))
            .json(&ClockOutRequest { staff_id })
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
