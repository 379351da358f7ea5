//! Field report endpoints.

use gw_core::{FieldReport, GeoPoint, MediaType, ReportType};
use serde::Serialize;

use crate::{
    PlatformClient,
    error::ApiError,
    http::{check_response, decode_json},
};

/// Body of `POST /reports/field`. Media bytes stay on the device; only the
/// kind of attached media is reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFieldReport {
    pub staff_id: String,
    pub staff_name: String,
    pub report_type: ReportType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl PlatformClient {
    /// `GET /reports/field?staffId=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn get_field_reports(&self, staff_id: &str) -> Result<Vec<FieldReport>, ApiError> {
        let url = self.url(&format!(
            "/reports/field?staffId={}",
            urlencoding::encode(staff_id)
        ));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp).await
    }

    /// `POST /reports/field`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn post_field_report(&self, report: &NewFieldReport) -> Result<FieldReport, ApiError> {
        tracing::debug!(staff_id = %report.staff_id, kind = %report.report_type, "submit field report");
        let resp = self
            .http
            .post(self.url("/reports/field"))
            .json(report)
            .send()
            .await?;
        decode_json(check_response(resp).await?).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn incident_report_omits_absent_fields() {
        let report = NewFieldReport {
            staff_id: "stf-204".into(),
            staff_name: "Priya Raman".into(),
            report_type: ReportType::Incident,
            title: "Broken fence panel".into(),
            description: None,
            media_type: None,
            location: None,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "staffId": "stf-204",
                "staffName": "Priya Raman",
                "reportType": "incident",
                "title": "Broken fence panel"
            })
        );
    }

    #[test]
    fn voice_note_carries_media_kind_and_location() {
        let report = NewFieldReport {
            staff_id: "stf-204".into(),
            staff_name: "Priya Raman".into(),
            report_type: ReportType::VoiceNote,
            title: "Gate B lighting".into(),
            description: Some("Two lamps out".into()),
            media_type: Some(MediaType::Audio),
            location: Some(GeoPoint::new(12.95, 77.7)),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reportType"], "voice_note");
        assert_eq!(json["mediaType"], "audio");
        assert_eq!(json["location"], serde_json::json!({"lat": 12.95, "lng": 77.7}));
    }
}
