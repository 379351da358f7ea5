//! Conveyance request endpoints.

use gw_core::{ConveyanceAction, ConveyanceRequest};
use serde::Serialize;

use crate::{
    PlatformClient,
    error::ApiError,
    http::{check_response, decode_json},
};

/// Body of `PUT /conveyance/{id}/respond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    pub action: ConveyanceAction,
    pub staff_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RespondRequest {
    /// Build a response. Blank notes are dropped rather than sent empty.
    #[must_use]
    pub fn new(action: ConveyanceAction, staff_id: impl Into<String>, notes: Option<&str>) -> Self {
        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(ToString::to_string);
        Self {
            action,
            staff_id: staff_id.into(),
            notes,
        }
    }
}

impl PlatformClient {
    /// `GET /conveyance/pending`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn get_pending_conveyance(&self) -> Result<Vec<ConveyanceRequest>, ApiError> {
        let resp = check_response(self.http.get(self.url("/conveyance/pending")).send().await?)
            .await?;
        decode_json(resp).await
    }

    /// `PUT /conveyance/{id}/respond`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn put_conveyance_response(
        &self,
        request_id: &str,
        response: &RespondRequest,
    ) -> Result<ConveyanceRequest, ApiError> {
        tracing::debug!(request_id, action = %response.action, "respond to conveyance request");
        let url = self.url(&format!(
            "/conveyance/{}/respond",
            urlencoding::encode(request_id)
        ));
        let resp = self.http.put(&url).json(response).send().await?;
        decode_json(check_response(resp).await?).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_notes_are_omitted() {
        let request = RespondRequest::new(ConveyanceAction::Approve, "stf-1", Some("   "));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "approve", "staffId": "stf-1"})
        );
    }

    #[test]
    fn notes_are_trimmed() {
        let request = RespondRequest::new(ConveyanceAction::Deny, "stf-1", Some(" short-staffed \n"));
        assert_eq!(request.notes.as_deref(), Some("short-staffed"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "deny");
        assert_eq!(json["notes"], "short-staffed");
    }
}
