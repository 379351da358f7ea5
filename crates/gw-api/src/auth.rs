//! Staff login.

use gw_core::Staff;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    PlatformClient,
    error::ApiError,
    http::{check_response, decode_json, error_message},
};

const DEFAULT_REJECTION: &str = "Invalid credentials";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    staff: Option<Staff>,
    #[serde(default)]
    error: Option<String>,
}

impl LoginResponse {
    fn into_staff(self) -> Result<Staff, ApiError> {
        match (self.success, self.staff) {
            (true, Some(staff)) => Ok(staff),
            (true, None) => Err(ApiError::Decode(
                "login succeeded without a staff record".to_string(),
            )),
            (false, _) => Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            )),
        }
    }
}

impl PlatformClient {
    /// `POST /staff/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the server refuses the credentials
    /// (401/403, or a 2xx body with `success: false`), and the usual transport,
    /// status and decode errors otherwise.
    pub async fn staff_login(&self, email: &str, password: &str) -> Result<Staff, ApiError> {
        tracing::debug!(email, "staff login");
        let resp = self
            .http
            .post(self.url("/staff/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        if matches!(
            resp.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let body = resp.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                DEFAULT_REJECTION.to_string()
            } else {
                error_message(&body)
            };
            return Err(ApiError::Rejected(message));
        }

        let resp = check_response(resp).await?;
        let body: LoginResponse = decode_json(resp).await?;
        body.into_staff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::decode_body;

    const SUCCESS: &str = r#"{
        "success": true,
        "staff": {
            "id": "stf-204",
            "name": "Priya Raman",
            "email": "priya@guardwise.test",
            "phone": "+91 98450 00000",
            "employeeId": "GW-0204",
            "role": "supervisor",
            "status": "offline"
        }
    }"#;

    #[test]
    fn successful_login_yields_staff() {
        let body: LoginResponse = decode_body(SUCCESS).unwrap();
        let staff = body.into_staff().unwrap();
        assert_eq!(staff.id, "stf-204");
        assert_eq!(staff.employee_id, "GW-0204");
    }

    #[test]
    fn unsuccessful_login_carries_server_message() {
        let body: LoginResponse =
            decode_body(r#"{"success": false, "error": "Account suspended"}"#).unwrap();
        let err = body.into_staff().unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == "Account suspended"));
    }

    #[test]
    fn unsuccessful_login_without_message_uses_default() {
        let body: LoginResponse = decode_body("{}").unwrap();
        let err = body.into_staff().unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == DEFAULT_REJECTION));
    }

    #[test]
    fn success_without_staff_is_a_decode_error() {
        let body: LoginResponse = decode_body(r#"{"success": true}"#).unwrap();
        assert!(matches!(body.into_staff(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn request_serializes_credentials() {
        let json = serde_json::to_value(LoginRequest {
            email: "priya@guardwise.test",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(json["email"], "priya@guardwise.test");
        assert_eq!(json["password"], "hunter2");
    }
}
