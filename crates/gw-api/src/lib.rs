//! # gw-api
//!
//! HTTP client for the Guardwise platform's staff endpoints.
//!
//! [`StaffApi`] is the seam the session layer talks through; [`PlatformClient`]
//! implements it over `reqwest`. Endpoints:
//! - `POST /staff/login`
//! - `GET  /staff/attendance/status/{staffId}`
//! - `POST /staff/attendance/clock-in` / `clock-out`
//! - `GET  /conveyance/pending`, `PUT /conveyance/{id}/respond`
//! - `GET  /reports/field?staffId=`, `POST /reports/field`
//!
//! The adapter never retries; every failure surfaces as an [`ApiError`].
//! With the `testing` feature, [`testing::FakeStaffApi`] provides an in-memory
//! platform for downstream tests.

pub mod attendance;
pub mod auth;
pub mod conveyance;
pub mod reports;
#[cfg(feature = "testing")]
pub mod testing;

mod error;
mod http;

pub use attendance::{ClockInReceipt, ClockInRequest};
pub use conveyance::RespondRequest;
pub use error::ApiError;
pub use reports::NewFieldReport;

use std::future::Future;

use gw_config::ApiConfig;
use gw_core::{ConveyanceRequest, FieldReport, Staff, StaffAttendance};

// ── Trait ──────────────────────────────────────────────────────────

/// The platform operations the staff client depends on.
///
/// Futures are `Send` so poll loops can run them on spawned tasks.
pub trait StaffApi: Send + Sync {
    /// Exchange credentials for the staff identity.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Staff, ApiError>> + Send;

    /// The server's view of the staff member's current attendance, if any.
    fn attendance_status(
        &self,
        staff_id: &str,
    ) -> impl Future<Output = Result<Option<StaffAttendance>, ApiError>> + Send;

    fn clock_in(
        &self,
        request: &ClockInRequest,
    ) -> impl Future<Output = Result<ClockInReceipt, ApiError>> + Send;

    fn clock_out(&self, staff_id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Conveyance requests visible to staff. Despite the endpoint name the list
    /// may include already-resolved requests.
    fn pending_conveyance(
        &self,
    ) -> impl Future<Output = Result<Vec<ConveyanceRequest>, ApiError>> + Send;

    /// Approve or deny one request; returns the server's updated object.
    fn respond_conveyance(
        &self,
        request_id: &str,
        response: &RespondRequest,
    ) -> impl Future<Output = Result<ConveyanceRequest, ApiError>> + Send;

    fn field_reports(
        &self,
        staff_id: &str,
    ) -> impl Future<Output = Result<Vec<FieldReport>, ApiError>> + Send;

    fn submit_field_report(
        &self,
        report: &NewFieldReport,
    ) -> impl Future<Output = Result<FieldReport, ApiError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// `reqwest`-backed [`StaffApi`]. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to
    /// build (for example when no TLS backend can be initialized).
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl StaffApi for PlatformClient {
    async fn login(&self, email: &str, password: &str) -> Result<Staff, ApiError> {
        self.staff_login(email, password).await
    }

    async fn attendance_status(
        &self,
        staff_id: &str,
    ) -> Result<Option<StaffAttendance>, ApiError> {
        self.get_attendance_status(staff_id).await
    }

    async fn clock_in(&self, request: &ClockInRequest) -> Result<ClockInReceipt, ApiError> {
        self.post_clock_in(request).await
    }

    async fn clock_out(&self, staff_id: &str) -> Result<(), ApiError> {
        self.post_clock_out(staff_id).await
    }

    async fn pending_conveyance(&self) -> Result<Vec<ConveyanceRequest>, ApiError> {
        self.get_pending_conveyance().await
    }

    async fn respond_conveyance(
        &self,
        request_id: &str,
        response: &RespondRequest,
    ) -> Result<ConveyanceRequest, ApiError> {
        self.put_conveyance_response(request_id, response).await
    }

    async fn field_reports(&self, staff_id: &str) -> Result<Vec<FieldReport>, ApiError> {
        self.get_field_reports(staff_id).await
    }

    async fn submit_field_report(&self, report: &NewFieldReport) -> Result<FieldReport, ApiError> {
        self.post_field_report(report).await
    }
}
