//! At-a-glance summary for the logged-in staff member.

use chrono::{DateTime, Utc};
use gw_api::{ApiError, StaffApi};
use gw_core::ShiftType;
use serde::Serialize;

use crate::error::SessionError;
use crate::location::LocationProvider;
use crate::session::StaffSession;
use crate::storage::SessionStorage;

const DEFAULT_AREA: &str = "Field Operations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub staff_name: String,
    pub first_name: String,
    pub assigned_area: String,
    pub on_duty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    pub pending_conveyance: usize,
    pub reports_filed: usize,
}

impl DashboardSummary {
    /// Gather the summary. The two counts are fetched concurrently; a failed
    /// count is logged and shown as zero.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when no staff member is logged in.
    pub async fn load<A, S, L>(
        session: &StaffSession<A, S, L>,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError>
    where
        A: StaffApi,
        S: SessionStorage,
        L: LocationProvider,
    {
        let staff = session.require_staff()?;
        let api = session.api();

        let (conveyance, reports) =
            tokio::join!(api.pending_conveyance(), api.field_reports(&staff.id));

        let count_or_log = |result: Result<usize, ApiError>, what: &str| -> usize {
            result.unwrap_or_else(|error| {
                tracing::warn!(what, %error, "dashboard count unavailable");
                0
            })
        };
        let pending_conveyance = count_or_log(
            conveyance.map(|list| list.iter().filter(|r| r.is_pending()).count()),
            "pending conveyance",
        );
        let reports_filed = count_or_log(reports.map(|list| list.len()), "field reports");

        let attendance = session.attendance().filter(|a| a.is_open());
        Ok(Self {
            staff_name: staff.name.clone(),
            first_name: staff.first_name().to_string(),
            assigned_area: staff
                .assigned_area
                .clone()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AREA.to_string()),
            on_duty: attendance.is_some(),
            shift_type: attendance.map(|a| a.shift_type),
            elapsed: session.elapsed_at(now),
            pending_conveyance,
            reports_filed,
        })
    }
}
