//! In-memory platform double for tests.
//!
//! [`FakeStaffApi`] behaves like a small platform server: it checks
//! credentials, issues attendance ids, resolves conveyance requests and stores
//! field reports. Every call is recorded, failures can be scripted per
//! endpoint, and an optional latency makes overlap observable under
//! `tokio::time::pause`.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use gw_core::{
    ConveyanceRequest, FieldReport, Staff, StaffAttendance,
};

use crate::{ApiError, ClockInReceipt, ClockInRequest, NewFieldReport, RespondRequest, StaffApi};

/// Which platform endpoint a call hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    AttendanceStatus,
    ClockIn,
    ClockOut,
    PendingConveyance,
    RespondConveyance,
    FieldReports,
    SubmitFieldReport,
}

/// A recorded call with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login { email: String },
    AttendanceStatus { staff_id: String },
    ClockIn(ClockInRequest),
    ClockOut { staff_id: String },
    PendingConveyance,
    RespondConveyance {
        request_id: String,
        response: RespondRequest,
    },
    FieldReports { staff_id: String },
    SubmitFieldReport(NewFieldReport),
}

impl Call {
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Login { .. } => Endpoint::Login,
            Self::AttendanceStatus { .. } => Endpoint::AttendanceStatus,
            Self::ClockIn(_) => Endpoint::ClockIn,
            Self::ClockOut { .. } => Endpoint::ClockOut,
            Self::PendingConveyance => Endpoint::PendingConveyance,
            Self::RespondConveyance { .. } => Endpoint::RespondConveyance,
            Self::FieldReports { .. } => Endpoint::FieldReports,
            Self::SubmitFieldReport(_) => Endpoint::SubmitFieldReport,
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    accounts: Vec<(String, String, Staff)>,
    attendance: Option<StaffAttendance>,
    clock_in_time: Option<DateTime<Utc>>,
    conveyance: Vec<ConveyanceRequest>,
    reports: Vec<FieldReport>,
    failures: HashSet<Endpoint>,
    offline: bool,
    latency: Option<Duration>,
    calls: Vec<Call>,
    in_flight: usize,
    max_in_flight: usize,
    next_id: u32,
}

impl FakeState {
    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

fn unavailable() -> ApiError {
    ApiError::Api {
        status: 503,
        message: "service unavailable".to_string(),
    }
}

fn status(status: u16, message: &str) -> ApiError {
    ApiError::Api {
        status,
        message: message.to_string(),
    }
}

/// Scriptable in-memory [`StaffApi`]. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeStaffApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStaffApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register credentials that log in as `staff`.
    #[must_use]
    pub fn with_account(self, email: &str, password: &str, staff: Staff) -> Self {
        self.lock()
            .accounts
            .push((email.to_string(), password.to_string(), staff));
        self
    }

    #[must_use]
    pub fn with_conveyance(self, requests: Vec<ConveyanceRequest>) -> Self {
        self.lock().conveyance = requests;
        self
    }

    /// Seed stored reports, newest first.
    #[must_use]
    pub fn with_reports(self, reports: Vec<FieldReport>) -> Self {
        self.lock().reports = reports;
        self
    }

    /// Delay every response by `latency` (use with a paused tokio clock).
    #[must_use]
    pub fn with_latency(self, latency: Duration) -> Self {
        self.lock().latency = Some(latency);
        self
    }

    /// Timestamp the server stamps on subsequent clock-ins (defaults to now).
    pub fn set_clock_in_time(&self, at: DateTime<Utc>) {
        self.lock().clock_in_time = Some(at);
    }

    /// Replace the server's attendance record, e.g. a shift closed elsewhere.
    pub fn set_server_attendance(&self, attendance: Option<StaffAttendance>) {
        self.lock().attendance = attendance;
    }

    #[must_use]
    pub fn server_attendance(&self) -> Option<StaffAttendance> {
        self.lock().attendance.clone()
    }

    #[must_use]
    pub fn server_conveyance(&self) -> Vec<ConveyanceRequest> {
        self.lock().conveyance.clone()
    }

    /// Make the next call to `endpoint` fail with a 503.
    pub fn fail_next(&self, endpoint: Endpoint) {
        self.lock().failures.insert(endpoint);
    }

    /// Make every call fail with a 503 until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    /// Highest number of calls that were awaiting a response at once.
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        self.lock().max_in_flight
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake platform state poisoned")
    }

    async fn exchange<T>(
        &self,
        call: Call,
        handle: impl FnOnce(&mut FakeState) -> Result<T, ApiError> + Send,
    ) -> Result<T, ApiError> {
        let endpoint = call.endpoint();
        let latency = {
            let mut state = self.lock();
            state.calls.push(call);
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
            state.latency
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        let mut state = self.lock();
        state.in_flight -= 1;
        if state.failures.remove(&endpoint) || state.offline {
            return Err(unavailable());
        }
        handle(&mut state)
    }
}

impl StaffApi for FakeStaffApi {
    async fn login(&self, email: &str, password: &str) -> Result<Staff, ApiError> {
        let call = Call::Login {
            email: email.to_string(),
        };
        self.exchange(call, |state| {
            state
                .accounts
                .iter()
                .find(|(e, p, _)| e.eq_ignore_ascii_case(email) && p == password)
                .map(|(_, _, staff)| staff.clone())
                .ok_or_else(|| ApiError::Rejected("Invalid credentials".to_string()))
        })
        .await
    }

    async fn attendance_status(
        &self,
        staff_id: &str,
    ) -> Result<Option<StaffAttendance>, ApiError> {
        let call = Call::AttendanceStatus {
            staff_id: staff_id.to_string(),
        };
        self.exchange(call, |state| {
            Ok(state
                .attendance
                .clone()
                .filter(|a| a.staff_id == staff_id))
        })
        .await
    }

    async fn clock_in(&self, request: &ClockInRequest) -> Result<ClockInReceipt, ApiError> {
        self.exchange(Call::ClockIn(request.clone()), |state| {
            if state
                .attendance
                .as_ref()
                .is_some_and(|a| a.staff_id == request.staff_id && a.is_open())
            {
                return Err(status(409, "Already clocked in"));
            }
            let clock_in_time = state.clock_in_time.unwrap_or_else(Utc::now);
            let id = state.issue_id("att");
            state.attendance = Some(StaffAttendance {
                id: id.clone(),
                staff_id: request.staff_id.clone(),
                clock_in_time,
                clock_out_time: None,
                shift_type: request.shift_type,
                location: request.location(),
                date: clock_in_time.date_naive(),
            });
            Ok(ClockInReceipt { id, clock_in_time })
        })
        .await
    }

    async fn clock_out(&self, staff_id: &str) -> Result<(), ApiError> {
        let call = Call::ClockOut {
            staff_id: staff_id.to_string(),
        };
        self.exchange(call, |state| match state.attendance.as_mut() {
            Some(record) if record.staff_id == staff_id && record.is_open() => {
                record.clock_out_time = Some(Utc::now().max(record.clock_in_time));
                Ok(())
            }
            _ => Err(status(400, "Not clocked in")),
        })
        .await
    }

    async fn pending_conveyance(&self) -> Result<Vec<ConveyanceRequest>, ApiError> {
        self.exchange(Call::PendingConveyance, |state| Ok(state.conveyance.clone()))
            .await
    }

    async fn respond_conveyance(
        &self,
        request_id: &str,
        response: &RespondRequest,
    ) -> Result<ConveyanceRequest, ApiError> {
        let call = Call::RespondConveyance {
            request_id: request_id.to_string(),
            response: response.clone(),
        };
        self.exchange(call, |state| {
            let request = state
                .conveyance
                .iter_mut()
                .find(|r| r.id == request_id)
                .ok_or_else(|| status(404, "Conveyance request not found"))?;
            if !request.is_pending() {
                return Err(status(409, "Request already processed"));
            }
            request.status = response.action.resulting_status();
            request.responded_at = Some(Utc::now());
            request.responded_by = Some(response.staff_id.clone());
            request.staff_notes.clone_from(&response.notes);
            Ok(request.clone())
        })
        .await
    }

    async fn field_reports(&self, staff_id: &str) -> Result<Vec<FieldReport>, ApiError> {
        let call = Call::FieldReports {
            staff_id: staff_id.to_string(),
        };
        self.exchange(call, |state| {
            Ok(state
                .reports
                .iter()
                .filter(|r| r.staff_id == staff_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn submit_field_report(&self, report: &NewFieldReport) -> Result<FieldReport, ApiError> {
        self.exchange(Call::SubmitFieldReport(report.clone()), |state| {
            let created = FieldReport {
                id: state.issue_id("rpt"),
                staff_id: report.staff_id.clone(),
                staff_name: report.staff_name.clone(),
                report_type: report.report_type,
                title: report.title.clone(),
                description: report.description.clone(),
                media_url: None,
                media_type: report.media_type,
                site_id: None,
                site_name: None,
                location: report.location,
                created_at: Utc::now(),
                tags: None,
            };
            state.reports.insert(0, created.clone());
            Ok(created)
        })
        .await
    }
}
