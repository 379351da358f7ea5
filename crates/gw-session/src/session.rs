//! The staff session context: one object owning the store, the platform
//! client and the location source, through which every duty action flows.

use std::time::Duration;

use chrono::{DateTime, Utc};
use gw_api::{ClockInRequest, StaffApi};
use gw_config::LocationConfig;
use gw_core::clock::{format_elapsed, format_hms};
use gw_core::{GeoPoint, ShiftType, Staff, StaffAttendance};
use serde::Serialize;

use crate::duty::DutyState;
use crate::error::SessionError;
use crate::location::{LocationProvider, locate_within};
use crate::storage::SessionStorage;
use crate::store::SessionStore;

/// A shift that was just closed.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedShift {
    pub attendance: StaffAttendance,
    pub elapsed_secs: u64,
    pub elapsed: String,
}

pub struct StaffSession<A, S, L> {
    api: A,
    store: SessionStore<S>,
    location: L,
    clock_in_wait: Duration,
    report_wait: Duration,
    state: DutyState,
}

impl<A, S, L> StaffSession<A, S, L>
where
    A: StaffApi,
    S: SessionStorage,
    L: LocationProvider,
{
    /// Wrap a (usually restored) store. The duty state follows the stored
    /// attendance.
    pub fn new(api: A, store: SessionStore<S>, location: L, config: &LocationConfig) -> Self {
        let state = if store.is_on_duty() {
            DutyState::OnDuty
        } else {
            DutyState::OffDuty
        };
        Self {
            api,
            store,
            location,
            clock_in_wait: config.clock_in_timeout(),
            report_wait: config.report_timeout(),
            state,
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub const fn state(&self) -> DutyState {
        self.state
    }

    pub const fn staff(&self) -> Option<&Staff> {
        self.store.staff()
    }

    pub const fn attendance(&self) -> Option<&StaffAttendance> {
        self.store.attendance()
    }

    pub fn is_on_duty(&self) -> bool {
        self.store.is_on_duty()
    }

    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when no staff member is logged in.
    pub fn require_staff(&self) -> Result<&Staff, SessionError> {
        self.store.require_staff()
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Staff, SessionError> {
        let staff = self.store.login(&self.api, email, password).await?;
        self.state = if self.store.is_on_duty() {
            DutyState::OnDuty
        } else {
            DutyState::OffDuty
        };
        Ok(staff)
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.state = DutyState::OffDuty;
    }

    /// Open a shift.
    ///
    /// The position is looked up first with a bounded wait and omitted if it
    /// cannot be had. The local record is built from the server's id and
    /// clock-in time and stored only once the platform confirms.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoggedIn`], [`SessionError::AlreadyOnDuty`], or
    /// [`SessionError::Api`] when the platform call fails (the session stays
    /// off duty).
    pub async fn clock_in(&mut self, shift: ShiftType) -> Result<StaffAttendance, SessionError> {
        let staff_id = self.store.require_staff()?.id.clone();
        if self.store.is_on_duty() {
            return Err(SessionError::AlreadyOnDuty);
        }
        self.state = self.state.transition(DutyState::ClockingIn, &staff_id)?;

        let location = locate_within(&self.location, self.clock_in_wait).await;
        let request = ClockInRequest::new(staff_id.clone(), shift, location);
        match self.api.clock_in(&request).await {
            Ok(receipt) => {
                let attendance = StaffAttendance {
                    id: receipt.id,
                    staff_id,
                    clock_in_time: receipt.clock_in_time,
                    clock_out_time: None,
                    shift_type: shift,
                    location,
                    date: Utc::now().date_naive(),
                };
                self.store.set_attendance(Some(attendance.clone()));
                self.state = DutyState::OnDuty;
                tracing::debug!(attendance_id = %attendance.id, %shift, "clocked in");
                Ok(attendance)
            }
            Err(error) => {
                self.state = DutyState::OffDuty;
                tracing::debug!(%error, "clock-in failed");
                Err(error.into())
            }
        }
    }

    /// Close the open shift and report how long it ran.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoggedIn`], [`SessionError::NotOnDuty`], or
    /// [`SessionError::Api`] when the platform call fails (the shift stays
    /// open).
    pub async fn clock_out(&mut self) -> Result<ClosedShift, SessionError> {
        let staff_id = self.store.require_staff()?.id.clone();
        let Some(open) = self.store.attendance().filter(|a| a.is_open()).cloned() else {
            return Err(SessionError::NotOnDuty);
        };
        self.state = self.state.transition(DutyState::ClockingOut, &staff_id)?;

        if let Err(error) = self.api.clock_out(&staff_id).await {
            self.state = DutyState::OnDuty;
            tracing::debug!(%error, "clock-out failed");
            return Err(error.into());
        }

        let now = Utc::now();
        let elapsed_secs = (now - open.clock_in_time).num_seconds().max(0).unsigned_abs();
        self.store.set_attendance(None);
        self.state = DutyState::OffDuty;
        tracing::debug!(attendance_id = %open.id, elapsed_secs, "clocked out");
        Ok(ClosedShift {
            attendance: StaffAttendance {
                clock_out_time: Some(now),
                ..open
            },
            elapsed_secs,
            elapsed: format_hms(elapsed_secs),
        })
    }

    /// Reconcile local attendance with the platform's view.
    ///
    /// An open server record replaces the local one; `null` or a closed
    /// record clears it.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoggedIn`] or [`SessionError::Api`]; local state is
    /// unchanged on error.
    pub async fn sync_attendance(&mut self) -> Result<Option<StaffAttendance>, SessionError> {
        let staff_id = self.store.require_staff()?.id.clone();
        let remote = self.api.attendance_status(&staff_id).await?;
        self.apply_attendance(remote);
        Ok(self.store.attendance().cloned())
    }

    /// Apply an attendance status fetched elsewhere (e.g. by a poller).
    pub fn apply_attendance(&mut self, remote: Option<StaffAttendance>) {
        let open = remote.filter(StaffAttendance::is_open);
        if open.as_ref() != self.store.attendance() {
            tracing::debug!(
                attendance_id = open.as_ref().map(|a| a.id.as_str()),
                "attendance updated from platform"
            );
        }
        self.state = if open.is_some() {
            DutyState::OnDuty
        } else {
            DutyState::OffDuty
        };
        self.store.set_attendance(open);
    }

    /// Shift clock for the open attendance as of `now`, if on duty.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.store
            .attendance()
            .filter(|a| a.is_open())
            .map(|a| format_elapsed(a.clock_in_time, now))
    }

    /// Best-effort position for a field report, bounded by the report wait.
    pub async fn locate_for_report(&self) -> Option<GeoPoint> {
        locate_within(&self.location, self.report_wait).await
    }
}
