//! The single source of truth for "who is logged in" and "is a shift open".
//!
//! Every mutation writes through to [`SessionStorage`] so a restarted client
//! restores the same session. Persistence failures are logged and never undo
//! an in-memory change: the server already accepted the action.

use gw_api::{ApiError, StaffApi};
use gw_core::{Staff, StaffAttendance, StaffStatus};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SessionError;
use crate::storage::{ATTENDANCE_KEY, STAFF_KEY, SessionStorage};

#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    staff: Option<Staff>,
    attendance: Option<StaffAttendance>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// An empty session over `storage`, ignoring anything already stored.
    pub const fn empty(storage: S) -> Self {
        Self {
            storage,
            staff: None,
            attendance: None,
        }
    }

    /// Repopulate the session from durable storage.
    ///
    /// Absent entries are an empty session. Unreadable or corrupt entries are
    /// logged and treated as absent. An attendance record without a staff
    /// record is discarded.
    pub fn restore(storage: S) -> Self {
        let staff: Option<Staff> = load_entry(&storage, STAFF_KEY);
        let mut attendance: Option<StaffAttendance> = load_entry(&storage, ATTENDANCE_KEY);

        if staff.is_none() && attendance.take().is_some() {
            tracing::warn!("discarding stored attendance without a logged-in staff member");
            remove_entry(&storage, ATTENDANCE_KEY);
        }

        tracing::debug!(
            logged_in = staff.is_some(),
            on_duty = attendance.as_ref().is_some_and(StaffAttendance::is_open),
            "session restored"
        );
        Self {
            storage,
            staff,
            attendance,
        }
    }

    /// Check credentials with the platform and start a session.
    ///
    /// The stored staff record is always marked `online`. A different staff
    /// member logging in drops the previous member's attendance.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] when the platform rejects
    /// the credentials and [`SessionError::Api`] for transport or server
    /// failures. The session is unchanged on error.
    pub async fn login<A: StaffApi>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
    ) -> Result<Staff, SessionError> {
        let mut staff = api.login(email.trim(), password).await.map_err(|e| match e {
            ApiError::Rejected(message) => SessionError::InvalidCredentials(message),
            other => SessionError::Api(other),
        })?;
        staff.status = StaffStatus::Online;

        if self.staff.as_ref().is_some_and(|s| s.id != staff.id) {
            self.set_attendance(None);
        }
        save_entry(&self.storage, STAFF_KEY, &staff);
        self.staff = Some(staff.clone());
        tracing::debug!(staff_id = %staff.id, "logged in");
        Ok(staff)
    }

    /// End the session locally. Always succeeds; no network involved.
    pub fn logout(&mut self) {
        if let Some(staff) = self.staff.take() {
            tracing::debug!(staff_id = %staff.id, "logged out");
        }
        self.attendance = None;
        remove_entry(&self.storage, STAFF_KEY);
        remove_entry(&self.storage, ATTENDANCE_KEY);
    }

    /// Replace the attendance record wholesale and persist (or clear) it.
    pub fn set_attendance(&mut self, attendance: Option<StaffAttendance>) {
        match &attendance {
            Some(record) => save_entry(&self.storage, ATTENDANCE_KEY, record),
            None => remove_entry(&self.storage, ATTENDANCE_KEY),
        }
        self.attendance = attendance;
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn staff(&self) -> Option<&Staff> {
        self.staff.as_ref()
    }

    #[must_use]
    pub const fn attendance(&self) -> Option<&StaffAttendance> {
        self.attendance.as_ref()
    }

    /// Attendance present and not yet clocked out.
    #[must_use]
    pub fn is_on_duty(&self) -> bool {
        self.attendance.as_ref().is_some_and(StaffAttendance::is_open)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when no staff member is logged in.
    pub fn require_staff(&self) -> Result<&Staff, SessionError> {
        self.staff.as_ref().ok_or(SessionError::NotLoggedIn)
    }
}

fn load_entry<T: DeserializeOwned>(storage: &impl SessionStorage, key: &str) -> Option<T> {
    let raw = match storage.load(key) {
        Ok(raw) => raw?,
        Err(error) => {
            tracing::warn!(key, %error, "unreadable session entry; treating as absent");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(key, %error, "corrupt session entry; treating as absent");
            None
        }
    }
}

fn save_entry<T: Serialize>(storage: &impl SessionStorage, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(error) => {
            tracing::warn!(key, %error, "failed to encode session entry");
            return;
        }
    };
    if let Err(error) = storage.save(key, &json) {
        tracing::warn!(key, %error, "failed to persist session entry");
    }
}

fn remove_entry(storage: &impl SessionStorage, key: &str) {
    if let Err(error) = storage.remove(key) {
        tracing::warn!(key, %error, "failed to remove session entry");
    }
}
