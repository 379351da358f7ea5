//! Duty lifecycle and the live shift clock.

use std::fmt;

use chrono::{DateTime, Utc};
use gw_core::clock::format_hms;
use gw_core::{CoreError, StaffAttendance};
use serde::Serialize;

// ---------------------------------------------------------------------------
// DutyState
// ---------------------------------------------------------------------------

/// Where the staff member is in the attendance cycle.
///
/// ```text
/// off_duty → clocking_in → on_duty → clocking_out → off_duty
///               ↓ (failed)               ↓ (failed)
///            off_duty                  on_duty
/// ```
///
/// The transient states exist only while the remote call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyState {
    OffDuty,
    ClockingIn,
    OnDuty,
    ClockingOut,
}

impl DutyState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::OffDuty => &[Self::ClockingIn],
            Self::ClockingIn => &[Self::OnDuty, Self::OffDuty],
            Self::OnDuty => &[Self::ClockingOut],
            Self::ClockingOut => &[Self::OffDuty, Self::OnDuty],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Move to `next`, or fail naming both ends of the rejected edge.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if `next` is not reachable.
    pub fn transition(self, next: Self, staff_id: &str) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: "duty".to_string(),
                id: staff_id.to_string(),
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OffDuty => "off_duty",
            Self::ClockingIn => "clocking_in",
            Self::OnDuty => "on_duty",
            Self::ClockingOut => "clocking_out",
        }
    }
}

impl fmt::Display for DutyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ElapsedClock
// ---------------------------------------------------------------------------

/// Display clock for one open shift.
///
/// Readings never go backwards for the same clock-in even if the wall clock
/// does; a different attendance record needs a new clock.
#[derive(Debug, Clone)]
pub struct ElapsedClock {
    attendance_id: String,
    clock_in: DateTime<Utc>,
    shown_secs: u64,
}

impl ElapsedClock {
    #[must_use]
    pub fn start(attendance: &StaffAttendance) -> Self {
        Self {
            attendance_id: attendance.id.clone(),
            clock_in: attendance.clock_in_time,
            shown_secs: 0,
        }
    }

    /// Whether this clock is counting `attendance`.
    #[must_use]
    pub fn tracks(&self, attendance: &StaffAttendance) -> bool {
        self.attendance_id == attendance.id && self.clock_in == attendance.clock_in_time
    }

    /// Seconds on duty as of `now`, never less than the previous reading.
    pub fn tick(&mut self, now: DateTime<Utc>) -> u64 {
        let secs = (now - self.clock_in).num_seconds().max(0).unsigned_abs();
        self.shown_secs = self.shown_secs.max(secs);
        self.shown_secs
    }

    /// [`Self::tick`] rendered as `HH:MM:SS`.
    pub fn display(&mut self, now: DateTime<Utc>) -> String {
        format_hms(self.tick(now))
    }

    #[must_use]
    pub const fn clock_in(&self) -> DateTime<Utc> {
        self.clock_in
    }
}
