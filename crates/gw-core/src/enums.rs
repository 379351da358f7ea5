//! Status and kind enums for the Guardwise staff client.
//!
//! All enums serialize as `snake_case` strings, matching the platform
//! server's JSON contract. Status enums with a lifecycle provide
//! `allowed_next_states()` so the client can refuse transitions the server
//! would reject anyway.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Role of a staff member on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    FieldOfficer,
    Supervisor,
    Admin,
}

impl StaffRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FieldOfficer => "field_officer",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StaffStatus
// ---------------------------------------------------------------------------

/// Presence status of a staff member.
///
/// The client forces `online` on every successful login; the server owns
/// `on_duty` and `offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Online,
    Offline,
    OnDuty,
}

impl StaffStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::OnDuty => "on_duty",
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShiftType
// ---------------------------------------------------------------------------

/// Shift selected at clock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Morning,
    #[default]
    General,
    Night,
}

impl ShiftType {
    pub const ALL: [Self; 3] = [Self::Morning, Self::General, Self::Night];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::General => "general",
            Self::Night => "night",
        }
    }

    /// Human label shown in shift pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning Shift",
            Self::General => "General Shift",
            Self::Night => "Night Shift",
        }
    }

    /// Nominal working hours for the shift, local time.
    #[must_use]
    pub const fn hours(self) -> &'static str {
        match self {
            Self::Morning => "06:00 - 14:00",
            Self::General => "09:00 - 18:00",
            Self::Night => "22:00 - 06:00",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConveyanceStatus
// ---------------------------------------------------------------------------

/// Status of a guard's conveyance (leave-geofence) request.
///
/// ```text
/// pending → approved
///         → denied
/// ```
///
/// Both terminal states are irreversible from the client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConveyanceStatus {
    Pending,
    Approved,
    Denied,
}

impl ConveyanceStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Denied],
            Self::Approved | Self::Denied => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ConveyanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConveyanceAction
// ---------------------------------------------------------------------------

/// Staff decision on a pending conveyance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConveyanceAction {
    Approve,
    Deny,
}

impl ConveyanceAction {
    /// The status a request should reach once this action is confirmed.
    #[must_use]
    pub const fn resulting_status(self) -> ConveyanceStatus {
        match self {
            Self::Approve => ConveyanceStatus::Approved,
            Self::Deny => ConveyanceStatus::Denied,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for ConveyanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportType / MediaType
// ---------------------------------------------------------------------------

/// Kind of field report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    VoiceNote,
    Video,
    Incident,
}

impl ReportType {
    /// Media a report of this kind must carry, if any.
    #[must_use]
    pub const fn required_media(self) -> Option<MediaType> {
        match self {
            Self::VoiceNote => Some(MediaType::Audio),
            Self::Video => Some(MediaType::Video),
            Self::Incident => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VoiceNote => "voice_note",
            Self::Video => "video",
            Self::Incident => "incident",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media attached to a field report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    /// Capture device backing this media kind.
    #[must_use]
    pub const fn device(self) -> &'static str {
        match self {
            Self::Audio => "microphone",
            Self::Video => "camera",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
