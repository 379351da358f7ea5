use serde::{Deserialize, Serialize};

use crate::enums::{StaffRole, StaffStatus};

/// Authenticated staff identity, created on login and immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub employee_id: String,
    pub role: StaffRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_area: Option<String>,
    pub status: StaffStatus,
}

impl Staff {
    /// First word of the display name, used for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
