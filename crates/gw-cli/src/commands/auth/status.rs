use gw_core::{StaffRole, StaffStatus};
use gw_session::DutyState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    staff_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    employee_id: Option<String>,
    role: Option<StaffRole>,
    assigned_area: Option<String>,
    status: Option<StaffStatus>,
    duty: DutyState,
    session_dir: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let staff = ctx.session.staff();
    output(
        &AuthStatusResponse {
            authenticated: staff.is_some(),
            staff_id: staff.map(|s| s.id.clone()),
            name: staff.map(|s| s.name.clone()),
            email: staff.map(|s| s.email.clone()),
            employee_id: staff.map(|s| s.employee_id.clone()),
            role: staff.map(|s| s.role),
            assigned_area: staff.and_then(|s| s.assigned_area.clone()),
            status: staff.map(|s| s.status),
            duty: ctx.session.state(),
            session_dir: ctx.session.store().storage().dir().display().to_string(),
        },
        flags.format,
    )
}
