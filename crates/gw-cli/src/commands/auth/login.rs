use gw_core::StaffRole;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    staff_id: String,
    name: String,
    employee_id: String,
    role: StaffRole,
    assigned_area: Option<String>,
    on_duty: bool,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = args
        .password
        .as_deref()
        .filter(|password| !password.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("auth login: no password given, pass --password or set GUARDWISE_PASSWORD")
        })?;

    let spinner = Progress::spinner("Signing in...");
    let result = ctx.session.login(&args.email, password).await;
    spinner.settle(&result, "sign-in failed");
    let staff = result?;

    // Pick up a shift left open on another device.
    if let Err(error) = ctx.session.sync_attendance().await {
        tracing::warn!(%error, "attendance sync after login failed");
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            staff_id: staff.id,
            name: staff.name,
            employee_id: staff.employee_id,
            role: staff.role,
            assigned_area: staff.assigned_area,
            on_duty: ctx.session.is_on_duty(),
        },
        flags.format,
    )
}
