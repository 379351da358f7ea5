use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    logged_out: bool,
    staff_id: Option<String>,
    left_shift_open: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let staff_id = ctx.session.staff().map(|staff| staff.id.clone());
    let left_shift_open = ctx.session.is_on_duty();
    if left_shift_open {
        tracing::warn!("logging out with a shift still open on the platform");
    }
    ctx.session.logout();

    output(
        &AuthLogoutResponse {
            logged_out: staff_id.is_some(),
            staff_id,
            left_shift_open,
        },
        flags.format,
    )
}
