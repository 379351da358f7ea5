use chrono::{DateTime, Utc};
use gw_core::{GeoPoint, ShiftType};
use gw_session::DutyState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::duty::DutyStatusArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct DutyStatusResponse {
    staff_id: String,
    duty: DutyState,
    attendance_id: Option<String>,
    shift_type: Option<ShiftType>,
    clock_in_time: Option<DateTime<Utc>>,
    elapsed: Option<String>,
    location: Option<GeoPoint>,
    synced: bool,
}

pub async fn handle(
    args: &DutyStatusArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let staff_id = ctx.session.require_staff()?.id.clone();

    if args.sync {
        let spinner = Progress::spinner("Checking attendance...");
        let result = ctx.session.sync_attendance().await;
        spinner.settle(&result, "attendance sync failed");
        result?;
    }

    let open = ctx.session.attendance().filter(|a| a.is_open());
    output(
        &DutyStatusResponse {
            staff_id,
            duty: ctx.session.state(),
            attendance_id: open.map(|a| a.id.clone()),
            shift_type: open.map(|a| a.shift_type),
            clock_in_time: open.map(|a| a.clock_in_time),
            elapsed: ctx.session.elapsed_at(Utc::now()),
            location: open.and_then(|a| a.location),
            synced: args.sync,
        },
        flags.format,
    )
}
