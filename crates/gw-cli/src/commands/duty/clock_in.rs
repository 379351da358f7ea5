use chrono::{DateTime, Utc};
use gw_core::{GeoPoint, ShiftType};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::duty::ClockInArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct ClockInResponse {
    attendance_id: String,
    shift_type: ShiftType,
    shift: &'static str,
    hours: &'static str,
    clock_in_time: DateTime<Utc>,
    location: Option<GeoPoint>,
}

pub async fn handle(
    args: &ClockInArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let shift = parse_enum::<ShiftType>(&args.shift, "shift")?;

    let spinner = Progress::spinner(&format!("Clocking in for the {}...", shift.label()));
    let result = ctx.session.clock_in(shift).await;
    spinner.settle(&result, "clock-in failed");
    let attendance = result?;

    if attendance.location.is_none() {
        tracing::info!("clocked in without a location");
    }

    output(
        &ClockInResponse {
            attendance_id: attendance.id,
            shift_type: shift,
            shift: shift.label(),
            hours: shift.hours(),
            clock_in_time: attendance.clock_in_time,
            location: attendance.location,
        },
        flags.format,
    )
}
