use gw_core::ShiftType;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct ShiftRow {
    shift: ShiftType,
    label: &'static str,
    hours: &'static str,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ShiftType::ALL
        .iter()
        .map(|&shift| ShiftRow {
            shift,
            label: shift.label(),
            hours: shift.hours(),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
