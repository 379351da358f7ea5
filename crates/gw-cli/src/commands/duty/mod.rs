mod clock_in;
mod clock_out;
mod shifts;
mod status;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DutyCommands;
use crate::context::AppContext;

/// Handle `gw duty <subcommand>`.
pub async fn handle(
    action: &DutyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DutyCommands::Status(args) => status::handle(args, ctx, flags).await,
        DutyCommands::ClockIn(args) => clock_in::handle(args, ctx, flags).await,
        DutyCommands::ClockOut => clock_out::handle(ctx, flags).await,
        DutyCommands::Watch => watch::handle(ctx, flags).await,
        DutyCommands::Shifts => shifts::handle(flags),
    }
}
