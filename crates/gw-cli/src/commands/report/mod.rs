mod list;
mod submit;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

/// Handle `gw report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::List => list::handle(ctx, flags).await,
        ReportCommands::Submit(args) => submit::handle(args, ctx, flags).await,
    }
}
