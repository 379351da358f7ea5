mod list;
mod respond;

use gw_core::ConveyanceAction;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConveyanceCommands;
use crate::context::AppContext;

/// Handle `gw conveyance <subcommand>`.
pub async fn handle(
    action: &ConveyanceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConveyanceCommands::List(args) => list::handle(args, ctx, flags).await,
        ConveyanceCommands::Approve(args) => {
            respond::handle(args, ConveyanceAction::Approve, ctx, flags).await
        }
        ConveyanceCommands::Deny(args) => {
            respond::handle(args, ConveyanceAction::Deny, ctx, flags).await
        }
    }
}
