use gw_core::ConveyanceAction;
use gw_session::ConveyanceBoard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::conveyance::ConveyanceRespondArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Approve or deny one request. The list is fetched first so the request's
/// current status is checked before anything is sent.
pub async fn handle(
    args: &ConveyanceRespondArgs,
    action: ConveyanceAction,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let staff = ctx.session.require_staff()?.clone();
    let api = ctx.session.api();
    let mut board = ConveyanceBoard::new();

    let spinner = Progress::spinner("Fetching conveyance requests...");
    if let Err(error) = board.refresh(api).await {
        spinner.finish_err("conveyance list unavailable");
        return Err(error.into());
    }

    spinner.set_message(&format!("Sending {action} for {}...", args.id));
    let result = board
        .respond(api, &staff, &args.id, action, args.notes.as_deref())
        .await;
    spinner.settle(&result, "response not recorded");
    output(result?, flags.format)
}
