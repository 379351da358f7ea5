use chrono::Utc;
use gw_session::DashboardSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `gw dashboard`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading dashboard...");
    let summary = DashboardSummary::load(&ctx.session, Utc::now()).await;
    spinner.settle(&summary, "dashboard unavailable");
    output(&summary?, flags.format)
}
