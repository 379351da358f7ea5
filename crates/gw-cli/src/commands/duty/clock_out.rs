use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Clocking out...");
    let result = ctx.session.clock_out().await;
    spinner.settle(&result, "clock-out failed");
    output(&result?, flags.format)
}
