use chrono::Utc;
use gw_core::clock::format_time_ago;
use gw_session::ReportDesk;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::Progress;

const HEADERS: [&str; 6] = ["id", "type", "title", "media", "site", "filed"];

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let staff = ctx.session.require_staff()?;
    let mut desk = ReportDesk::new();

    let spinner = Progress::spinner("Fetching field reports...");
    let result = desk.load_recent(ctx.session.api(), staff).await;
    spinner.settle(&result, "field reports unavailable");
    let reports = result?;

    let now = Utc::now();
    let rows = reports
        .iter()
        .map(|report| {
            vec![
                report.id.clone(),
                report.report_type.to_string(),
                report.title.clone(),
                report
                    .media_type
                    .map_or_else(|| "-".to_string(), |media| media.to_string()),
                report.site_name.clone().unwrap_or_else(|| "-".to_string()),
                format_time_ago(report.created_at, now),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&reports, &HEADERS, &rows, flags.format)
}
