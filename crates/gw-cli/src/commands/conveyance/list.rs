use chrono::{DateTime, Utc};
use gw_core::ConveyanceRequest;
use gw_core::clock::{format_duration, format_time_ago};
use gw_session::{ConveyanceBoard, poll_conveyance};

use crate::cli::subcommands::conveyance::ConveyanceListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::Progress;

const HEADERS: [&str; 8] = [
    "id", "guard", "site", "reason", "requested", "away", "status", "notes",
];

pub async fn handle(
    args: &ConveyanceListArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.require_staff()?;
    let mut board = ConveyanceBoard::new();

    if !args.watch {
        let spinner = Progress::spinner("Fetching conveyance requests...");
        let result = board.refresh(ctx.session.api()).await;
        spinner.settle(&result, "conveyance list unavailable");
        result?;
        return print_board(&board, args.all, flags.format);
    }

    let mut poll = poll_conveyance(ctx.api(), ctx.config.polling.conveyance_interval());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            Some(result) = poll.next() => match result {
                Ok(requests) => {
                    board.replace(requests);
                    if flags.format == OutputFormat::Table {
                        println!("\n{} pending as of {}", board.pending_count(), Utc::now().format("%H:%M:%S"));
                    }
                    print_board(&board, args.all, flags.format)?;
                }
                Err(error) => tracing::warn!(%error, "conveyance refresh failed, showing last list"),
            },
            else => break,
        }
    }

    poll.shutdown().await;
    Ok(())
}

fn print_board(board: &ConveyanceBoard, all: bool, format: OutputFormat) -> anyhow::Result<()> {
    let shown: Vec<&ConveyanceRequest> = if all {
        board.all().iter().collect()
    } else {
        board.pending().collect()
    };
    let now = Utc::now();
    let rows = shown.iter().map(|request| row(request, now)).collect::<Vec<_>>();
    output_rows(&shown, &HEADERS, &rows, format)
}

fn row(request: &ConveyanceRequest, now: DateTime<Utc>) -> Vec<String> {
    vec![
        request.id.clone(),
        request.guard_name.clone(),
        request.site_name.clone(),
        request.reason.clone(),
        format_time_ago(request.requested_at, now),
        request
            .estimated_duration
            .map_or_else(|| "-".to_string(), |minutes| {
                format_duration(u64::from(minutes) * 60)
            }),
        request.status.to_string(),
        request.staff_notes.clone().unwrap_or_else(|| "-".to_string()),
    ]
}
