use std::io::Write;

use chrono::{DateTime, Utc};
use gw_core::StaffAttendance;
use gw_session::{ElapsedClock, SessionError, clock_ticks, poll_attendance};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::render;

#[derive(Serialize)]
struct WatchTick<'a> {
    at: DateTime<Utc>,
    attendance_id: &'a str,
    elapsed: String,
}

/// Displayed shift time. Readings for one open record never decrease; a
/// different record starts a fresh clock.
#[derive(Debug, Default)]
struct ShiftClock {
    clock: Option<ElapsedClock>,
}

impl ShiftClock {
    fn reading(&mut self, open: Option<&StaffAttendance>, now: DateTime<Utc>) -> Option<String> {
        let Some(open) = open.filter(|a| a.is_open()) else {
            self.clock = None;
            return None;
        };
        if !self.clock.as_ref().is_some_and(|clock| clock.tracks(open)) {
            self.clock = Some(ElapsedClock::start(open));
        }
        self.clock.as_mut().map(|clock| clock.display(now))
    }
}

/// Live shift clock. Ticks locally and re-checks the platform in the
/// background; stops on Ctrl-C or when the shift is closed elsewhere.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let staff_id = ctx.session.require_staff()?.id.clone();
    if !ctx.session.is_on_duty() {
        return Err(SessionError::NotOnDuty.into());
    }

    let mut shift_clock = ShiftClock::default();
    let mut ticks = clock_ticks(ctx.config.polling.clock_tick());
    let mut attendance =
        poll_attendance(ctx.api(), staff_id, ctx.config.polling.attendance_interval());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            Some(now) = ticks.next() => {
                let open = ctx.session.attendance();
                if let (Some(open), Some(elapsed)) = (open, shift_clock.reading(open, now)) {
                    print_tick(&tick_line(open, elapsed, now, flags.format)?, flags.format)?;
                }
            }
            Some(result) = attendance.next() => match result {
                Ok(remote) => {
                    ctx.session.apply_attendance(remote);
                    if !ctx.session.is_on_duty() {
                        tracing::info!("shift closed on the platform");
                        break;
                    }
                }
                Err(error) => tracing::warn!(%error, "attendance check failed"),
            },
            else => break,
        }
    }

    if flags.format == OutputFormat::Table {
        println!();
    }
    ticks.shutdown().await;
    attendance.shutdown().await;
    Ok(())
}

fn tick_line(
    open: &StaffAttendance,
    elapsed: String,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Table {
        return Ok(format!("\r{}  {elapsed}", open.shift_type));
    }
    render(
        &WatchTick {
            at: now,
            attendance_id: &open.id,
            elapsed,
        },
        OutputFormat::Raw,
    )
}

fn print_tick(line: &str, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if format == OutputFormat::Table {
        write!(stdout, "{line}")?;
    } else {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
