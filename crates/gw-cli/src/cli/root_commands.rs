use clap::Subcommand;
use gw_core::GeoPoint;

use crate::cli::subcommands::{
    AuthCommands, ConfigCommands, ConveyanceCommands, DutyCommands, ReportCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show who is logged in.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Attendance: clock in, clock out, shift clock.
    Duty {
        #[command(subcommand)]
        action: DutyCommands,
    },
    /// Guard conveyance requests awaiting approval.
    Conveyance {
        #[command(subcommand)]
        action: ConveyanceCommands,
    },
    /// Field reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Overview: shift state, pending approvals, reports filed.
    Dashboard,
    /// Inspect resolved configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

impl Commands {
    /// Device position given on the command line, validated.
    pub fn position_override(&self) -> anyhow::Result<Option<GeoPoint>> {
        let Self::Duty {
            action: DutyCommands::ClockIn(args),
        } = self
        else {
            return Ok(None);
        };
        match (args.lat, args.lng) {
            (Some(lat), Some(lng)) => Ok(Some(GeoPoint::checked(lat, lng)?)),
            _ => Ok(None),
        }
    }
}
