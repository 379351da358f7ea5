use clap::{Args, Subcommand};

/// Attendance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DutyCommands {
    /// Show the current shift.
    Status(DutyStatusArgs),
    /// Start a shift.
    ClockIn(ClockInArgs),
    /// End the current shift.
    ClockOut,
    /// Live shift clock until Ctrl-C.
    Watch,
    /// List the available shifts.
    Shifts,
}

#[derive(Clone, Debug, Args)]
pub struct DutyStatusArgs {
    /// Reconcile with the platform before reporting.
    #[arg(long)]
    pub sync: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ClockInArgs {
    /// Shift: morning, general, night.
    #[arg(long, default_value = "general")]
    pub shift: String,
    /// Device latitude, overriding configuration.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Device longitude, overriding configuration.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}
