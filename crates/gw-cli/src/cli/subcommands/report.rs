use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Field report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// List your recent reports.
    List,
    /// File a new report.
    Submit(ReportSubmitArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportSubmitArgs {
    /// Report type: voice-note, video, incident.
    #[arg(long = "type")]
    pub report_type: String,
    /// Short title.
    #[arg(long)]
    pub title: String,
    /// Longer description.
    #[arg(long)]
    pub description: Option<String>,
    /// Recorded audio (voice-note) or video file.
    #[arg(long)]
    pub media: Option<PathBuf>,
}
