use clap::{Args, Subcommand};

/// Conveyance request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConveyanceCommands {
    /// List requests (pending only unless --all).
    List(ConveyanceListArgs),
    /// Approve a pending request.
    Approve(ConveyanceRespondArgs),
    /// Deny a pending request.
    Deny(ConveyanceRespondArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ConveyanceListArgs {
    /// Include approved and denied requests.
    #[arg(long)]
    pub all: bool,
    /// Keep refreshing until Ctrl-C.
    #[arg(long)]
    pub watch: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ConveyanceRespondArgs {
    /// Request ID.
    pub id: String,
    /// Note recorded with the decision.
    #[arg(long)]
    pub notes: Option<String>,
}
