use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with staff credentials.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show the logged-in staff member.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Staff email address.
    #[arg(long)]
    pub email: String,
    /// Password (prefer the environment variable over the flag).
    #[arg(long, env = "GUARDWISE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
