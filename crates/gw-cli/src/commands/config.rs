use gw_config::GwConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::output::output;

/// Handle `gw config`. Runs before the session is restored.
pub fn handle(
    action: &ConfigCommands,
    config: &GwConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => output(config, flags.format),
    }
}
