use sig_config::Sig2MoqConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: &Sig2MoqConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Members(args) => commands::members::handle(&args, flags),
        Commands::Actions(args) => commands::actions::handle(&args, flags),
        Commands::Generate(args) => commands::generate::handle(&args, config, flags),
        Commands::Render(args) => commands::render::handle(&args, config, flags),
        Commands::Config => commands::config::handle(config),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
