use crate::cli::GlobalFlags;
use crate::cli::root_commands::SelectionArgs;
use crate::commands::shared;
use crate::output::output;

/// Handle `sig2moq actions`. An empty list is a valid answer.
pub fn handle(args: &SelectionArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actions = shared::actions_at_selection(args)?;
    let summaries = actions
        .iter()
        .map(shared::action_summary)
        .collect::<Vec<_>>();
    output(&summaries, flags.format)
}
