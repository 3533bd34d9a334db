use anyhow::Context;
use sig_parser::ExtractedMember;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MembersArgs;
use crate::output::output;

/// Handle `sig2moq members`.
pub fn handle(args: &MembersArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = sig_parser::read_source(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let members = sig_parser::extract_members(&source)
        .with_context(|| format!("failed to extract members from {}", args.file.display()))?;

    let summaries = members
        .iter()
        .map(ExtractedMember::summary)
        .collect::<Vec<_>>();
    output(&summaries, flags.format)
}
