//! Helpers shared by the selection and delivery commands.

use anyhow::Context;
use sig_config::Sig2MoqConfig;
use sig_core::Action;
use sig_core::responses::{ActionSummary, GenerateResponse};
use sig_parser::Position;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SelectionArgs;
use crate::delivery;
use crate::output::output;

pub fn position(args: &SelectionArgs) -> Position {
    Position {
        line: args.line as usize,
        column: args.column.map(|column| column as usize),
    }
}

/// Read the selected file and resolve the actions offered at the position.
pub fn actions_at_selection(args: &SelectionArgs) -> anyhow::Result<Vec<Action>> {
    let source = sig_parser::read_source(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    sig_parser::actions_at(&source, position(args))
        .with_context(|| format!("invalid selection in {}", args.file.display()))
}

pub fn action_summary(action: &Action) -> ActionSummary {
    ActionSummary {
        kind: action.kind,
        title: action.title.clone(),
        member: action.member.name().to_string(),
        signature: action.member.signature(),
    }
}

/// Generate, deliver, and report. Stdout delivery is the whole output.
pub fn deliver(
    action: &Action,
    config: &Sig2MoqConfig,
    force_stdout: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = delivery::effective_target(config.delivery.target, force_stdout);
    let mut sink = delivery::sink_for(target);
    let snippet = sig_engine::run_action(action, &config.snippet_style(), sink.as_mut())
        .with_context(|| format!("failed to deliver setup for '{}'", action.member.name()))?;

    if target == sig_config::DeliveryTarget::Stdout || flags.quiet {
        return Ok(());
    }

    output(
        &GenerateResponse {
            action: action.kind,
            member: action.member.name().to_string(),
            delivered_to: target.to_string(),
            snippet,
        },
        flags.format,
    )
}
