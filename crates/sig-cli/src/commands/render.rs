use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use sig_config::Sig2MoqConfig;
use sig_core::{AccessorKind, Action, ActionKind, MemberDescription};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::commands::shared;

/// Handle `sig2moq render`.
pub fn handle(args: &RenderArgs, config: &Sig2MoqConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_description(&args.description)?;
    let action = action_from_json(&text, args.accessor.map(AccessorKind::from))?;
    shared::deliver(&action, config, args.stdout, flags)
}

fn read_description(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read member description from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Parse and validate a description, then bind the action it asks for.
fn action_from_json(text: &str, accessor: Option<AccessorKind>) -> anyhow::Result<Action> {
    let member: MemberDescription =
        serde_json::from_str(text).context("invalid member description JSON")?;
    member.validate()?;

    let action = match (&member, accessor) {
        (MemberDescription::Method(_), Some(_)) => {
            bail!("--accessor only applies to property descriptions")
        }
        (MemberDescription::Method(_), None) => Action::new(ActionKind::MethodSetup, member)?,
        (MemberDescription::Property(_), accessor) => {
            Action::for_accessor(member, accessor.unwrap_or(AccessorKind::Get))?
        }
    };
    Ok(action)
}
