use sig_core::{Action, MemberDescription};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `sig2moq schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.target {
        SchemaTarget::Member => schemars::schema_for!(MemberDescription),
        SchemaTarget::Action => schemars::schema_for!(Action),
    };
    output(&schema, flags.format)
}
