use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use sig_core::{AccessorKind, ActionKind};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the methods and properties declared in a C# file.
    Members(MembersArgs),
    /// List the actions offered at a position in a C# file.
    Actions(SelectionArgs),
    /// Run the action at a position and deliver the setup snippet.
    Generate(GenerateArgs),
    /// Generate a snippet from a JSON member description.
    Render(RenderArgs),
    /// Print the JSON schema for member descriptions or actions.
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct MembersArgs {
    /// C# source file.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SelectionArgs {
    /// C# source file.
    pub file: PathBuf,

    /// 1-based line of the selection.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,

    /// 1-based column (defaults to the first non-blank character).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub column: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Which offered action to run (defaults to the getter on properties).
    #[arg(short, long)]
    pub action: Option<ActionChoice>,

    /// Print the snippet instead of copying it to the clipboard.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// JSON file holding one member description (`-` for stdin).
    pub description: PathBuf,

    /// Accessor to generate for a property (defaults to get).
    #[arg(long)]
    pub accessor: Option<AccessorChoice>,

    /// Print the snippet instead of copying it to the clipboard.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which type to describe.
    #[arg(default_value = "member")]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ActionChoice {
    Method,
    Getter,
    Setter,
}

impl From<ActionChoice> for ActionKind {
    fn from(choice: ActionChoice) -> Self {
        match choice {
            ActionChoice::Method => Self::MethodSetup,
            ActionChoice::Getter => Self::PropertyGetter,
            ActionChoice::Setter => Self::PropertySetter,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AccessorChoice {
    Get,
    Set,
}

impl From<AccessorChoice> for AccessorKind {
    fn from(choice: AccessorChoice) -> Self {
        match choice {
            AccessorChoice::Get => Self::Get,
            AccessorChoice::Set => Self::Set,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Member,
    Action,
}
