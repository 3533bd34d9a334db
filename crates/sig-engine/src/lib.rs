//! # sig-engine
//!
//! Turns a member description into a Moq setup snippet.
//!
//! ```text
//! Start -> Classify (parameters or accessor) -> SelectVisibilityShape
//!       -> AssembleBlocks -> Emit
//! ```
//!
//! Generation is a pure function of the description and the
//! [`SnippetStyle`]; the same input always yields byte-identical output.
//! Delivery is delegated to a caller-provided [`DeliverySink`].

pub mod assembler;
pub mod method;
pub mod parameter;
pub mod property;
pub mod style;
pub mod visibility;

pub use assembler::{Behavior, REF_WARNING, SnippetAssembler, SnippetParts};
pub use method::MethodSignatureModel;
pub use parameter::{ParameterDescriptor, ParameterFragments, PassingMode};
pub use property::PropertySignatureModel;
pub use style::{LineEnding, SnippetStyle};
pub use visibility::{MemberVisibilityPolicy, SetupShape};

use sig_core::{Action, ActionKind, CoreError, DeliverySink, MemberDescription};

/// Produce the snippet for `action`.
///
/// # Errors
/// Returns `CoreError::ActionNotOffered` when the action kind does not fit
/// the member (a getter on a method).
pub fn generate(action: &Action, style: &SnippetStyle) -> Result<String, CoreError> {
    let snippet = match (&action.member, action.kind.accessor()) {
        (MemberDescription::Method(method), None) => {
            MethodSignatureModel::new(method).snippet(style)
        }
        (MemberDescription::Property(property), Some(accessor)) => {
            PropertySignatureModel::new(property, accessor).snippet(style)
        }
        (member, _) => {
            return Err(CoreError::ActionNotOffered {
                action: action.kind.to_string(),
                member: format!("{} {}", member.kind_str(), member.name()),
            });
        }
    };
    Ok(snippet)
}

/// Run a triggered action: generate, then hand the text to `sink`.
///
/// The sink is only touched once, after generation has fully succeeded.
///
/// # Errors
/// Returns `CoreError` if the action does not fit the member or delivery fails.
pub fn run_action<S: DeliverySink + ?Sized>(
    action: &Action,
    style: &SnippetStyle,
    sink: &mut S,
) -> Result<String, CoreError> {
    let snippet = generate(action, style)?;
    sink.deliver(&snippet)?;
    tracing::info!(
        member = action.member.name(),
        action = %action.kind,
        sink = sink.name(),
        "delivered setup snippet"
    );
    Ok(snippet)
}

/// Snippet for the default action of `member` (getter for properties).
///
/// # Errors
/// Returns `CoreError` only if the member offers no action, which cannot
/// happen for the current member kinds.
pub fn generate_default(
    member: &MemberDescription,
    style: &SnippetStyle,
) -> Result<String, CoreError> {
    let kind = member
        .offered_actions()
        .first()
        .copied()
        .unwrap_or(ActionKind::MethodSetup);
    generate(&Action::new(kind, member.clone())?, style)
}
