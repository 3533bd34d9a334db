//! Actions offered on a selected member.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AccessorKind, ActionKind};
use crate::errors::CoreError;
use crate::member::MemberDescription;

/// One "produce setup snippet" action bound to a member description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Action {
    pub kind: ActionKind,
    pub title: String,
    pub member: MemberDescription,
}

impl Action {
    /// Bind `kind` to `member`.
    ///
    /// # Errors
    /// Returns `CoreError::ActionNotOffered` when the member does not offer
    /// that kind (a getter on a method, a method setup on a property).
    pub fn new(kind: ActionKind, member: MemberDescription) -> Result<Self, CoreError> {
        if !member.offered_actions().contains(&kind) {
            return Err(CoreError::ActionNotOffered {
                action: kind.to_string(),
                member: format!("{} {}", member.kind_str(), member.name()),
            });
        }
        Ok(Self {
            kind,
            title: kind.title().to_string(),
            member,
        })
    }

    /// Every action a member declaration offers, in display order.
    #[must_use]
    pub fn offered_for(member: &MemberDescription) -> Vec<Self> {
        member
            .offered_actions()
            .iter()
            .map(|kind| Self {
                kind: *kind,
                title: kind.title().to_string(),
                member: member.clone(),
            })
            .collect()
    }

    /// The single action offered when the selection is on one accessor.
    ///
    /// # Errors
    /// Returns `CoreError::ActionNotOffered` if `member` is not a property.
    pub fn for_accessor(member: MemberDescription, accessor: AccessorKind) -> Result<Self, CoreError> {
        Self::new(ActionKind::for_accessor(accessor), member)
    }
}
