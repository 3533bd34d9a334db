//! CLI response types returned as JSON by `sig2moq` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionKind, Visibility};

/// One row of `sig2moq members`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MemberSummary {
    pub kind: String,
    pub name: String,
    pub signature: String,
    pub visibility: Visibility,
    pub line: Option<u32>,
}

/// One row of `sig2moq actions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionSummary {
    pub kind: ActionKind,
    pub title: String,
    pub member: String,
    pub signature: String,
}

/// Response from `sig2moq generate` and `sig2moq render`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerateResponse {
    pub action: ActionKind,
    pub member: String,
    pub delivered_to: String,
    pub snippet: String,
}
