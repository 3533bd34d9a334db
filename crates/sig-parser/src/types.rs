//! Extraction results.

use serde::{Deserialize, Serialize};
use sig_core::MemberDescription;
use sig_core::responses::MemberSummary;

/// A member description together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMember {
    pub member: MemberDescription,
    /// Enclosing class, struct, record, or interface.
    pub owner: Option<String>,
    /// 1-based first line of the declaration.
    pub start_line: u32,
    /// 1-based last line of the declaration.
    pub end_line: u32,
}

impl ExtractedMember {
    #[must_use]
    pub fn summary(&self) -> MemberSummary {
        MemberSummary {
            kind: self.member.kind_str().to_string(),
            name: self.member.name().to_string(),
            signature: self.member.signature(),
            visibility: self.member.visibility(),
            line: Some(self.start_line),
        }
    }
}
