//! # sig-parser
//!
//! ast-grep-based C# parsing for sig2moq.
//!
//! Plays the host's structural-analysis role: turns C# source into the plain
//! [`sig_core::MemberDescription`] contract, and maps a cursor position to the
//! actions an editor would offer there.

pub mod error;
pub mod extractors;
pub mod parser;
pub mod selection;
pub mod types;

pub use error::ParserError;
pub use parser::{AstTree, detect_language, parse_source, require_language};
pub use selection::{Position, actions_at};
pub use types::ExtractedMember;

use std::path::Path;

/// Extract every method and property from C# source text.
///
/// # Errors
/// Returns `ParserError` if extraction fails.
pub fn extract_members(source: &str) -> Result<Vec<ExtractedMember>, ParserError> {
    extractors::csharp::extract(&parse_source(source))
}

/// Read a `.cs` file and return its source text.
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for non-C# paths and
/// `ParserError::Io` if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String, ParserError> {
    require_language(path)?;
    Ok(std::fs::read_to_string(path)?)
}
