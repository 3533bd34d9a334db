//! ast-grep wrapper and language detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the language from a file path extension.
///
/// Only C# sources carry members this tool can mock.
#[must_use]
pub fn detect_language(file_path: &Path) -> Option<SupportLang> {
    match file_path.extension()?.to_str()? {
        "cs" => Some(SupportLang::CSharp),
        _ => None,
    }
}

/// Like [`detect_language`], but an unsupported extension is an error.
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for anything but `.cs`.
pub fn require_language(file_path: &Path) -> Result<SupportLang, ParserError> {
    detect_language(file_path)
        .ok_or_else(|| ParserError::UnsupportedLanguage(file_path.display().to_string()))
}

/// Parse C# source into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::CSharp.ast_grep(source)
}
