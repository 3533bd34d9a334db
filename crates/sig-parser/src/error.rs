//! Parser error types for sig-parser.

/// Errors that can occur during source parsing, extraction, or selection.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Position {line}:{column} is outside the source")]
    PositionOutOfRange { line: usize, column: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
