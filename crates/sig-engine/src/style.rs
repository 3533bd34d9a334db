//! Textual conventions applied by the snippet assembler.

use serde::{Deserialize, Serialize};

/// Line terminator used between snippet lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Naming and layout of generated snippets.
///
/// The defaults reproduce the conventional Moq layout:
/// `mock.Setup(m => m.Name(...))`, four-space body indent, `\n` endings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetStyle {
    /// Variable holding the `Mock<T>` instance.
    pub mock_name: String,
    /// Parameter name of the typed setup lambda.
    pub lambda_parameter: String,
    /// Indentation of statements inside the callback body.
    pub indent: String,
    pub line_ending: LineEnding,
}

impl Default for SnippetStyle {
    fn default() -> Self {
        Self {
            mock_name: "mock".to_string(),
            lambda_parameter: "m".to_string(),
            indent: "    ".to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_moq_conventions() {
        let style = SnippetStyle::default();
        assert_eq!(style.mock_name, "mock");
        assert_eq!(style.lambda_parameter, "m");
        assert_eq!(style.indent, "    ");
        assert_eq!(style.line_ending.as_str(), "\n");
    }

    #[test]
    fn line_ending_deserializes_snake_case() {
        let ending: LineEnding = serde_json::from_str("\"crlf\"").unwrap();
        assert_eq!(ending, LineEnding::Crlf);
        assert_eq!(ending.as_str(), "\r\n");
    }
}
