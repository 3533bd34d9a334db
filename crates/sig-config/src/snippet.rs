//! `[snippet]` section: naming and layout of generated setups.

use serde::{Deserialize, Serialize};
use sig_engine::{LineEnding, SnippetStyle};

use crate::error::ConfigError;

fn default_mock_name() -> String {
    "mock".to_string()
}

fn default_lambda_parameter() -> String {
    "m".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnippetConfig {
    /// Variable holding the `Mock<T>` instance.
    #[serde(default = "default_mock_name")]
    pub mock_name: String,

    /// Parameter name of the `m => m.Member(...)` lambda.
    #[serde(default = "default_lambda_parameter")]
    pub lambda_parameter: String,

    /// Indentation inside callback bodies. Whitespace only.
    #[serde(default = "default_indent")]
    pub indent: String,

    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            mock_name: default_mock_name(),
            lambda_parameter: default_lambda_parameter(),
            indent: default_indent(),
            line_ending: LineEnding::default(),
        }
    }
}

impl SnippetConfig {
    /// Check that names are usable as C# identifiers and the indent is blank.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_identifier("snippet.mock_name", &self.mock_name)?;
        check_identifier("snippet.lambda_parameter", &self.lambda_parameter)?;
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::invalid(
                "snippet.indent",
                "must contain only spaces or tabs",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> SnippetStyle {
        SnippetStyle {
            mock_name: self.mock_name.clone(),
            lambda_parameter: self.lambda_parameter.clone(),
            indent: self.indent.clone(),
            line_ending: self.line_ending,
        }
    }
}

fn check_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    let body = value.strip_prefix('@').unwrap_or(value);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::invalid(field, "must not be empty"));
    };
    if !(first == '_' || first.is_alphabetic()) {
        return Err(ConfigError::invalid(
            field,
            format!("'{value}' must start with a letter or underscore"),
        ));
    }
    if let Some(bad) = chars.find(|c| !(*c == '_' || c.is_alphanumeric())) {
        return Err(ConfigError::invalid(
            field,
            format!("'{value}' contains '{bad}', which is not valid in an identifier"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SnippetConfig::default();
        assert_eq!(config.style(), SnippetStyle::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn identifiers_are_checked() {
        assert!(check_identifier("f", "_mock2").is_ok());
        assert!(check_identifier("f", "@class").is_ok());
        assert!(check_identifier("f", "").is_err());
        assert!(check_identifier("f", "2mock").is_err());
        assert!(check_identifier("f", "my mock").is_err());
        assert!(check_identifier("f", "mock.Object").is_err());
    }

    #[test]
    fn indent_must_be_blank() {
        let config = SnippetConfig {
            indent: "-->".into(),
            ..SnippetConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("snippet.indent"));

        let tabs = SnippetConfig {
            indent: "\t".into(),
            ..SnippetConfig::default()
        };
        assert!(tabs.validate().is_ok());
    }
}
