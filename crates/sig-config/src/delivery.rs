//! `[delivery]` section: where generated snippets go.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTarget {
    /// The system clipboard.
    #[default]
    Clipboard,
    /// Standard output, for pipes and headless sessions.
    Stdout,
}

impl DeliveryTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::Stdout => "stdout",
        }
    }
}

impl fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub target: DeliveryTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_is_default() {
        assert_eq!(DeliveryConfig::default().target, DeliveryTarget::Clipboard);
        assert_eq!(DeliveryTarget::Stdout.to_string(), "stdout");
    }
}
