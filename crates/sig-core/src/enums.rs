//! Visibility, accessor, and action enums for sig2moq.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Binary member visibility as seen by the mocking convention.
///
/// `Restricted` covers members reachable only from the defining type and its
/// subtypes (`protected`, `protected internal`, `private protected`). Such
/// members cannot appear in a compiled lambda and must be addressed by name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Normal,
    Restricted,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Restricted => "restricted",
        }
    }

    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Restricted)
    }

    /// Classify a C# modifier list.
    ///
    /// Any `protected` modifier makes the member restricted, regardless of
    /// what it is combined with.
    #[must_use]
    pub fn from_modifiers<S: AsRef<str>>(modifiers: &[S]) -> Self {
        if modifiers.iter().any(|m| m.as_ref() == "protected") {
            Self::Restricted
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AccessorKind
// ---------------------------------------------------------------------------

/// Property accessor a snippet is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }

    /// Map a C# accessor keyword. `init` behaves as a setter; `add`/`remove`
    /// and anything else have no snippet.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "get" => Some(Self::Get),
            "set" | "init" => Some(Self::Set),
            _ => None,
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" | "getter" => Ok(Self::Get),
            "set" | "setter" => Ok(Self::Set),
            other => Err(CoreError::Validation(format!(
                "unknown accessor '{other}' (expected get or set)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// The kind of snippet an offered action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    MethodSetup,
    PropertyGetter,
    PropertySetter,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MethodSetup => "method_setup",
            Self::PropertyGetter => "property_getter",
            Self::PropertySetter => "property_setter",
        }
    }

    /// Human-readable title shown in an action list.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MethodSetup => "Extract Moq setup definition",
            Self::PropertyGetter => "Extract Moq getter setup definition",
            Self::PropertySetter => "Extract Moq setter setup definition",
        }
    }

    #[must_use]
    pub const fn for_accessor(accessor: AccessorKind) -> Self {
        match accessor {
            AccessorKind::Get => Self::PropertyGetter,
            AccessorKind::Set => Self::PropertySetter,
        }
    }

    /// The accessor this action targets, if it is a property action.
    #[must_use]
    pub const fn accessor(self) -> Option<AccessorKind> {
        match self {
            Self::MethodSetup => None,
            Self::PropertyGetter => Some(AccessorKind::Get),
            Self::PropertySetter => Some(AccessorKind::Set),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_protected_modifier_is_restricted() {
        assert_eq!(
            Visibility::from_modifiers(&["protected"]),
            Visibility::Restricted
        );
        assert_eq!(
            Visibility::from_modifiers(&["protected", "internal"]),
            Visibility::Restricted
        );
        assert_eq!(
            Visibility::from_modifiers(&["private", "protected", "virtual"]),
            Visibility::Restricted
        );
    }

    #[test]
    fn public_and_missing_modifiers_are_normal() {
        assert_eq!(Visibility::from_modifiers(&["public"]), Visibility::Normal);
        assert_eq!(Visibility::from_modifiers::<&str>(&[]), Visibility::Normal);
        assert_eq!(
            Visibility::from_modifiers(&["internal", "static"]),
            Visibility::Normal
        );
    }

    #[test]
    fn accessor_keywords() {
        assert_eq!(AccessorKind::from_keyword("get"), Some(AccessorKind::Get));
        assert_eq!(AccessorKind::from_keyword("set"), Some(AccessorKind::Set));
        assert_eq!(AccessorKind::from_keyword("init"), Some(AccessorKind::Set));
        assert_eq!(AccessorKind::from_keyword("add"), None);
        assert_eq!(AccessorKind::from_keyword("remove"), None);
    }

    #[test]
    fn accessor_parses_long_and_short_names() {
        assert_eq!("getter".parse::<AccessorKind>().unwrap(), AccessorKind::Get);
        assert_eq!("set".parse::<AccessorKind>().unwrap(), AccessorKind::Set);
        assert!("both".parse::<AccessorKind>().is_err());
    }

    #[test]
    fn action_kind_accessor_mapping_is_symmetric() {
        for accessor in [AccessorKind::Get, AccessorKind::Set] {
            assert_eq!(ActionKind::for_accessor(accessor).accessor(), Some(accessor));
        }
        assert_eq!(ActionKind::MethodSetup.accessor(), None);
    }

    #[test]
    fn enums_serialize_snake_case() {
        let json = serde_json::to_string(&ActionKind::PropertySetter).unwrap();
        assert_eq!(json, "\"property_setter\"");
        let json = serde_json::to_string(&Visibility::Restricted).unwrap();
        assert_eq!(json, "\"restricted\"");
    }
}
