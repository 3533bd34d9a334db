//! The member-description contract consumed by the generation engine.
//!
//! Descriptions are pre-parsed: names and type names are opaque text passed
//! through verbatim. Return-type void-ness is classified once, here, when the
//! description is built, never re-derived during generation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AccessorKind, ActionKind, Visibility};
use crate::errors::CoreError;

/// Type names recognized as "no value".
const VOID_MARKERS: &[&str] = &["void", "System.Void"];

/// A method's return type, classified at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReturnType {
    Void,
    Value { type_name: String },
}

impl ReturnType {
    /// Classify raw return-type text.
    #[must_use]
    pub fn from_type_text(text: &str) -> Self {
        let text = text.trim();
        if VOID_MARKERS.contains(&text) {
            Self::Void
        } else {
            Self::Value {
                type_name: text.to_string(),
            }
        }
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Type name as written in generated code (`void` for no value).
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Void => "void",
            Self::Value { type_name } => type_name,
        }
    }
}

/// One formal parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParameterDescription {
    pub name: String,
    pub type_name: String,
    /// Raw modifier token (`ref`, `out`, `in`, `params`, ...), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl ParameterDescription {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifier: None,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    fn signature(&self) -> String {
        match &self.modifier {
            Some(modifier) => format!("{modifier} {} {}", self.type_name, self.name),
            None => format!("{} {}", self.type_name, self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MethodDescription {
    pub name: String,
    pub return_type: ReturnType,
    #[serde(default)]
    pub visibility: Visibility,
    /// Generic type parameter names; they pass through unchanged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyDescription {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// Accessor-level visibility override (`{ protected get; set; }`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter_visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_visibility: Option<Visibility>,
}

impl PropertyDescription {
    /// Effective visibility of one accessor.
    #[must_use]
    pub fn accessor_visibility(&self, accessor: AccessorKind) -> Visibility {
        let overridden = match accessor {
            AccessorKind::Get => self.getter_visibility,
            AccessorKind::Set => self.setter_visibility,
        };
        overridden.unwrap_or(self.visibility)
    }
}

/// A class member the engine can produce a snippet for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDescription {
    Method(MethodDescription),
    Property(PropertyDescription),
}

impl MemberDescription {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Method(method) => &method.name,
            Self::Property(property) => &property.name,
        }
    }

    #[must_use]
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Self::Method(_) => "method",
            Self::Property(_) => "property",
        }
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        match self {
            Self::Method(method) => method.visibility,
            Self::Property(property) => property.visibility,
        }
    }

    /// Actions offered when the selection lands on this member's declaration.
    #[must_use]
    pub const fn offered_actions(&self) -> &'static [ActionKind] {
        match self {
            Self::Method(_) => &[ActionKind::MethodSetup],
            Self::Property(_) => &[ActionKind::PropertyGetter, ActionKind::PropertySetter],
        }
    }

    /// Declaration-style signature for listings, e.g. `int Function(int number)`.
    #[must_use]
    pub fn signature(&self) -> String {
        match self {
            Self::Method(method) => {
                let generics = if method.type_parameters.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", method.type_parameters.join(", "))
                };
                let params = method
                    .parameters
                    .iter()
                    .map(ParameterDescription::signature)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{} {}{generics}({params})",
                    method.return_type.type_name(),
                    method.name
                )
            }
            Self::Property(property) => format!("{} {}", property.type_name, property.name),
        }
    }

    /// Check that names and type names are usable in generated code.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Method(method) => {
                require_identifier("method name", &method.name)?;
                if let ReturnType::Value { type_name } = &method.return_type {
                    require_type("return type", type_name)?;
                }
                for type_parameter in &method.type_parameters {
                    require_identifier("type parameter", type_parameter)?;
                }
                let mut seen = Vec::with_capacity(method.parameters.len());
                for parameter in &method.parameters {
                    require_identifier("parameter name", &parameter.name)?;
                    require_type("parameter type", &parameter.type_name)?;
                    if seen.contains(&parameter.name.as_str()) {
                        return Err(CoreError::Validation(format!(
                            "duplicate parameter name '{}' in {}",
                            parameter.name, method.name
                        )));
                    }
                    seen.push(parameter.name.as_str());
                }
                Ok(())
            }
            Self::Property(property) => {
                require_identifier("property name", &property.name)?;
                require_type("property type", &property.type_name)
            }
        }
    }
}

fn require_identifier(what: &str, value: &str) -> Result<(), CoreError> {
    let mut chars = value.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c == '_' || c == '@' || c.is_alphabetic());
    if valid_start && chars.all(|c| c == '_' || c.is_alphanumeric()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{what} '{value}' is not a valid identifier"
        )))
    }
}

fn require_type(what: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{what} must not be empty")));
    }
    if value.contains(['\n', '\r', ';']) {
        return Err(CoreError::Validation(format!(
            "{what} '{value}' contains characters not allowed in a type name"
        )));
    }
    Ok(())
}
