//! Property snippet model.

use sig_core::{AccessorKind, PropertyDescription};

use crate::assembler::{Behavior, SnippetAssembler, SnippetParts};
use crate::style::SnippetStyle;
use crate::visibility::{MemberVisibilityPolicy, SetupShape, name_literal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignatureModel {
    name: String,
    return_type_name: String,
    policy: MemberVisibilityPolicy,
    accessor: AccessorKind,
}

impl PropertySignatureModel {
    /// Model one accessor of `description`; the accessor's own visibility
    /// wins over the property's.
    #[must_use]
    pub fn new(description: &PropertyDescription, accessor: AccessorKind) -> Self {
        Self {
            name: description.name.clone(),
            return_type_name: description.type_name.clone(),
            policy: MemberVisibilityPolicy::new(description.accessor_visibility(accessor)),
            accessor,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_setter(&self) -> bool {
        matches!(self.accessor, AccessorKind::Set)
    }

    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        self.policy.is_restricted()
    }

    fn setup_line(&self, style: &SnippetStyle) -> String {
        let mock = &style.mock_name;
        let ty = &self.return_type_name;
        let setup = if self.is_setter() { "SetupSet" } else { "Setup" };
        match self.policy.setup_shape() {
            SetupShape::TypedLambda => {
                let m = &style.lambda_parameter;
                let assignment = if self.is_setter() {
                    format!(" = {}", self.policy.any_value(ty))
                } else {
                    String::new()
                };
                format!("{mock}.{setup}({m} => {m}.{}{assignment})", self.name)
            }
            SetupShape::StringKeyed => {
                let value = if self.is_setter() {
                    format!(", {}", self.policy.any_value(ty))
                } else {
                    String::new()
                };
                format!(
                    "{mock}.Protected().{setup}<{ty}>({}{value})",
                    name_literal(&self.name)
                )
            }
        }
    }

    #[must_use]
    pub fn parts(&self, style: &SnippetStyle) -> SnippetParts {
        let behavior = if self.is_setter() {
            Behavior::Callback {
                parameters: vec![format!("{} value", self.return_type_name)],
            }
        } else {
            Behavior::Returns {
                parameters: Vec::new(),
                type_name: self.return_type_name.clone(),
            }
        };
        SnippetParts {
            declarations: Vec::new(),
            warn_by_reference: false,
            setup: self.setup_line(style),
            behavior,
        }
    }

    #[must_use]
    pub fn snippet(&self, style: &SnippetStyle) -> String {
        SnippetAssembler::new(style).assemble(&self.parts(style))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sig_core::Visibility;

    use super::*;

    fn property(visibility: Visibility) -> PropertyDescription {
        PropertyDescription {
            name: "Property".into(),
            type_name: "int".into(),
            visibility,
            getter_visibility: None,
            setter_visibility: None,
        }
    }

    #[test]
    fn normal_getter() {
        let model = PropertySignatureModel::new(&property(Visibility::Normal), AccessorKind::Get);
        assert_eq!(
            model.snippet(&SnippetStyle::default()),
            "mock.Setup(m => m.Property)\n.Returns(() =>\n{\n    return default(int);\n});"
        );
    }

    #[test]
    fn normal_setter() {
        let model = PropertySignatureModel::new(&property(Visibility::Normal), AccessorKind::Set);
        assert_eq!(
            model.snippet(&SnippetStyle::default()),
            "mock.SetupSet(m => m.Property = It.IsAny<int>())\n.Callback((int value) =>\n{\n});"
        );
    }

    #[test]
    fn restricted_getter_and_setter() {
        let description = property(Visibility::Restricted);
        let style = SnippetStyle::default();
        let getter = PropertySignatureModel::new(&description, AccessorKind::Get);
        assert_eq!(
            getter.parts(&style).setup,
            "mock.Protected().Setup<int>(\"Property\")"
        );
        let setter = PropertySignatureModel::new(&description, AccessorKind::Set);
        assert_eq!(
            setter.parts(&style).setup,
            "mock.Protected().SetupSet<int>(\"Property\", ItExpr.IsAny<int>())"
        );
    }

    #[test]
    fn accessor_visibility_overrides_property() {
        let mut description = property(Visibility::Normal);
        description.setter_visibility = Some(Visibility::Restricted);
        let setter = PropertySignatureModel::new(&description, AccessorKind::Set);
        assert!(setter.is_restricted());
        let getter = PropertySignatureModel::new(&description, AccessorKind::Get);
        assert!(!getter.is_restricted());
    }
}
