//! Method snippet model.

use std::collections::HashSet;

use sig_core::{MethodDescription, ReturnType};

use crate::assembler::{Behavior, SnippetAssembler, SnippetParts};
use crate::parameter::{ParameterDescriptor, ParameterFragments, PassingMode};
use crate::style::SnippetStyle;
use crate::visibility::{MemberVisibilityPolicy, SetupShape, name_literal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignatureModel {
    name: String,
    return_type: ReturnType,
    policy: MemberVisibilityPolicy,
    parameters: Vec<ParameterDescriptor>,
}

impl MethodSignatureModel {
    #[must_use]
    pub fn new(description: &MethodDescription) -> Self {
        let parameters = description
            .parameters
            .iter()
            .map(ParameterDescriptor::new)
            .collect::<Vec<_>>();
        tracing::debug!(
            method = %description.name,
            parameters = parameters.len(),
            visibility = %description.visibility,
            "classified method signature"
        );
        Self {
            name: description.name.clone(),
            return_type: description.return_type.clone(),
            policy: MemberVisibilityPolicy::new(description.visibility),
            parameters,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.return_type.is_void()
    }

    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        self.policy.is_restricted()
    }

    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Fragments for every parameter, in declaration order.
    ///
    /// Declared locals and renamed callback parameters are unique among the
    /// parameter names and the setup lambda's parameter; a clash gets the
    /// first free numeric suffix (`pX1`, `m1`).
    #[must_use]
    pub fn fragments(&self, style: &SnippetStyle) -> Vec<ParameterFragments> {
        let typed_lambda = matches!(self.policy.setup_shape(), SetupShape::TypedLambda);
        let mut taken: HashSet<String> = self
            .parameters
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        if typed_lambda {
            taken.insert(style.lambda_parameter.clone());
        }

        self.parameters
            .iter()
            .map(|p| {
                if !p.passing_mode().is_by_reference() {
                    return p.fragments(self.policy);
                }
                let local = if typed_lambda && p.name() == style.lambda_parameter {
                    claim_name(p.name(), &mut taken)
                } else {
                    p.name().to_string()
                };
                let callback_name = claim_name(&p.callback_name(), &mut taken);
                p.fragments_as(self.policy, &local, &callback_name)
            })
            .collect()
    }

    #[must_use]
    pub fn has_by_ref_in(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| p.passing_mode() == PassingMode::ByRefIn)
    }

    fn setup_line(&self, style: &SnippetStyle, arguments: &str) -> String {
        let mock = &style.mock_name;
        match self.policy.setup_shape() {
            SetupShape::TypedLambda => {
                let m = &style.lambda_parameter;
                format!("{mock}.Setup({m} => {m}.{}({arguments}))", self.name)
            }
            SetupShape::StringKeyed => {
                let generic = match &self.return_type {
                    ReturnType::Void => String::new(),
                    ReturnType::Value { type_name } => format!("<{type_name}>"),
                };
                let mut call_args = name_literal(&self.name);
                if !arguments.is_empty() {
                    call_args.push_str(", ");
                    call_args.push_str(arguments);
                }
                format!("{mock}.Protected().Setup{generic}({call_args})")
            }
        }
    }

    #[must_use]
    pub fn parts(&self, style: &SnippetStyle) -> SnippetParts {
        let fragments = self.fragments(style);
        let mut declarations = Vec::new();
        let mut matchers = Vec::with_capacity(fragments.len());
        let mut callback_parameters = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            declarations.extend(fragment.declaration);
            matchers.push(fragment.matcher);
            callback_parameters.push(fragment.callback_parameter);
        }

        let behavior = match &self.return_type {
            ReturnType::Void => Behavior::Callback {
                parameters: callback_parameters,
            },
            ReturnType::Value { type_name } => Behavior::Returns {
                parameters: callback_parameters,
                type_name: type_name.clone(),
            },
        };

        SnippetParts {
            declarations,
            warn_by_reference: self.has_by_ref_in(),
            setup: self.setup_line(style, &matchers.join(", ")),
            behavior,
        }
    }

    #[must_use]
    pub fn snippet(&self, style: &SnippetStyle) -> String {
        SnippetAssembler::new(style).assemble(&self.parts(style))
    }
}

/// Reserve `base`, or `base` plus the first free numeric suffix.
fn claim_name(base: &str, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut suffix = 1u32;
    while taken.contains(&candidate) {
        candidate = format!("{base}{suffix}");
        suffix += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sig_core::{ParameterDescription, Visibility};

    use super::*;
    use crate::assembler::REF_WARNING;

    fn model(
        return_type: &str,
        visibility: Visibility,
        parameters: Vec<ParameterDescription>,
    ) -> MethodSignatureModel {
        MethodSignatureModel::new(&MethodDescription {
            name: "Run".into(),
            return_type: ReturnType::from_type_text(return_type),
            visibility,
            type_parameters: Vec::new(),
            parameters,
        })
    }

    #[test]
    fn fragments_stay_aligned_with_mixed_modes() {
        let m = model(
            "int",
            Visibility::Normal,
            vec![
                ParameterDescription::new("a", "int").with_modifier("out"),
                ParameterDescription::new("b", "string"),
                ParameterDescription::new("c", "long").with_modifier("ref"),
            ],
        );
        let fragments = m.fragments(&SnippetStyle::default());
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].matcher, "out a");
        assert_eq!(fragments[1].matcher, "It.IsAny<string>()");
        assert_eq!(fragments[2].matcher, "ref c");
        assert_eq!(fragments[1].declaration, None);

        let parts = m.parts(&SnippetStyle::default());
        assert_eq!(parts.declarations, ["int a;", "long c = default(long);"]);
        assert_eq!(
            parts.setup,
            "mock.Setup(m => m.Run(out a, It.IsAny<string>(), ref c))"
        );
        assert_eq!(
            parts.behavior,
            Behavior::Returns {
                parameters: vec!["int pA".into(), "string b".into(), "long pC".into()],
                type_name: "int".into(),
            }
        );
    }

    #[test]
    fn restricted_void_method_has_no_generic_argument() {
        let m = model(
            "void",
            Visibility::Restricted,
            vec![ParameterDescription::new("a", "int")],
        );
        assert!(m.is_void());
        assert!(m.is_restricted());
        assert_eq!(
            m.parts(&SnippetStyle::default()).setup,
            "mock.Protected().Setup(\"Run\", ItExpr.IsAny<int>())"
        );
    }

    #[test]
    fn restricted_parameterless_method_has_no_trailing_comma() {
        let m = model("bool", Visibility::Restricted, Vec::new());
        assert_eq!(
            m.parts(&SnippetStyle::default()).setup,
            "mock.Protected().Setup<bool>(\"Run\")"
        );
    }

    #[test]
    fn warning_appears_once_for_several_refs() {
        let m = model(
            "void",
            Visibility::Normal,
            vec![
                ParameterDescription::new("a", "int").with_modifier("ref"),
                ParameterDescription::new("b", "int").with_modifier("ref"),
            ],
        );
        let snippet = m.snippet(&SnippetStyle::default());
        assert_eq!(snippet.matches(REF_WARNING).count(), 1);
        assert!(snippet.starts_with(REF_WARNING));
    }

    #[test]
    fn out_alone_does_not_warn() {
        let m = model(
            "void",
            Visibility::Normal,
            vec![ParameterDescription::new("y", "T").with_modifier("out")],
        );
        let snippet = m.snippet(&SnippetStyle::default());
        assert!(!snippet.contains("// Warning"));
        assert!(snippet.starts_with("T y;\n"));
    }

    #[test]
    fn custom_mock_and_lambda_names() {
        let style = SnippetStyle {
            mock_name: "serviceMock".into(),
            lambda_parameter: "s".into(),
            ..SnippetStyle::default()
        };
        let m = model("void", Visibility::Normal, Vec::new());
        assert_eq!(
            m.snippet(&style),
            "serviceMock.Setup(s => s.Run())\n.Callback(() =>\n{\n});"
        );
    }

    #[test]
    fn renamed_callback_parameter_avoids_sibling_names() {
        let m = model(
            "void",
            Visibility::Normal,
            vec![
                ParameterDescription::new("pX", "int"),
                ParameterDescription::new("x", "int").with_modifier("ref"),
            ],
        );
        let parts = m.parts(&SnippetStyle::default());
        assert_eq!(parts.setup, "mock.Setup(m => m.Run(It.IsAny<int>(), ref x))");
        assert_eq!(
            parts.behavior,
            Behavior::Callback {
                parameters: vec!["int pX".into(), "int pX1".into()],
            }
        );
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let m = model(
            "void",
            Visibility::Normal,
            vec![
                ParameterDescription::new("pX", "int"),
                ParameterDescription::new("pX1", "int"),
                ParameterDescription::new("x", "int").with_modifier("out"),
            ],
        );
        let fragments = m.fragments(&SnippetStyle::default());
        assert_eq!(fragments[2].callback_parameter, "int pX2");
    }

    #[test]
    fn local_named_like_lambda_parameter_is_renamed() {
        let m = model(
            "void",
            Visibility::Normal,
            vec![ParameterDescription::new("m", "int").with_modifier("out")],
        );
        assert_eq!(
            m.snippet(&SnippetStyle::default()),
            "int m1;\nmock.Setup(m => m.Run(out m1))\n.Callback((int pM) =>\n{\n});"
        );
    }

    #[test]
    fn string_keyed_setup_keeps_local_named_like_lambda_parameter() {
        let m = model(
            "void",
            Visibility::Restricted,
            vec![ParameterDescription::new("m", "int").with_modifier("out")],
        );
        assert_eq!(
            m.parts(&SnippetStyle::default()).setup,
            "mock.Protected().Setup(\"Run\", out m)"
        );
    }
}
