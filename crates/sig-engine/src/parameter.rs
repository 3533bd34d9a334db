//! Classification of a single formal parameter.

use sig_core::ParameterDescription;

use crate::visibility::MemberVisibilityPolicy;

/// How an argument is passed at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassingMode {
    ByValue,
    /// `ref`: the caller supplies an initialized variable.
    ByRefIn,
    /// `out`: the callee assigns the variable.
    ByRefOut,
}

impl PassingMode {
    /// Classify a modifier token. Anything other than `ref` or `out`
    /// (including `in`, `params`, `this`) is passed by value.
    #[must_use]
    pub fn from_modifier(modifier: Option<&str>) -> Self {
        match modifier.map(str::trim) {
            Some("ref") => Self::ByRefIn,
            Some("out") => Self::ByRefOut,
            Some(other) if !other.is_empty() => {
                tracing::debug!(
                    modifier = other,
                    "unrecognized parameter modifier, treating as by-value"
                );
                Self::ByValue
            }
            _ => Self::ByValue,
        }
    }

    /// Keyword repeated at the call site, if any.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::ByValue => None,
            Self::ByRefIn => Some("ref"),
            Self::ByRefOut => Some("out"),
        }
    }

    #[must_use]
    pub const fn is_by_reference(self) -> bool {
        !matches!(self, Self::ByValue)
    }
}

/// The three per-parameter fragments, kept together so the lists derived
/// from them always share length and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFragments {
    pub declaration: Option<String>,
    pub matcher: String,
    pub callback_parameter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    type_name: String,
    passing_mode: PassingMode,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn new(description: &ParameterDescription) -> Self {
        Self {
            name: description.name.clone(),
            type_name: description.type_name.clone(),
            passing_mode: PassingMode::from_modifier(description.modifier.as_deref()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub const fn passing_mode(&self) -> PassingMode {
        self.passing_mode
    }

    /// Local variable the setup call passes by reference.
    #[must_use]
    pub fn declaration(&self) -> Option<String> {
        self.declaration_as(&self.name)
    }

    fn declaration_as(&self, local: &str) -> Option<String> {
        let ty = &self.type_name;
        match self.passing_mode {
            PassingMode::ByValue => None,
            PassingMode::ByRefIn => Some(format!("{ty} {local} = default({ty});")),
            PassingMode::ByRefOut => Some(format!("{ty} {local};")),
        }
    }

    /// Argument inside the setup call.
    ///
    /// Reference arguments cannot be matched, only echoed, so they name the
    /// declared variable instead of a matcher.
    #[must_use]
    pub fn matcher(&self, policy: MemberVisibilityPolicy) -> String {
        self.matcher_as(policy, &self.name)
    }

    fn matcher_as(&self, policy: MemberVisibilityPolicy, local: &str) -> String {
        match self.passing_mode.keyword() {
            Some(keyword) => format!("{keyword} {local}"),
            None => policy.any_value(&self.type_name),
        }
    }

    /// Name of this parameter in the `Callback`/`Returns` lambda.
    ///
    /// By-reference parameters become `p<Name>` so they do not shadow the
    /// declared variable of the same name.
    #[must_use]
    pub fn callback_name(&self) -> String {
        if self.passing_mode.is_by_reference() {
            format!("p{}", capitalize_first(&self.name))
        } else {
            self.name.clone()
        }
    }

    /// Parameter of the `Callback`/`Returns` lambda.
    #[must_use]
    pub fn callback_parameter(&self) -> String {
        format!("{} {}", self.type_name, self.callback_name())
    }

    #[must_use]
    pub fn fragments(&self, policy: MemberVisibilityPolicy) -> ParameterFragments {
        self.fragments_as(policy, &self.name, &self.callback_name())
    }

    /// Fragments with explicit names for the declared local and the callback
    /// parameter, for when the defaults clash with other identifiers.
    #[must_use]
    pub fn fragments_as(
        &self,
        policy: MemberVisibilityPolicy,
        local: &str,
        callback_name: &str,
    ) -> ParameterFragments {
        ParameterFragments {
            declaration: self.declaration_as(local),
            matcher: self.matcher_as(policy, local),
            callback_parameter: format!("{} {callback_name}", self.type_name),
        }
    }
}

fn capitalize_first(name: &str) -> String {
    let name = name.strip_prefix('@').unwrap_or(name);
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
