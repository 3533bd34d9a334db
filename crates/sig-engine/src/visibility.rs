//! Visibility-driven choice of matcher family and setup-call shape.

use sig_core::Visibility;

/// How the setup call addresses the mocked member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupShape {
    /// `mock.Setup(m => m.Member(...))`
    TypedLambda,
    /// `mock.Protected().Setup<T>("Member", ...)`
    StringKeyed,
}

/// Two-outcome lookup from member visibility to call-shape strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberVisibilityPolicy {
    visibility: Visibility,
}

impl MemberVisibilityPolicy {
    #[must_use]
    pub const fn new(visibility: Visibility) -> Self {
        Self { visibility }
    }

    #[must_use]
    pub const fn is_restricted(self) -> bool {
        self.visibility.is_restricted()
    }

    /// Static class providing the "any value" matchers.
    #[must_use]
    pub const fn matcher_family(self) -> &'static str {
        if self.is_restricted() { "ItExpr" } else { "It" }
    }

    #[must_use]
    pub const fn setup_shape(self) -> SetupShape {
        if self.is_restricted() {
            SetupShape::StringKeyed
        } else {
            SetupShape::TypedLambda
        }
    }

    /// Matcher accepting any argument of `type_name`.
    #[must_use]
    pub fn any_value(self, type_name: &str) -> String {
        format!("{}.IsAny<{type_name}>()", self.matcher_family())
    }
}

impl From<Visibility> for MemberVisibilityPolicy {
    fn from(visibility: Visibility) -> Self {
        Self::new(visibility)
    }
}

/// Member name as a string literal for string-keyed setups.
///
/// A verbatim identifier (`@event`) is looked up by its plain name.
pub(crate) fn name_literal(name: &str) -> String {
    format!("\"{}\"", name.strip_prefix('@').unwrap_or(name))
}
