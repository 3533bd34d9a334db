//! Composition of the variable block, setup line, and behavior block.
//!
//! ```text
//! [// <ref-warning>]
//! [<ref/out declarations>]
//! <setup-call>
//! .<Callback|Returns>((<params>) =>
//! {
//!     [return default(<type>);]
//! });
//! ```

use crate::style::SnippetStyle;

/// Emitted once above the declarations when any argument is passed by `ref`.
pub const REF_WARNING: &str = "// Warning: if the parameter passed by reference is not the exact same instance, then the mocked method will never get called";

/// What the intercepted invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// `.Callback((params) => { })`
    Callback { parameters: Vec<String> },
    /// `.Returns((params) => { return default(T); })`
    Returns {
        parameters: Vec<String>,
        type_name: String,
    },
}

impl Behavior {
    const fn method_name(&self) -> &'static str {
        match self {
            Self::Callback { .. } => "Callback",
            Self::Returns { .. } => "Returns",
        }
    }

    fn parameters(&self) -> &[String] {
        match self {
            Self::Callback { parameters } | Self::Returns { parameters, .. } => parameters,
        }
    }
}

/// Per-kind fragments handed to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetParts {
    pub declarations: Vec<String>,
    pub warn_by_reference: bool,
    pub setup: String,
    pub behavior: Behavior,
}

/// Joins [`SnippetParts`] into the final text.
#[derive(Debug, Clone, Copy)]
pub struct SnippetAssembler<'a> {
    style: &'a SnippetStyle,
}

impl<'a> SnippetAssembler<'a> {
    #[must_use]
    pub const fn new(style: &'a SnippetStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn variable_block(&self, parts: &SnippetParts) -> Vec<String> {
        if parts.declarations.is_empty() {
            return Vec::new();
        }
        let mut lines = Vec::with_capacity(parts.declarations.len() + 1);
        if parts.warn_by_reference {
            lines.push(REF_WARNING.to_string());
        }
        lines.extend(parts.declarations.iter().cloned());
        lines
    }

    #[must_use]
    pub fn behavior_block(&self, behavior: &Behavior) -> Vec<String> {
        let mut lines = vec![
            format!(
                ".{}(({}) =>",
                behavior.method_name(),
                behavior.parameters().join(", ")
            ),
            "{".to_string(),
        ];
        if let Behavior::Returns { type_name, .. } = behavior {
            lines.push(format!("{}return default({type_name});", self.style.indent));
        }
        lines.push("});".to_string());
        lines
    }

    #[must_use]
    pub fn assemble(&self, parts: &SnippetParts) -> String {
        let mut lines = self.variable_block(parts);
        lines.push(parts.setup.clone());
        lines.extend(self.behavior_block(&parts.behavior));
        lines.join(self.style.line_ending.as_str())
    }
}
