//! C# member extractor.

use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;
use sig_core::{AccessorKind, Action};

use crate::error::ParserError;
use crate::types::ExtractedMember;

mod helpers;
mod members;

const MEMBER_KINDS: &[&str] = &["method_declaration", "property_declaration"];

/// Node kinds a selection can trigger actions on.
pub(crate) const TRIGGER_KINDS: &[&str] = &[
    "method_declaration",
    "property_declaration",
    "accessor_declaration",
];

fn matcher_for(kinds: &[&str]) -> Any<KindMatcher> {
    Any::new(
        kinds
            .iter()
            .map(|k| KindMatcher::new(k, SupportLang::CSharp))
            .collect::<Vec<_>>(),
    )
}

/// Extract every mockable member (methods and properties) from a C# tree.
///
/// # Errors
/// Returns `ParserError` if extraction fails.
pub fn extract<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
) -> Result<Vec<ExtractedMember>, ParserError> {
    let matcher = matcher_for(MEMBER_KINDS);
    let items: Vec<ExtractedMember> = root
        .root()
        .find_all(&matcher)
        .filter_map(|node| members::extract_member(&node))
        .collect();
    tracing::debug!(members = items.len(), "extracted C# members");
    Ok(items)
}

/// All trigger nodes in the tree, outermost first.
pub(crate) fn trigger_nodes<'r, D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &'r AstGrep<D>,
) -> Vec<Node<'r, D>> {
    let matcher = matcher_for(TRIGGER_KINDS);
    root.root().find_all(&matcher).map(|m| m.get_node().clone()).collect()
}

/// Actions offered when the selection is on `node`'s declaration.
///
/// Methods offer one action, properties two, accessors the one matching their
/// keyword. Anything else offers none.
pub(crate) fn actions_for_node<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Action> {
    match node.kind().as_ref() {
        "method_declaration" => members::method_description(node)
            .map(|member| Action::offered_for(&member))
            .unwrap_or_default(),
        "property_declaration" => members::property_description(node)
            .map(|member| Action::offered_for(&member))
            .unwrap_or_default(),
        "accessor_declaration" => accessor_action(node).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn accessor_action<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Action> {
    let accessor = AccessorKind::from_keyword(&helpers::accessor_keyword(node)?)?;
    let property = node
        .ancestors()
        .find(|parent| parent.kind().as_ref() != "accessor_list")?;
    if property.kind().as_ref() != "property_declaration" {
        tracing::debug!(parent = %property.kind(), "accessor outside a property; no action");
        return None;
    }
    let member = members::property_description(&property)?;
    Action::for_accessor(member, accessor).ok()
}

/// Byte range of the member body, which does not count as the declaration.
pub(crate) fn body_range<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<std::ops::Range<usize>> {
    node.field("body")
        .or_else(|| node.field("value"))
        .or_else(|| {
            node.children().find(|child| {
                matches!(child.kind().as_ref(), "block" | "arrow_expression_clause")
            })
        })
        .map(|body| body.range())
}

#[cfg(test)]
mod tests;
