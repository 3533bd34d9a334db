use ast_grep_core::Node;
use sig_core::{MemberDescription, MethodDescription, PropertyDescription, ReturnType};

use super::helpers;
use crate::types::ExtractedMember;

pub(super) fn method_description<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<MemberDescription> {
    let name = node.field("name")?.text().to_string();
    let Some(return_type) = helpers::return_type_text(node) else {
        tracing::warn!(method = %name, "method without return type; skipping");
        return None;
    };

    Some(MemberDescription::Method(MethodDescription {
        name,
        return_type: ReturnType::from_type_text(&return_type),
        visibility: helpers::visibility_of(node),
        type_parameters: helpers::extract_type_parameters(node),
        parameters: helpers::extract_parameters(node),
    }))
}

pub(super) fn property_description<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Option<MemberDescription> {
    let name = node.field("name")?.text().to_string();
    let type_name = node.field("type")?.text().to_string();

    let mut property = PropertyDescription {
        name,
        type_name,
        visibility: helpers::visibility_of(node),
        getter_visibility: None,
        setter_visibility: None,
    };

    for accessor in accessors(node) {
        let Some(keyword) = helpers::accessor_keyword(&accessor) else {
            continue;
        };
        let overridden = helpers::accessor_visibility(&accessor);
        match sig_core::AccessorKind::from_keyword(&keyword) {
            Some(sig_core::AccessorKind::Get) => property.getter_visibility = overridden,
            Some(sig_core::AccessorKind::Set) => property.setter_visibility = overridden,
            None => {}
        }
    }

    Some(MemberDescription::Property(property))
}

pub(super) fn accessors<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.field("accessors")
        .or_else(|| {
            node.children()
                .find(|child| child.kind().as_ref() == "accessor_list")
        })
        .map(|list| {
            list.children()
                .filter(|child| child.kind().as_ref() == "accessor_declaration")
                .collect()
        })
        .unwrap_or_default()
}

/// Describe any supported member node, with its location.
pub(super) fn extract_member<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ExtractedMember> {
    let member = match node.kind().as_ref() {
        "method_declaration" => method_description(node)?,
        "property_declaration" => property_description(node)?,
        _ => return None,
    };
    Some(ExtractedMember {
        member,
        owner: helpers::owner_name(node),
        start_line: node.start_pos().line() as u32 + 1,
        end_line: node.end_pos().line() as u32 + 1,
    })
}
