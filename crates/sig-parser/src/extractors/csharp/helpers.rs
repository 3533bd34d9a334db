use ast_grep_core::Node;
use sig_core::{ParameterDescription, Visibility};

/// Parameter tokens that may precede the type.
const PARAMETER_MODIFIERS: &[&str] = &["ref", "out", "in", "params", "this", "scoped", "readonly"];

pub(super) fn extract_modifiers<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|child| child.kind().as_ref() == "modifier")
        .map(|child| child.text().to_string())
        .collect()
}

pub(super) fn visibility_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Visibility {
    Visibility::from_modifiers(&extract_modifiers(node))
}

/// Visibility override declared on an accessor, if it has access modifiers.
pub(super) fn accessor_visibility<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Visibility> {
    let modifiers = extract_modifiers(node);
    let has_access_modifier = modifiers
        .iter()
        .any(|m| matches!(m.as_str(), "public" | "protected" | "internal" | "private"));
    has_access_modifier.then(|| Visibility::from_modifiers(&modifiers))
}

pub(super) fn owner_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.ancestors()
        .find(|parent| {
            matches!(
                parent.kind().as_ref(),
                "class_declaration"
                    | "record_declaration"
                    | "struct_declaration"
                    | "interface_declaration"
            )
        })
        .and_then(|parent| parent.field("name").map(|n| n.text().to_string()))
}

pub(super) fn return_type_text<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("returns")
        .or_else(|| node.field("type"))
        .map(|rtype| rtype.text().to_string())
}

pub(super) fn extract_type_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(list) = node.field("type_parameters").or_else(|| {
        node.children()
            .find(|child| child.kind().as_ref() == "type_parameter_list")
    }) else {
        return Vec::new();
    };

    list.children()
        .filter(|child| child.kind().as_ref() == "type_parameter")
        .map(|child| {
            child
                .field("name")
                .map_or_else(|| child.text().to_string(), |name| name.text().to_string())
        })
        .collect()
}

pub(super) fn extract_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<ParameterDescription> {
    let Some(params) = node.field("parameters").or_else(|| {
        node.children()
            .find(|child| child.kind().as_ref() == "parameter_list")
    }) else {
        return Vec::new();
    };

    params
        .children()
        .filter(|child| matches!(child.kind().as_ref(), "parameter" | "parameter_array"))
        .filter_map(|child| parameter_description(&child))
        .collect()
}

fn parameter_description<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ParameterDescription> {
    let name = node.field("name")?.text().to_string();
    let type_node = node.field("type")?;
    let type_name = type_node.text().to_string();

    // Modifiers are whatever precedes the type inside the parameter's own text.
    let text = node.text();
    let prefix_len = type_node
        .range()
        .start
        .saturating_sub(node.range().start)
        .min(text.len());
    let modifier = parameter_modifier(&text[..prefix_len]);

    Some(ParameterDescription {
        name,
        type_name,
        modifier,
    })
}

/// Pick the passing-mode keyword from the tokens before a parameter's type.
///
/// `ref`/`out` win over other keywords (`this ref int x` is a `ref` parameter).
pub(super) fn parameter_modifier(prefix: &str) -> Option<String> {
    let stripped = strip_attributes(prefix);
    let tokens: Vec<&str> = stripped
        .split_whitespace()
        .filter(|token| PARAMETER_MODIFIERS.contains(token))
        .collect();
    tokens
        .iter()
        .find(|token| matches!(**token, "ref" | "out"))
        .or_else(|| tokens.first())
        .map(|token| (*token).to_string())
}

fn strip_attributes(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                out.push(' ');
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Keyword of an accessor declaration (`get`, `set`, `init`, `add`, `remove`).
pub(super) fn accessor_keyword<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    if let Some(name) = node.field("name") {
        return Some(name.text().to_string());
    }
    node.children()
        .map(|child| child.text().to_string())
        .find(|text| matches!(text.as_str(), "get" | "set" | "init" | "add" | "remove"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_from_prefix() {
        assert_eq!(parameter_modifier("ref "), Some("ref".into()));
        assert_eq!(parameter_modifier("out "), Some("out".into()));
        assert_eq!(parameter_modifier("this ref "), Some("ref".into()));
        assert_eq!(parameter_modifier("params "), Some("params".into()));
        assert_eq!(parameter_modifier(""), None);
    }

    #[test]
    fn attributes_are_ignored() {
        assert_eq!(parameter_modifier("[NotNull] out "), Some("out".into()));
        assert_eq!(parameter_modifier("[In, Out(ref)] "), None);
    }
}
