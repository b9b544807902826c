use roxmltree::{Node, NodeType};

use super::schema::{xs_children, XS_TAG_ANNOTATION};

/// Flattens the content of a `<documentation>` element to its text, dropping any markup.
fn content_to_text(node: Node, text: &mut String) {
    for child in node.children() {
        match child.node_type() {
            NodeType::Text => text.push_str(child.text().unwrap_or_default()),
            NodeType::Element => content_to_text(child, text),
            _ => {}
        }
    }
}

/// Extracts the user information of the `<annotation>` children of `node`: one string per
/// `<documentation>` element, in document order. Blank entries are skipped.
pub fn documentation(node: Node) -> Vec<String> {
    xs_children(node, XS_TAG_ANNOTATION)
        .flat_map(|annotation| xs_children(annotation, "documentation"))
        .filter_map(|documentation| {
            let mut text = String::new();
            content_to_text(documentation, &mut text);
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect()
}
