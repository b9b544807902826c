use roxmltree::{Document, Node};

use super::builtins::XS_NAMESPACE;
use super::values::attribute_or;

pub const XS_TAG_ANNOTATION: &str = "annotation";

/// Returns whether `node` is the XSD element `<xs:{tag_name}>`.
pub fn is_xs_element(node: Node, tag_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == tag_name
        && node.tag_name().namespace() == Some(XS_NAMESPACE)
}

/// Iterates over the `<xs:{tag_name}>` children of `node`, in document order.
pub fn xs_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag_name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| is_xs_element(*child, tag_name))
}

/// Returns the first `<xs:{tag_name}>` child of `node`.
pub fn xs_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag_name: &'static str,
) -> Option<Node<'a, 'input>> {
    xs_children(node, tag_name).next()
}

/// Returns the local name of `node` if it belongs to the XSD namespace.
pub fn xs_tag_name<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    (node.is_element() && node.tag_name().namespace() == Some(XS_NAMESPACE))
        .then(|| node.tag_name().name())
}

/// A parsed schema document together with the schema-wide settings the diagram needs.
///
/// A document whose root is not `<xs:schema>` yields an empty model: it has no schema node and
/// resolves to an empty tree.
#[derive(Clone, Debug)]
pub struct SchemaModel<'a, 'input> {
    schema: Option<Node<'a, 'input>>,
    pub target_namespace: Option<&'a str>,
    pub qualified_attributes: bool,
}

impl<'a, 'input: 'a> SchemaModel<'a, 'input> {
    pub fn new(document: &'a Document<'input>) -> Self {
        let root = document.root_element();
        let schema = is_xs_element(root, "schema").then_some(root);
        Self {
            schema,
            target_namespace: schema.and_then(|s| s.attribute("targetNamespace")),
            qualified_attributes: schema
                .map(|s| attribute_or(s, "attributeFormDefault", "unqualified") == "qualified")
                .unwrap_or(false),
        }
    }

    pub fn schema_node(&self) -> Option<Node<'a, 'input>> {
        self.schema
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_none()
    }

    /// The global element declarations, in document order.
    pub fn global_elements(&self) -> impl Iterator<Item = Node<'a, 'input>> {
        self.schema
            .into_iter()
            .flat_map(|schema| xs_children(schema, "element"))
            .filter(|element| element.has_attribute("name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_schema_settings() {
        let doc = Document::parse(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t"
                          attributeFormDefault="qualified">
                 <xs:element name="a"/>
                 <xs:element ref="b"/>
                 <xs:element name="c"/>
               </xs:schema>"#,
        )
        .unwrap();
        let model = SchemaModel::new(&doc);
        assert!(!model.is_empty());
        assert_eq!(model.target_namespace, Some("urn:t"));
        assert!(model.qualified_attributes);
        let names: Vec<_> = model
            .global_elements()
            .filter_map(|e| e.attribute("name"))
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn non_schema_document_is_empty() {
        let doc = Document::parse("<root/>").unwrap();
        let model = SchemaModel::new(&doc);
        assert!(model.is_empty());
        assert_eq!(model.global_elements().count(), 0);
    }
}
