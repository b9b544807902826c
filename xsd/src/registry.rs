use std::collections::HashMap;

use log::debug;
use roxmltree::Node;

use super::schema::{is_xs_element, xs_tag_name, SchemaModel};
use super::xstypes::local_name;

/// A named type definition found in the schema document.
#[derive(Copy, Clone, Debug)]
pub enum TypeDefinition<'a, 'input> {
    Simple(Node<'a, 'input>),
    Complex(Node<'a, 'input>),
}

impl<'a, 'input> TypeDefinition<'a, 'input> {
    pub fn complex(self) -> Option<Node<'a, 'input>> {
        match self {
            Self::Complex(complex) => Some(complex),
            Self::Simple(_) => None,
        }
    }
}

/// Lookup tables for the named constructs of a schema document, keyed by local name.
///
/// Duplicate names are not an error; the declaration that comes last in document order wins.
#[derive(Clone, Debug, Default)]
pub struct Registry<'a, 'input> {
    complex_types: HashMap<&'a str, Node<'a, 'input>>,
    simple_types: HashMap<&'a str, Node<'a, 'input>>,
    model_groups: HashMap<&'a str, Node<'a, 'input>>,
    attribute_groups: HashMap<&'a str, Node<'a, 'input>>,
    elements: HashMap<&'a str, Node<'a, 'input>>,
    element_names: Vec<&'a str>,
    target_namespace: Option<&'a str>,
}

macro_rules! impl_lookup {
    ($fn_name:ident: $field_name:ident) => {
        /// Looks up a declaration by name; a namespace prefix on `name` is ignored.
        pub fn $fn_name(&self, name: &str) -> Option<Node<'a, 'input>> {
            self.$field_name.get(local_name(name)).copied()
        }
    };
}

impl<'a, 'input: 'a> Registry<'a, 'input> {
    /// Scans the schema document once and records every named construct.
    pub fn collect(model: &SchemaModel<'a, 'input>) -> Self {
        let mut registry = Self {
            target_namespace: model.target_namespace,
            ..Self::default()
        };
        let Some(schema) = model.schema_node() else {
            return registry;
        };

        for node in schema.descendants().filter(|n| n.is_element()) {
            let Some(name) = node.attribute("name") else {
                continue;
            };
            let table = match xs_tag_name(node) {
                Some("complexType") => &mut registry.complex_types,
                Some("simpleType") => &mut registry.simple_types,
                Some("group") => &mut registry.model_groups,
                Some("attributeGroup") => &mut registry.attribute_groups,
                _ => continue,
            };
            if table.insert(name, node).is_some() {
                debug!("Duplicate declaration of {name:?}, keeping the last one");
            }
        }

        for element in schema.children().filter(|c| is_xs_element(*c, "element")) {
            if let Some(name) = element.attribute("name") {
                if registry.elements.insert(name, element).is_none() {
                    registry.element_names.push(name);
                }
            }
        }

        registry
    }

    /// Looks up a type definition by name. Complex types take precedence over simple types.
    /// Built-in XSD types are not registered and yield `None`.
    pub fn lookup_type(&self, name: &str) -> Option<TypeDefinition<'a, 'input>> {
        let name = local_name(name);
        self.complex_types
            .get(name)
            .map(|node| TypeDefinition::Complex(*node))
            .or_else(|| {
                self.simple_types
                    .get(name)
                    .map(|node| TypeDefinition::Simple(*node))
            })
    }

    impl_lookup!(lookup_group: model_groups);
    impl_lookup!(lookup_attribute_group: attribute_groups);
    impl_lookup!(lookup_element: elements);

    /// Names of the global element declarations, in document order.
    pub fn element_names(&self) -> &[&'a str] {
        &self.element_names
    }

    /// The namespace a global element lives in: its own `targetNamespace` attribute if present,
    /// otherwise the schema's target namespace. `None` if the element does not exist or has no
    /// namespace.
    pub fn element_namespace(&self, name: &str) -> Option<&'a str> {
        let element = self.lookup_element(name)?;
        element
            .attribute("targetNamespace")
            .or(self.target_namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const SCHEMA: &str = r#"
        <xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
          <xs:complexType name="Shared"><xs:sequence/></xs:complexType>
          <xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>
          <xs:simpleType name="Shared"><xs:restriction base="xs:string"/></xs:simpleType>
          <xs:group name="Parts"><xs:sequence/></xs:group>
          <xs:attributeGroup name="Common"/>
          <xs:element name="Root">
            <xs:complexType>
              <xs:sequence><xs:element name="Nested"/></xs:sequence>
            </xs:complexType>
          </xs:element>
          <xs:element name="Other" type="Code"/>
          <xs:element name="Other" type="xs:int"/>
        </xs:schema>"#;

    #[test]
    fn looks_up_by_local_name() {
        let doc = Document::parse(SCHEMA).unwrap();
        let registry = Registry::collect(&SchemaModel::new(&doc));

        assert!(matches!(
            registry.lookup_type("tns:Code"),
            Some(TypeDefinition::Simple(_))
        ));
        assert!(registry.lookup_type("Shared").unwrap().complex().is_some());
        assert!(registry.lookup_group("Parts").is_some());
        assert!(registry.lookup_attribute_group("t:Common").is_some());
        assert!(registry.lookup_type("xs:string").is_none());
        assert!(registry.lookup_group("Missing").is_none());
    }

    #[test]
    fn only_top_level_elements_are_registered() {
        let doc = Document::parse(SCHEMA).unwrap();
        let registry = Registry::collect(&SchemaModel::new(&doc));

        assert!(registry.lookup_element("Nested").is_none());
        assert_eq!(registry.element_names(), ["Root", "Other"]);
        // last declaration wins
        let other = registry.lookup_element("Other").unwrap();
        assert_eq!(other.attribute("type"), Some("xs:int"));
    }

    #[test]
    fn element_namespace_defaults_to_target_namespace() {
        let doc = Document::parse(SCHEMA).unwrap();
        let registry = Registry::collect(&SchemaModel::new(&doc));

        assert_eq!(registry.element_namespace("Root"), Some("urn:t"));
        assert_eq!(registry.element_namespace("Missing"), None);
    }

    #[test]
    fn empty_model_has_empty_registry() {
        let doc = Document::parse("<notASchema/>").unwrap();
        let registry = Registry::collect(&SchemaModel::new(&doc));
        assert!(registry.element_names().is_empty());
    }
}
