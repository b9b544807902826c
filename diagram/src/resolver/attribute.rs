use dt_xsd::annotation::documentation;
use dt_xsd::builtins::{xml_attribute_type, XML_NAMESPACE};
use dt_xsd::schema::{xs_child, xs_children};
use dt_xsd::xstypes::{local_name, QName};
use log::debug;
use roxmltree::Node;

use super::content::wildcard_of;
use super::element::simple_type_string;
use super::{Resolver, Scope};
use crate::symbol::{AttributeSymbol, Symbol, SymbolKind};

/// The key attributes are sorted by: the reference if there is one, otherwise the name.
fn sort_key<'a>(attribute: &Node<'a, '_>) -> &'a str {
    attribute
        .attribute("ref")
        .or_else(|| attribute.attribute("name"))
        .unwrap_or_default()
}

fn constraint_of(attribute: Node) -> Option<String> {
    if let Some(default) = attribute.attribute("default") {
        Some(format!("default: {default}"))
    } else {
        attribute
            .attribute("fixed")
            .map(|fixed| format!("fixed: {fixed}"))
    }
}

impl<'r, 'a, 'input: 'a> Resolver<'r, 'a, 'input> {
    /// Emits the attributes declared on `node`: its own `<attribute>`s in alphabetical order,
    /// then the attribute groups it references, then its attribute wildcard.
    pub(super) fn process_attributes(&mut self, node: Node<'a, 'input>) {
        let mut attributes: Vec<_> = xs_children(node, "attribute").collect();
        attributes.sort_by_key(|attribute| sort_key(attribute));
        for attribute in attributes {
            self.append_attribute(attribute);
        }

        self.process_attribute_group_references(node);
        self.append_any_attribute(node);
    }

    fn process_attribute_group_references(&mut self, node: Node<'a, 'input>) {
        for reference_site in xs_children(node, "attributeGroup") {
            let Some(reference) = reference_site.attribute("ref") else {
                continue;
            };
            let Some(group) = self.registry.lookup_attribute_group(reference) else {
                debug!("Unresolved attribute group reference {reference:?}");
                continue;
            };

            self.guarded(Scope::attribute_groups, group, |resolver| {
                // declared order, unlike attributes declared directly on a type
                for attribute in xs_children(group, "attribute") {
                    resolver.append_attribute(attribute);
                }
                resolver.process_attribute_group_references(group);
                resolver.append_any_attribute(group);
            });
        }
    }

    fn append_attribute(&mut self, attribute: Node<'a, 'input>) {
        if attribute.attribute("use") == Some("prohibited") {
            return;
        }

        let required = attribute.attribute("use") == Some("required");
        let symbol = match attribute.attribute("ref") {
            Some(reference) => self.attribute_reference(attribute, reference, required),
            None => AttributeSymbol {
                name: attribute.attribute("name").unwrap_or_default().to_string(),
                namespace: self.local_attribute_namespace(attribute),
                type_string: attribute_type_string(attribute),
                required,
                constraint: constraint_of(attribute),
            },
        };

        self.place_leaf(
            Symbol::new(SymbolKind::Attribute(symbol))
                .with_documentation(documentation(attribute)),
        );
    }

    /// Attributes of the XML namespace get their well-known types. Other references keep their
    /// name and namespace but are not looked up.
    fn attribute_reference(
        &self,
        reference_site: Node<'a, 'input>,
        reference: &str,
        required: bool,
    ) -> AttributeSymbol {
        let local = local_name(reference);
        let qname = QName::parse(reference, reference_site)
            .map_err(|e| debug!("Attribute reference {reference:?}: {e}"))
            .ok();

        let symbol = AttributeSymbol {
            required,
            constraint: constraint_of(reference_site),
            ..AttributeSymbol::default()
        };
        match qname {
            Some(qname) if qname.is_xml_namespace() => AttributeSymbol {
                name: format!("xml:{local}"),
                namespace: Some(XML_NAMESPACE.to_string()),
                type_string: xml_attribute_type(local).map(String::from),
                ..symbol
            },
            qname => AttributeSymbol {
                name: local.to_string(),
                namespace: qname.and_then(|qname| qname.namespace_name),
                ..symbol
            },
        }
    }

    fn local_attribute_namespace(&self, attribute: Node) -> Option<String> {
        let qualified = match attribute.attribute("form") {
            Some(form) => form == "qualified",
            None => self.model.qualified_attributes,
        };
        attribute
            .attribute("targetNamespace")
            .or(self.model.target_namespace.filter(|_| qualified))
            .map(String::from)
    }

    fn append_any_attribute(&mut self, node: Node<'a, 'input>) {
        if let Some(any_attribute) = xs_child(node, "anyAttribute") {
            self.place_leaf(
                Symbol::new(SymbolKind::AnyAttribute(wildcard_of(any_attribute)))
                    .with_documentation(documentation(any_attribute)),
            );
        }
    }
}

fn attribute_type_string(attribute: Node) -> Option<String> {
    if let Some(type_name) = attribute.attribute("type") {
        Some(format!("type: {type_name}"))
    } else if let Some(simple_type) = xs_child(attribute, "simpleType") {
        simple_type_string(simple_type)
    } else {
        Some("type: anySimpleType".to_string())
    }
}

