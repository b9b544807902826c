use dt_xsd::annotation::documentation;
use dt_xsd::builtins::XS_ANY_TYPE_NAME;
use dt_xsd::schema::{xs_child, xs_children, xs_tag_name};
use dt_xsd::values::attribute_or;
use dt_xsd::xstypes::local_name;
use dt_xsd::{Cardinality, MaxOccurs, TypeDefinition};
use log::debug;
use roxmltree::Node;

use super::Resolver;
use crate::symbol::{
    CompositorSymbol, ElementSymbol, IdentityConstraintSymbol, ProcessContents, Symbol,
    SymbolKind, WildcardSymbol, XPathSymbol,
};

/// The type line of an element box: the named type, the base of an inline simple type, or
/// `anyType` when nothing is declared. Elements with an inline complex type have no type line.
pub(super) fn type_string(element: Node) -> Option<String> {
    if let Some(type_name) = element.attribute("type") {
        Some(format!("type: {type_name}"))
    } else if xs_child(element, "complexType").is_some() {
        None
    } else if let Some(simple_type) = xs_child(element, "simpleType") {
        simple_type_string(simple_type)
    } else {
        Some(format!("type: {XS_ANY_TYPE_NAME}"))
    }
}

/// Describes an anonymous simple type by what it is derived from.
pub(super) fn simple_type_string(simple_type: Node) -> Option<String> {
    if let Some(restriction) = xs_child(simple_type, "restriction") {
        restriction.attribute("base").map(|base| format!("base: {base}"))
    } else if let Some(list) = xs_child(simple_type, "list") {
        list.attribute("itemType").map(|item| format!("list: {item}"))
    } else {
        xs_child(simple_type, "union")
            .and_then(|union| union.attribute("memberTypes"))
            .map(|members| format!("union: {members}"))
    }
}

impl<'r, 'a, 'input: 'a> Resolver<'r, 'a, 'input> {
    /// Expands an element declaration (or reference) with the occurrence range given at its use
    /// site. `documentation` is shown before the declaration's own documentation.
    pub(super) fn expand_element(
        &mut self,
        element: Node<'a, 'input>,
        cardinality: Cardinality,
        mut documentation_lines: Vec<String>,
    ) {
        if let Some(reference) = element.attribute("ref") {
            self.expand_element_reference(element, reference, cardinality);
            return;
        }

        let name = element.attribute("name").unwrap_or_default();
        debug!("Expanding element {name:?}");
        documentation_lines.extend(documentation(element));
        let symbol = ElementSymbol {
            name: name.to_string(),
            namespace: element
                .attribute("targetNamespace")
                .or(self.model.target_namespace)
                .map(String::from),
            type_string: type_string(element),
            cardinality: cardinality.label(),
            optional: cardinality.is_optional(),
            nillable: attribute_or(element, "nillable", false),
            abstract_: attribute_or(element, "abstract", false),
        };
        self.place(
            Symbol::new(SymbolKind::Element(symbol)).with_documentation(documentation_lines),
        );

        if self.visiting.contains(&element.id()) {
            debug!("Element {name:?} is already being expanded, inserting a loop");
            self.place_leaf(Symbol::new(SymbolKind::Loop));
            self.builder.ascend();
            return;
        }

        if !(self.one_node_only && !self.visiting.is_empty()) {
            // groups and derivations may legitimately recur below another element
            let outer_scope = std::mem::take(&mut self.scope);
            self.visiting.push(element.id());
            self.expand_element_content(element);
            self.visiting.pop();
            self.scope = outer_scope;

            self.expand_identity_constraints(element);
        }

        self.builder.ascend();
    }

    fn expand_element_reference(
        &mut self,
        reference_site: Node<'a, 'input>,
        reference: &str,
        cardinality: Cardinality,
    ) {
        let Some(target) = self.registry.lookup_element(reference) else {
            debug!("Unresolved element reference {reference:?}");
            return;
        };

        if self.visiting.contains(&target.id()) {
            debug!("Element reference {reference:?} closes a cycle, inserting a loop");
            self.place_leaf(Symbol::new(SymbolKind::Loop));
            return;
        }

        self.expand_element(target, cardinality, documentation(reference_site));
    }

    fn expand_element_content(&mut self, element: Node<'a, 'input>) {
        if let Some(complex_type) = xs_child(element, "complexType") {
            self.process_complex_type(complex_type);
        } else if let Some(type_name) = element.attribute("type") {
            match self.registry.lookup_type(type_name) {
                Some(TypeDefinition::Complex(complex_type)) => {
                    self.process_complex_type(complex_type)
                }
                Some(TypeDefinition::Simple(_)) => {}
                None if local_name(type_name) == XS_ANY_TYPE_NAME => self.any_type_content(),
                None => debug!("Type {type_name:?} is not declared in this schema"),
            }
        } else if xs_child(element, "simpleType").is_none() {
            self.any_type_content();
        }
    }

    /// The content model of `xs:anyType`: any number of arbitrary elements and any attributes.
    fn any_type_content(&mut self) {
        let sequence = CompositorSymbol {
            cardinality: Cardinality {
                min_occurs: 1,
                max_occurs: MaxOccurs::Unbounded,
            }
            .label(),
        };
        self.place(Symbol::new(SymbolKind::Sequence(sequence)));
        self.place_leaf(Symbol::new(SymbolKind::Any(WildcardSymbol {
            namespace: "##any".to_string(),
            process_contents: ProcessContents::Lax,
            cardinality: Cardinality::ANY_NUMBER.label(),
        })));
        self.builder.ascend();

        self.place_leaf(Symbol::new(SymbolKind::AnyAttribute(WildcardSymbol {
            namespace: "##any".to_string(),
            process_contents: ProcessContents::Lax,
            cardinality: None,
        })));
    }

    fn expand_identity_constraints(&mut self, element: Node<'a, 'input>) {
        for constraint in element.children() {
            let tag_name = xs_tag_name(constraint);
            if !matches!(tag_name, Some("key" | "keyref" | "unique")) {
                continue;
            }

            let symbol = IdentityConstraintSymbol {
                name: constraint.attribute("name").unwrap_or_default().to_string(),
                namespace: self.model.target_namespace.map(String::from),
                refer: None,
            };
            let kind = match tag_name {
                Some("key") => SymbolKind::Key(symbol),
                Some("keyref") => SymbolKind::Keyref(IdentityConstraintSymbol {
                    refer: constraint.attribute("refer").map(String::from),
                    ..symbol
                }),
                _ => SymbolKind::Unique(symbol),
            };
            self.place(Symbol::new(kind).with_documentation(documentation(constraint)));

            if let Some(selector) = xs_child(constraint, "selector") {
                self.place_leaf(Symbol::new(SymbolKind::Selector(xpath_of(selector))));
            }
            for field in xs_children(constraint, "field") {
                self.place_leaf(Symbol::new(SymbolKind::Field(xpath_of(field))));
            }

            self.builder.ascend();
        }
    }
}

fn xpath_of(node: Node) -> XPathSymbol {
    XPathSymbol {
        xpath: node.attribute("xpath").unwrap_or_default().to_string(),
    }
}
