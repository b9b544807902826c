use dt_xsd::annotation::documentation;
use dt_xsd::schema::{xs_child, xs_tag_name};
use dt_xsd::values::attribute_or;
use dt_xsd::Cardinality;
use log::{debug, warn};
use roxmltree::Node;

use super::{Resolver, Scope};
use crate::symbol::{CompositorSymbol, ProcessContents, Symbol, SymbolKind, WildcardSymbol};

const COMPOSITOR_TAG_NAMES: [&str; 3] = ["sequence", "choice", "all"];

impl<'r, 'a, 'input: 'a> Resolver<'r, 'a, 'input> {
    /// Emits the content of a complex type: inherited members first, then the type's own
    /// particles and attributes.
    pub(super) fn process_complex_type(&mut self, complex_type: Node<'a, 'input>) {
        let content = xs_child(complex_type, "complexContent")
            .or_else(|| xs_child(complex_type, "simpleContent"));

        match content {
            Some(content) => {
                let derivation =
                    xs_child(content, "extension").or_else(|| xs_child(content, "restriction"));
                if let Some(derivation) = derivation {
                    self.process_derivation(complex_type, derivation);
                }
            }
            None => self.process_particles_and_attributes(complex_type),
        }
    }

    /// Handles `<extension>` and `<restriction>` alike: the base type's content is emitted
    /// before the derivation's own, so inherited members come first along the whole chain.
    fn process_derivation(&mut self, complex_type: Node<'a, 'input>, derivation: Node<'a, 'input>) {
        if let Some(base) = derivation.attribute("base") {
            match self.registry.lookup_type(base).and_then(|t| t.complex()) {
                Some(base_type) => {
                    self.guarded(Scope::derivations, complex_type, |resolver| {
                        if resolver.scope.derivations.contains(&base_type.id()) {
                            warn!("Type derivation cycle through {base:?}, skipping base");
                        } else {
                            resolver.process_complex_type(base_type);
                        }
                    });
                }
                None => debug!("Base type {base:?} has no complex content to inherit"),
            }
        }

        self.process_particles_and_attributes(derivation);
    }

    /// The content shared by complex types and derivations: one model group, then attributes.
    pub(super) fn process_particles_and_attributes(&mut self, node: Node<'a, 'input>) {
        let particle = node.children().find(|child| {
            matches!(
                xs_tag_name(*child),
                Some("sequence" | "choice" | "all" | "group")
            )
        });
        match particle {
            Some(group) if xs_tag_name(group) == Some("group") => {
                self.process_group_reference(group)
            }
            Some(compositor) => {
                self.process_compositor(compositor, Cardinality::from_xml(compositor))
            }
            None => {}
        }

        self.process_attributes(node);
    }

    fn process_compositor(&mut self, compositor: Node<'a, 'input>, cardinality: Cardinality) {
        let payload = CompositorSymbol {
            cardinality: cardinality.label(),
        };
        let kind = match xs_tag_name(compositor) {
            Some("choice") => SymbolKind::Choice(payload),
            Some("all") => SymbolKind::All(payload),
            _ => SymbolKind::Sequence(payload),
        };
        self.place(Symbol::new(kind).with_documentation(documentation(compositor)));

        for child in compositor.children() {
            match xs_tag_name(child) {
                Some("element") => {
                    self.expand_element(child, Cardinality::from_xml(child), Vec::new())
                }
                Some("group") => self.process_group_reference(child),
                Some(tag_name) if COMPOSITOR_TAG_NAMES.contains(&tag_name) => {
                    self.process_compositor(child, Cardinality::from_xml(child))
                }
                Some("any") => self.append_any(child),
                _ => {}
            }
        }

        self.builder.ascend();
    }

    /// Inlines the model group a `<group ref="...">` points to. The reference itself is not
    /// displayed; its occurrence range applies to the group's compositor.
    fn process_group_reference(&mut self, reference_site: Node<'a, 'input>) {
        let Some(reference) = reference_site.attribute("ref") else {
            return;
        };
        let Some(group) = self.registry.lookup_group(reference) else {
            debug!("Unresolved group reference {reference:?}");
            return;
        };

        let compositor = group.children().find(|child| {
            xs_tag_name(*child).is_some_and(|tag_name| COMPOSITOR_TAG_NAMES.contains(&tag_name))
        });
        if let Some(compositor) = compositor {
            self.guarded(Scope::groups, group, |resolver| {
                resolver.process_compositor(compositor, Cardinality::from_xml(reference_site))
            });
        }
    }

    fn append_any(&mut self, any: Node<'a, 'input>) {
        let cardinality = Cardinality::from_xml(any);
        let symbol = WildcardSymbol {
            cardinality: cardinality.label(),
            ..wildcard_of(any)
        };
        self.place_leaf(
            Symbol::new(SymbolKind::Any(symbol)).with_documentation(documentation(any)),
        );
    }
}

/// Reads the namespace constraint and processing mode shared by `<any>` and `<anyAttribute>`.
pub(super) fn wildcard_of(wildcard: Node) -> WildcardSymbol {
    WildcardSymbol {
        namespace: attribute_or(wildcard, "namespace", "##any").to_string(),
        process_contents: wildcard
            .attribute("processContents")
            .and_then(ProcessContents::from_xml)
            .unwrap_or_default(),
        cardinality: None,
    }
}
