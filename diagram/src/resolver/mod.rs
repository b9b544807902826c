//! Expansion of the schema's element graph into a presentation [`Tree`].
//!
//! The resolver walks element declarations, following type, group and reference indirections,
//! and reports what it finds to a [`TreeBuilder`] as a balanced sequence of appends and ascends.
//! Element declarations currently being expanded are kept on a visitation stack; reaching one of
//! them again cuts the expansion short, which keeps the tree finite for recursive schemas.

mod attribute;
mod content;
mod element;

use dt_xsd::{Cardinality, Registry, SchemaModel};
use log::{debug, warn};
use roxmltree::{Node, NodeId};

use crate::symbol::{Symbol, SymbolKind};
use crate::tree::{SymbolId, Tree, TreeBuilder};

/// What to resolve, and how deep.
#[derive(Clone, Debug, Default)]
pub struct ResolveOptions {
    /// Name of the global element to display. `None` displays every global element below a
    /// synthetic schema root.
    pub root: Option<String>,
    /// Only expand the content of the displayed root element(s); the elements one level below
    /// are shown without their content.
    pub one_node_only: bool,
}

/// Constructs whose expansion is in progress within the current element's content.
///
/// These guard against malformed schemas (a group containing itself, a type deriving from
/// itself). Re-entry through an element declaration is legal and handled by the visitation
/// stack, so the scope is reset whenever an element's content is entered.
#[derive(Debug, Default)]
struct Scope {
    groups: Vec<NodeId>,
    attribute_groups: Vec<NodeId>,
    derivations: Vec<NodeId>,
}

impl Scope {
    fn groups(&mut self) -> &mut Vec<NodeId> {
        &mut self.groups
    }

    fn attribute_groups(&mut self) -> &mut Vec<NodeId> {
        &mut self.attribute_groups
    }

    fn derivations(&mut self) -> &mut Vec<NodeId> {
        &mut self.derivations
    }
}

pub struct Resolver<'r, 'a, 'input> {
    model: &'r SchemaModel<'a, 'input>,
    registry: &'r Registry<'a, 'input>,
    one_node_only: bool,
    builder: TreeBuilder,
    visiting: Vec<NodeId>,
    scope: Scope,
}

impl<'r, 'a, 'input: 'a> Resolver<'r, 'a, 'input> {
    pub fn new(
        model: &'r SchemaModel<'a, 'input>,
        registry: &'r Registry<'a, 'input>,
        one_node_only: bool,
    ) -> Self {
        Self {
            model,
            registry,
            one_node_only,
            builder: TreeBuilder::new(),
            visiting: Vec::new(),
            scope: Scope::default(),
        }
    }

    /// Expands the global element named `root`, or every global element below a synthetic
    /// schema root if `root` is `None`.
    ///
    /// An empty model or an unknown root name produce an empty tree.
    pub fn resolve(mut self, root: Option<&str>) -> Tree {
        if self.model.is_empty() {
            warn!("Document has no schema element, nothing to resolve");
            return self.builder.finish();
        }

        match root {
            Some(name) => match self.registry.lookup_element(name) {
                Some(element) => self.expand_element(element, Cardinality::default(), Vec::new()),
                None => warn!("No global element named {name:?}"),
            },
            None => {
                self.builder.set_root(Symbol::new(SymbolKind::Schema));
                for element in self.model.global_elements() {
                    self.expand_element(element, Cardinality::default(), Vec::new());
                }
                self.builder.ascend();
            }
        }

        self.builder.finish()
    }

    /// Attaches `symbol` at the insertion point and descends into it; the first symbol placed
    /// becomes the root.
    fn place(&mut self, symbol: Symbol) -> SymbolId {
        if self.builder.cursor().is_none() {
            self.builder.set_root(symbol)
        } else {
            self.builder.append(symbol)
        }
    }

    fn place_leaf(&mut self, symbol: Symbol) -> SymbolId {
        let id = self.place(symbol);
        self.builder.ascend();
        id
    }

    /// Runs `expand` with `node` pushed on one of the scope's guard stacks, unless it is
    /// already there.
    fn guarded(
        &mut self,
        stack: fn(&mut Scope) -> &mut Vec<NodeId>,
        node: Node<'a, 'input>,
        expand: impl FnOnce(&mut Self),
    ) {
        if stack(&mut self.scope).contains(&node.id()) {
            warn!(
                "<{}> {:?} re-enters itself, skipping",
                node.tag_name().name(),
                node.attribute("name").unwrap_or_default()
            );
            return;
        }
        stack(&mut self.scope).push(node.id());
        expand(self);
        stack(&mut self.scope).pop();
    }
}

/// Resolves the schema into a presentation tree according to `options`.
pub fn resolve<'a, 'input: 'a>(model: &SchemaModel<'a, 'input>, options: &ResolveOptions) -> Tree {
    let registry = Registry::collect(model);
    debug!(
        "Resolving {} with {} global elements",
        options.root.as_deref().unwrap_or("the whole schema"),
        registry.element_names().len()
    );
    Resolver::new(model, &registry, options.one_node_only).resolve(options.root.as_deref())
}
