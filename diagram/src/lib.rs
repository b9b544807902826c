//! Turns an XML Schema into a laid-out diagram tree.
//!
//! [`resolver`] expands the element declarations of a schema into an acyclic [`Tree`] of
//! [`Symbol`]s and [`layout`] assigns every symbol its box. Rendering the boxes is left to the
//! caller.

pub mod layout;
pub mod resolver;
pub mod symbol;
pub mod tree;

use dt_xsd::SchemaModel;

pub use layout::{layout, LayoutOptions};
pub use resolver::{resolve, ResolveOptions};
pub use symbol::{Geometry, Symbol, SymbolKind};
pub use tree::{SymbolId, Tree};

/// Resolves and lays out the schema in one go.
pub fn diagram<'a, 'input: 'a>(
    model: &SchemaModel<'a, 'input>,
    resolve_options: &ResolveOptions,
    layout_options: &LayoutOptions,
) -> Tree {
    let mut tree = resolve(model, resolve_options);
    layout(&mut tree, layout_options);
    tree
}
