//! Plain-text rendering of a laid-out diagram tree.
//!
//! Every symbol is printed on one line with its path code, kind, box and displayed texts,
//! indented by depth. Description lines follow, prefixed with `>`.

use std::io::{self, Write};

use dt_xsd_diagram::symbol::SymbolKind;
use dt_xsd_diagram::{SymbolId, Tree};

fn push(fields: &mut Vec<String>, text: Option<&str>) {
    if let Some(text) = text {
        fields.push(text.to_string());
    }
}

fn flag(fields: &mut Vec<String>, set: bool, name: &str) {
    if set {
        fields.push(name.to_string());
    }
}

/// The texts a box displays, in display order.
fn fields(kind: &SymbolKind) -> Vec<String> {
    let mut fields = Vec::new();
    match kind {
        SymbolKind::Schema | SymbolKind::Loop => {}
        SymbolKind::Element(element) => {
            fields.push(element.name.clone());
            push(&mut fields, element.namespace.as_deref());
            push(&mut fields, element.type_string.as_deref());
            push(&mut fields, element.cardinality.as_deref());
            flag(&mut fields, element.nillable, "nillable");
            flag(&mut fields, element.abstract_, "abstract");
        }
        SymbolKind::Attribute(attribute) => {
            fields.push(attribute.name.clone());
            push(&mut fields, attribute.namespace.as_deref());
            push(&mut fields, attribute.type_string.as_deref());
            push(&mut fields, attribute.constraint.as_deref());
            flag(&mut fields, attribute.required, "required");
        }
        SymbolKind::Sequence(compositor)
        | SymbolKind::Choice(compositor)
        | SymbolKind::All(compositor) => push(&mut fields, compositor.cardinality.as_deref()),
        SymbolKind::Any(wildcard) | SymbolKind::AnyAttribute(wildcard) => {
            fields.push(wildcard.namespace.clone());
            fields.push(format!("process: {}", wildcard.process_contents));
            push(&mut fields, wildcard.cardinality.as_deref());
        }
        SymbolKind::Key(constraint)
        | SymbolKind::Keyref(constraint)
        | SymbolKind::Unique(constraint) => {
            fields.push(constraint.name.clone());
            push(&mut fields, constraint.namespace.as_deref());
            if let Some(refer) = &constraint.refer {
                fields.push(format!("refer: {refer}"));
            }
        }
        SymbolKind::Selector(path) | SymbolKind::Field(path) => fields.push(path.xpath.clone()),
    }
    fields
}

fn write_symbol(out: &mut impl Write, tree: &Tree, id: SymbolId) -> io::Result<()> {
    let symbol = tree.get(id);
    let path_code = tree.path_code(id);
    let indent = "  ".repeat(path_code.matches('_').count() - 1);
    let geometry = symbol.geometry;

    write!(
        out,
        "{indent}{path_code} {} ({}, {}) {}x{}",
        symbol.kind.display_name(),
        geometry.x,
        geometry.y,
        geometry.width,
        geometry.height
    )?;
    for field in fields(&symbol.kind) {
        write!(out, " | {field}")?;
    }
    writeln!(out)?;

    for line in &symbol.description {
        writeln!(out, "{indent}  > {line}")?;
    }
    Ok(())
}

/// Writes the whole tree in pre-order.
pub fn write_outline(out: &mut impl Write, tree: &Tree) -> io::Result<()> {
    for id in tree.iter() {
        write_symbol(out, tree, id)?;
    }
    Ok(())
}
