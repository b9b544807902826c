//! The presentation tree's node type.
//!
//! Every diagram box is a [`Symbol`]: shared geometry and documentation fields, plus a
//! [`SymbolKind`] carrying the fields that are specific to the kind of box.

use std::fmt;

use crate::tree::SymbolId;

/// How strictly the content matched by a wildcard is validated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ProcessContents {
    #[default]
    Strict,
    Lax,
    Skip,
}

impl ProcessContents {
    pub fn from_xml(value: &str) -> Option<Self> {
        match value.trim() {
            "strict" => Some(Self::Strict),
            "lax" => Some(Self::Lax),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Lax => "lax",
            Self::Skip => "skip",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSymbol {
    pub name: String,
    pub namespace: Option<String>,
    pub type_string: Option<String>,
    pub cardinality: Option<String>,
    pub optional: bool,
    pub nillable: bool,
    pub abstract_: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSymbol {
    pub name: String,
    pub namespace: Option<String>,
    pub type_string: Option<String>,
    pub required: bool,
    pub constraint: Option<String>,
}

/// Payload of the `Sequence`, `Choice` and `All` compositors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompositorSymbol {
    pub cardinality: Option<String>,
}

/// Payload of the `Any` and `AnyAttribute` wildcards. Attribute wildcards have no cardinality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WildcardSymbol {
    pub namespace: String,
    pub process_contents: ProcessContents,
    pub cardinality: Option<String>,
}

/// Payload of the `Key`, `Keyref` and `Unique` identity constraints. `refer` is only set for
/// key references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityConstraintSymbol {
    pub name: String,
    pub namespace: Option<String>,
    pub refer: Option<String>,
}

/// Payload of `Selector` and `Field`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XPathSymbol {
    pub xpath: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// Synthetic root when the whole schema is displayed.
    Schema,
    Element(ElementSymbol),
    Attribute(AttributeSymbol),
    Sequence(CompositorSymbol),
    Choice(CompositorSymbol),
    All(CompositorSymbol),
    Any(WildcardSymbol),
    AnyAttribute(WildcardSymbol),
    Key(IdentityConstraintSymbol),
    Keyref(IdentityConstraintSymbol),
    Unique(IdentityConstraintSymbol),
    Selector(XPathSymbol),
    Field(XPathSymbol),
    /// Marks a cycle in the schema that was cut instead of being expanded again.
    Loop,
}

impl SymbolKind {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Element(_) => "element",
            Self::Attribute(_) => "attribute",
            Self::Sequence(_) => "sequence",
            Self::Choice(_) => "choice",
            Self::All(_) => "all",
            Self::Any(_) => "any",
            Self::AnyAttribute(_) => "anyAttribute",
            Self::Key(_) => "key",
            Self::Keyref(_) => "keyref",
            Self::Unique(_) => "unique",
            Self::Selector(_) => "selector",
            Self::Field(_) => "field",
            Self::Loop => "loop",
        }
    }

    pub fn element(&self) -> Option<&ElementSymbol> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn attribute(&self) -> Option<&AttributeSymbol> {
        match self {
            Self::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    /// Whether boxes of this kind show their documentation below the box.
    pub const fn shows_documentation(&self) -> bool {
        matches!(
            self,
            Self::Element(_)
                | Self::Attribute(_)
                | Self::Any(_)
                | Self::AnyAttribute(_)
                | Self::Key(_)
                | Self::Keyref(_)
                | Self::Unique(_)
        )
    }
}

/// Position and size of a box, in diagram units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// A node of the presentation tree.
///
/// Symbols are created by the resolver with default geometry; the layout engine fills in the
/// geometry and the wrapped description afterwards.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub geometry: Geometry,
    pub documentation: Vec<String>,
    /// The documentation, word-wrapped to the width of the box.
    pub description: Vec<String>,
    /// Vertical space reserved below the box for the description.
    pub additional_height: i32,
    pub(crate) parent: Option<SymbolId>,
    pub(crate) children: Vec<SymbolId>,
}

impl Symbol {
    pub fn new(kind: SymbolKind) -> Self {
        Self {
            kind,
            geometry: Geometry::default(),
            documentation: Vec::new(),
            description: Vec::new(),
            additional_height: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_documentation(mut self, documentation: Vec<String>) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn parent(&self) -> Option<SymbolId> {
        self.parent
    }

    pub fn children(&self) -> &[SymbolId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
