use std::fmt;

use roxmltree::Node;

use super::values::attribute_or;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaxOccurs {
    Unbounded,
    Count(u64),
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("∞"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// The occurrence range of a particle, as given by its `minOccurs` and `maxOccurs` attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cardinality {
    pub min_occurs: u64,
    pub max_occurs: MaxOccurs,
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}

impl Cardinality {
    pub const EXACTLY_ONE: Self = Self {
        min_occurs: 1,
        max_occurs: MaxOccurs::Count(1),
    };

    pub const ANY_NUMBER: Self = Self {
        min_occurs: 0,
        max_occurs: MaxOccurs::Unbounded,
    };

    /// Reads the occurrence range of `particle`. Absent attributes default to 1.
    pub fn from_xml(particle: Node) -> Self {
        Self {
            min_occurs: attribute_or(particle, "minOccurs", 1),
            max_occurs: attribute_or(particle, "maxOccurs", MaxOccurs::Count(1)),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    /// The range as displayed in a diagram box, e.g. `0..∞`. The default range `1..1` is not
    /// displayed at all.
    pub fn label(&self) -> Option<String> {
        if *self == Self::EXACTLY_ONE {
            None
        } else {
            Some(format!("{}..{}", self.min_occurs, self.max_occurs))
        }
    }
}
