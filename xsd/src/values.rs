use log::warn;
use roxmltree::Node;

use crate::particle::MaxOccurs;

/// Conversion from an attribute's lexical form to the value the diagram works with.
///
/// Lexical forms the schema language would reject yield `None`, so callers can fall back to the
/// attribute's default value instead of failing the whole run.
pub trait ActualValue<'a>: Sized {
    fn convert(src: &'a str) -> Option<Self>;
}

impl<'a> ActualValue<'a> for &'a str {
    fn convert(src: &'a str) -> Option<Self> {
        Some(src)
    }
}

impl ActualValue<'_> for bool {
    fn convert(src: &str) -> Option<Self> {
        match src.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ActualValue<'_> for u64 {
    fn convert(src: &str) -> Option<Self> {
        src.trim().parse().ok()
    }
}

impl ActualValue<'_> for MaxOccurs {
    fn convert(src: &str) -> Option<Self> {
        match src.trim() {
            "unbounded" => Some(MaxOccurs::Unbounded),
            count => count.parse().ok().map(MaxOccurs::Count),
        }
    }
}

pub fn actual_value<'a, T: ActualValue<'a>>(x: &'a str) -> Option<T> {
    T::convert(x)
}

/// Reads attribute `name` of `node`, falling back to `default` when it is absent or malformed.
pub fn attribute_or<'a, 'input, T>(node: Node<'a, 'input>, name: &str, default: T) -> T
where
    T: ActualValue<'a>,
{
    match node.attribute(name) {
        Some(raw) => actual_value(raw).unwrap_or_else(|| {
            warn!(
                "Ignoring malformed value {raw:?} for attribute {name:?} on <{}>",
                node.tag_name().name()
            );
            default
        }),
        None => default,
    }
}
