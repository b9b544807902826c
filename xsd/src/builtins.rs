use std::collections::HashMap;

use lazy_static::lazy_static;

// Namespaces defined by XML Schema Part 1, §1.3.1
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Local name of the built-in `xs:anyType`
pub const XS_ANY_TYPE_NAME: &str = "anyType";

lazy_static! {
    /// Type strings for the attributes of the XML namespace, which are declared in `xml.xsd`
    /// rather than in the schema document being displayed.
    static ref XML_ATTRIBUTE_TYPES: HashMap<&'static str, &'static str> = HashMap::from([
        ("lang", "type: xs:language"),
        ("space", "base: xs:NCName"),
        ("base", "type: xs:anyURI"),
        ("id", "type: xs:ID"),
    ]);
}

/// Returns the fixed type string of `xml:<local_name>`, if it is one of the XML namespace
/// attributes.
pub fn xml_attribute_type(local_name: &str) -> Option<&'static str> {
    XML_ATTRIBUTE_TYPES.get(local_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_all_xml_namespace_attributes() {
        for name in ["lang", "space", "base", "id"] {
            assert!(xml_attribute_type(name).is_some(), "xml:{name}");
        }
        assert_eq!(xml_attribute_type("other"), None);
    }
}
