use super::builtins::XML_NAMESPACE;
use super::error::XsdError;
use std::fmt;

pub type NCName = String;
pub type AnyURI = String;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace_name: Option<AnyURI>,
    pub prefix: Option<String>,
    pub local_name: NCName,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix.as_ref() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

impl QName {
    pub fn qualified(
        prefix: impl Into<String>,
        local_name: impl Into<String>,
        context: roxmltree::Node,
    ) -> Result<Self, XsdError> {
        let prefix = prefix.into();
        let namespace_name = if prefix == "xml" {
            // The prefix xml is by definition bound to the namespace name
            // http://www.w3.org/XML/1998/namespace.
            // (Namespaces in XML 1.0, §3, Reserved Prefixes and Namespace Names)
            XML_NAMESPACE
        } else {
            context
                .lookup_namespace_uri(Some(&prefix))
                .ok_or_else(|| XsdError::NamePrefixNotResolved(prefix.clone()))?
        };
        Ok(Self {
            namespace_name: Some(namespace_name.to_string()),
            prefix: Some(prefix),
            local_name: local_name.into(),
        })
    }

    pub fn unqualified(local_name: impl Into<String>, context: roxmltree::Node) -> Self {
        // If there is a default namespace declaration in scope, the expanded name corresponding to
        // an unprefixed name has the URI of the default namespace as its namespace name.
        // (Namespaces in XML 1.0, §6.2)
        Self {
            namespace_name: context.lookup_namespace_uri(None).map(String::from),
            prefix: None,
            local_name: local_name.into(),
        }
    }

    /// Parses a (possibly prefixed) name, resolving the prefix against the namespace declarations
    /// in scope at `context`.
    pub fn parse(source: &str, context: roxmltree::Node) -> Result<Self, XsdError> {
        if let Some((prefix, local)) = source.split_once(':') {
            Self::qualified(prefix, local, context)
        } else {
            Ok(Self::unqualified(source, context))
        }
    }

    pub fn is_xml_namespace(&self) -> bool {
        self.namespace_name.as_deref() == Some(XML_NAMESPACE)
    }
}

/// Strips the namespace prefix from a reference, e.g. `tns:Address` becomes `Address`.
pub fn local_name(reference: &str) -> &str {
    reference
        .rsplit_once(':')
        .map(|(_, local)| local)
        .unwrap_or(reference)
}
