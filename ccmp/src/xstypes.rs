use crate::error::CcmpError;
use std::fmt;

/// The CCMP target namespace (RFC 6503 §12).
pub const XCON_CCMP_NAMESPACE: &str = "urn:ietf:params:xml:ns:xcon-ccmp";

/// Namespace of the conference object documents carried inside CCMP messages
/// (RFC 6501).
pub const XCON_CONFERENCE_INFO_NAMESPACE: &str = "urn:ietf:params:xml:ns:xcon-conference-info";

/// Namespace of the base conference-info data model (RFC 4575).
pub const CONFERENCE_INFO_NAMESPACE: &str = "urn:ietf:params:xml:ns:conference-info";

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// An expanded element or attribute name: optional namespace URI plus local
/// name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace_name: Option<String>,
    pub local_name: String,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace_name) = self.namespace_name.as_ref() {
            write!(f, "{{{}}}{}", namespace_name, self.local_name)
        } else {
            write!(f, "{}", self.local_name)
        }
    }
}

impl QName {
    pub fn with_namespace(
        namespace_name: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Self {
        Self::with_optional_namespace(Some(namespace_name), local_name)
    }

    pub fn with_optional_namespace(
        namespace_name: Option<impl Into<String>>,
        local_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace_name: namespace_name.map(Into::into),
            local_name: local_name.into(),
        }
    }

    /// The expanded name of an element or attribute node.
    pub fn of_node(node: roxmltree::Node) -> Self {
        Self::with_optional_namespace(node.tag_name().namespace(), node.tag_name().name())
    }

    pub fn qualified(
        prefix: impl AsRef<str>,
        local_name: impl Into<String>,
        context: roxmltree::Node,
    ) -> Result<Self, CcmpError> {
        let prefix = prefix.as_ref();
        let resolved_prefix = if prefix == "xml" {
            // The prefix xml is by definition bound to the namespace name
            // http://www.w3.org/XML/1998/namespace.
            // (Namespaces in XML 1.0, §3, Reserved Prefixes and Namespace Names)
            XML_NAMESPACE
        } else {
            context
                .lookup_namespace_uri(Some(prefix))
                .ok_or_else(|| CcmpError::PrefixNotResolved {
                    prefix: prefix.into(),
                })?
        };
        Ok(Self::with_namespace(resolved_prefix, local_name))
    }

    pub fn unqualified(local_name: impl Into<String>, context: roxmltree::Node) -> Self {
        // An unprefixed name picks up the default namespace declaration in
        // scope, if any (Namespaces in XML 1.0, §6.2).
        let namespace_name = context.lookup_namespace_uri(None);
        QName::with_optional_namespace(namespace_name, local_name)
    }

    /// Parses a lexical QName (`prefix:local` or `local`), resolving the
    /// prefix against the namespace declarations in scope at `context`.
    ///
    /// This is how `xsi:type` attribute values are resolved to message types.
    pub fn parse(source: &str, context: roxmltree::Node) -> Result<Self, CcmpError> {
        if let Some((prefix, local)) = source.rsplit_once(':') {
            Self::qualified(prefix, local, context)
        } else {
            Ok(Self::unqualified(source, context))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolves_prefix_in_scope() {
        let doc = roxmltree::Document::parse(
            r#"<root xmlns:ccmp="urn:ietf:params:xml:ns:xcon-ccmp"/>"#,
        )
        .unwrap();
        let name = QName::parse("ccmp:ccmp-conf-request-message-type", doc.root_element()).unwrap();
        assert_eq!(name.namespace_name.as_deref(), Some(XCON_CCMP_NAMESPACE));
        assert_eq!(name.local_name, "ccmp-conf-request-message-type");
    }

    #[test]
    fn parse_fails_on_undeclared_prefix() {
        let doc = roxmltree::Document::parse("<root/>").unwrap();
        let err = QName::parse("nope:thing", doc.root_element()).unwrap_err();
        assert!(matches!(err, CcmpError::PrefixNotResolved { prefix } if prefix == "nope"));
    }

    #[test]
    fn unqualified_name_uses_default_namespace() {
        let doc =
            roxmltree::Document::parse(r#"<root xmlns="urn:ietf:params:xml:ns:xcon-ccmp"/>"#)
                .unwrap();
        let name = QName::parse("ccmp-options-request-message-type", doc.root_element()).unwrap();
        assert_eq!(name.namespace_name.as_deref(), Some(XCON_CCMP_NAMESPACE));
    }
}
