//! Serialization plumbing on top of the `quick-xml` event writer.
//!
//! All bound types serialize through [`XmlWriter`], which owns the prefix
//! bookkeeping; the per-type `write` routines only ever name elements by
//! (namespace, local name) pairs.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::CcmpError;

/// Ordered prefix → namespace-URI bindings, all of which are declared on the
/// document element. The mirror of the namespace map callers of the original
/// protocol stack pass to their serializers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamespaceMap {
    bindings: Vec<(String, String)>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bindings every CCMP document needs: the protocol namespace itself
    /// and XML-Schema-instance for the `xsi:type` message dispatch.
    pub fn ccmp() -> Self {
        let mut map = Self::new();
        map.bind("xcon-ccmp", crate::xstypes::XCON_CCMP_NAMESPACE);
        map.bind("xsi", crate::xstypes::XSI_NAMESPACE);
        map
    }

    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.push((prefix.into(), namespace.into()));
    }

    /// Binds `prefix` to `namespace` unless the namespace is already bound
    /// under some prefix.
    pub fn ensure(&mut self, prefix: &str, namespace: &str) {
        if self.prefix_for(namespace).is_none() {
            self.bind(prefix, namespace);
        }
    }

    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, uri)| uri == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    pub fn namespace_for(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

/// Event writer with a prefix map and an open-element stack.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
    namespaces: NamespaceMap,
    open: Vec<String>,
}

impl XmlWriter {
    pub fn new(namespaces: NamespaceMap) -> Self {
        Self {
            inner: Writer::new(Vec::new()),
            namespaces,
            open: Vec::new(),
        }
    }

    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    pub fn prefixed_name(&self, namespace: &str, local: &str) -> Result<String, CcmpError> {
        let prefix =
            self.namespaces
                .prefix_for(namespace)
                .ok_or_else(|| CcmpError::NamespaceNotBound {
                    namespace: namespace.to_string(),
                })?;
        Ok(format!("{prefix}:{local}"))
    }

    /// Emits the XML declaration and the document element, declaring every
    /// binding of the namespace map as an `xmlns:*` attribute.
    pub fn start_document_element(
        &mut self,
        namespace: &str,
        local: &str,
    ) -> Result<(), CcmpError> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let name = self.prefixed_name(namespace, local)?;
        let mut start = BytesStart::new(name.clone());
        for (prefix, uri) in self.namespaces.iter() {
            start.push_attribute((format!("xmlns:{prefix}").as_str(), uri));
        }
        self.inner.write_event(Event::Start(start))?;
        self.open.push(name);
        Ok(())
    }

    pub fn start_element(&mut self, namespace: &str, local: &str) -> Result<(), CcmpError> {
        self.start_element_with(namespace, local, &[])
    }

    pub fn start_element_with(
        &mut self,
        namespace: &str,
        local: &str,
        attributes: &[(String, String)],
    ) -> Result<(), CcmpError> {
        let name = self.prefixed_name(namespace, local)?;
        self.start_raw(name, attributes)
    }

    /// Starts an element whose name is already prefixed. Used by fragment
    /// re-emission, where prefixes may be fragment-local.
    pub(crate) fn start_raw(
        &mut self,
        name: String,
        attributes: &[(String, String)],
    ) -> Result<(), CcmpError> {
        let mut start = BytesStart::new(name.clone());
        for (key, value) in attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        self.inner.write_event(Event::Start(start))?;
        self.open.push(name);
        Ok(())
    }

    pub fn end_element(&mut self) -> Result<(), CcmpError> {
        let name = self
            .open
            .pop()
            .expect("end_element without matching start_element");
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<(), CcmpError> {
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<p:name>text</p:name>`
    pub fn simple_element(
        &mut self,
        namespace: &str,
        local: &str,
        text: &str,
    ) -> Result<(), CcmpError> {
        self.start_element(namespace, local)?;
        self.text(text)?;
        self.end_element()
    }

    pub fn into_string(self) -> String {
        debug_assert!(self.open.is_empty(), "unclosed elements at end of document");
        String::from_utf8(self.inner.into_inner()).expect("writer output is UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xstypes::XCON_CCMP_NAMESPACE;

    #[test]
    fn document_element_declares_bindings() {
        let mut w = XmlWriter::new(NamespaceMap::ccmp());
        w.start_document_element(XCON_CCMP_NAMESPACE, "ccmpRequest")
            .unwrap();
        w.simple_element(XCON_CCMP_NAMESPACE, "confUserID", "xcon-userA@example.com")
            .unwrap();
        w.end_element().unwrap();
        let out = w.into_string();
        assert!(out.contains(r#"xmlns:xcon-ccmp="urn:ietf:params:xml:ns:xcon-ccmp""#));
        assert!(out.contains("<xcon-ccmp:confUserID>xcon-userA@example.com</xcon-ccmp:confUserID>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut w = XmlWriter::new(NamespaceMap::ccmp());
        w.start_document_element(XCON_CCMP_NAMESPACE, "ccmpRequest")
            .unwrap();
        w.simple_element(XCON_CCMP_NAMESPACE, "subject", "a < b & c")
            .unwrap();
        w.end_element().unwrap();
        assert!(w.into_string().contains("a &lt; b &amp; c"));
    }

    #[test]
    fn unbound_namespace_is_an_error() {
        let w = XmlWriter::new(NamespaceMap::ccmp());
        let err = w.prefixed_name("urn:example:other", "thing").unwrap_err();
        assert!(matches!(err, CcmpError::NamespaceNotBound { .. }));
    }

    #[test]
    fn ensure_does_not_rebind() {
        let mut map = NamespaceMap::ccmp();
        map.ensure("other-prefix", XCON_CCMP_NAMESPACE);
        assert_eq!(map.prefix_for(XCON_CCMP_NAMESPACE), Some("xcon-ccmp"));
    }
}
