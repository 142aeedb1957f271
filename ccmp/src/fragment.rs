//! Owned XML fragments for wildcard (`xs:any` / `xs:anyAttribute`) content.
//!
//! CCMP types are extensible: foreign-namespace elements and attributes are
//! legal inside most of them, and the conference documents carried in the
//! `*Info` elements belong to a different schema (RFC 6501) entirely. Both
//! are captured verbatim as [`Fragment`]s — plain owned trees with no
//! back-reference to the source document — and re-emitted unchanged.

use roxmltree::Node;

use crate::container::Sequence;
use crate::error::CcmpError;
use crate::writer::{NamespaceMap, XmlWriter};
use crate::xstypes::{QName, XSI_NAMESPACE};

/// A wildcard attribute, preserved as name/value.
#[derive(Clone, Debug, PartialEq)]
pub struct AnyAttribute {
    pub name: QName,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FragmentNode {
    Element(Fragment),
    Text(String),
}

/// One element subtree, captured verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub name: QName,
    pub attributes: Vec<AnyAttribute>,
    pub children: Vec<FragmentNode>,
}

impl Fragment {
    /// Captures `node` and everything below it. Text nodes are kept as-is so
    /// the fragment round-trips byte-for-byte in content.
    pub fn from_node(node: Node) -> Self {
        let attributes = node
            .attributes()
            .map(|a| AnyAttribute {
                name: QName::with_optional_namespace(a.namespace(), a.name()),
                value: a.value().to_string(),
            })
            .collect();

        let mut children = Vec::new();
        for child in node.children() {
            if child.is_element() {
                children.push(FragmentNode::Element(Fragment::from_node(child)));
            } else if child.is_text() {
                if let Some(text) = child.text() {
                    children.push(FragmentNode::Text(text.to_string()));
                }
            }
            // Comments and processing instructions are not significant to the
            // data model and are dropped.
        }

        Fragment {
            name: QName::of_node(node),
            attributes,
            children,
        }
    }

    /// Concatenated text content of this element's direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                FragmentNode::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        // Namespaces the writer's map does not bind get fragment-local
        // prefixes, declared once on the fragment root. The scope owns a copy
        // of the map so the writer stays mutably borrowable for emission.
        let mut scope = PrefixScope::new(w.namespaces().clone());
        self.collect_namespaces(&mut scope);
        let declarations = scope.declarations();
        self.write_scoped(w, &scope, &declarations)
    }

    fn collect_namespaces(&self, scope: &mut PrefixScope) {
        if let Some(uri) = self.name.namespace_name.as_deref() {
            scope.ensure(uri);
        }
        for attribute in &self.attributes {
            if let Some(uri) = attribute.name.namespace_name.as_deref() {
                scope.ensure(uri);
            }
        }
        for child in &self.children {
            if let FragmentNode::Element(element) = child {
                element.collect_namespaces(scope);
            }
        }
    }

    fn write_scoped(
        &self,
        w: &mut XmlWriter,
        scope: &PrefixScope,
        extra_attributes: &[(String, String)],
    ) -> Result<(), CcmpError> {
        let name = scope.qualify(&self.name)?;
        let mut attributes = extra_attributes.to_vec();
        for attribute in &self.attributes {
            attributes.push((
                scope.qualify_attribute(&attribute.name)?,
                attribute.value.clone(),
            ));
        }
        w.start_raw(name, &attributes)?;
        for child in &self.children {
            match child {
                FragmentNode::Element(element) => element.write_scoped(w, scope, &[])?,
                FragmentNode::Text(text) => w.text(text)?,
            }
        }
        w.end_element()
    }
}

/// Collects the wildcard attributes of an element: everything except the
/// schema-instance attributes consumed by message dispatch.
pub(crate) fn wildcard_attributes(node: Node) -> Sequence<AnyAttribute> {
    node.attributes()
        .filter(|a| a.namespace() != Some(XSI_NAMESPACE))
        .map(|a| AnyAttribute {
            name: QName::with_optional_namespace(a.namespace(), a.name()),
            value: a.value().to_string(),
        })
        .collect()
}

/// Qualifies wildcard attributes for emission, appending `xmlns` declarations
/// for any namespace the writer's map does not bind.
pub(crate) fn qualify_wildcard_attributes(
    w: &XmlWriter,
    attributes: &Sequence<AnyAttribute>,
) -> Result<Vec<(String, String)>, CcmpError> {
    let mut scope = PrefixScope::new(w.namespaces().clone());
    for attribute in attributes {
        if let Some(uri) = attribute.name.namespace_name.as_deref() {
            scope.ensure(uri);
        }
    }
    let mut pairs = scope.declarations();
    for attribute in attributes {
        pairs.push((
            scope.qualify_attribute(&attribute.name)?,
            attribute.value.clone(),
        ));
    }
    Ok(pairs)
}

/// Prefix resolution for one fragment write: the writer's global map first,
/// then fragment-local `ns1`, `ns2`, ... allocations.
struct PrefixScope {
    global: NamespaceMap,
    local: Vec<(String, String)>,
}

impl PrefixScope {
    fn new(global: NamespaceMap) -> Self {
        Self {
            global,
            local: Vec::new(),
        }
    }

    fn ensure(&mut self, namespace: &str) {
        // The xml prefix needs no declaration.
        if namespace == crate::xstypes::XML_NAMESPACE {
            return;
        }
        if self.global.prefix_for(namespace).is_some()
            || self.local.iter().any(|(_, uri)| uri == namespace)
        {
            return;
        }
        let mut n = self.local.len() + 1;
        let prefix = loop {
            let candidate = format!("ns{n}");
            if self.global.namespace_for(&candidate).is_none()
                && !self.local.iter().any(|(p, _)| *p == candidate)
            {
                break candidate;
            }
            n += 1;
        };
        self.local.push((prefix, namespace.to_string()));
    }

    fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.global.prefix_for(namespace).or_else(|| {
            self.local
                .iter()
                .find(|(_, uri)| uri == namespace)
                .map(|(p, _)| p.as_str())
        })
    }

    fn qualify(&self, name: &QName) -> Result<String, CcmpError> {
        match name.namespace_name.as_deref() {
            // No default namespace is ever declared in the output, so a bare
            // local name is exactly a no-namespace name.
            None => Ok(name.local_name.clone()),
            Some(uri) => {
                let prefix = self
                    .prefix_for(uri)
                    .ok_or_else(|| CcmpError::NamespaceNotBound {
                        namespace: uri.to_string(),
                    })?;
                Ok(format!("{}:{}", prefix, name.local_name))
            }
        }
    }

    fn qualify_attribute(&self, name: &QName) -> Result<String, CcmpError> {
        match name.namespace_name.as_deref() {
            // Unprefixed attributes are in no namespace.
            None => Ok(name.local_name.clone()),
            Some(crate::xstypes::XML_NAMESPACE) => Ok(format!("xml:{}", name.local_name)),
            Some(uri) => {
                let prefix = self
                    .prefix_for(uri)
                    .ok_or_else(|| CcmpError::NamespaceNotBound {
                        namespace: uri.to_string(),
                    })?;
                Ok(format!("{}:{}", prefix, name.local_name))
            }
        }
    }

    /// The `xmlns:*` pairs for every locally allocated prefix.
    fn declarations(&self) -> Vec<(String, String)> {
        self.local
            .iter()
            .map(|(prefix, uri)| (format!("xmlns:{prefix}"), uri.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::NamespaceMap;

    fn roundtrip(input: &str) -> (Fragment, String) {
        let doc = roxmltree::Document::parse(input).unwrap();
        let fragment = Fragment::from_node(doc.root_element());
        let mut w = XmlWriter::new(NamespaceMap::ccmp());
        // A fragment is not a document by itself; wrap it for the writer.
        w.start_document_element(crate::xstypes::XCON_CCMP_NAMESPACE, "ccmpRequest")
            .unwrap();
        fragment.write(&mut w).unwrap();
        w.end_element().unwrap();
        (fragment, w.into_string())
    }

    #[test]
    fn captures_subtree_verbatim() {
        let doc = roxmltree::Document::parse(
            r#"<info xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="xcon:abc">
                 <display-text>staff meeting</display-text>
               </info>"#,
        )
        .unwrap();
        let fragment = Fragment::from_node(doc.root_element());
        assert_eq!(fragment.name.local_name, "info");
        assert_eq!(
            fragment.name.namespace_name.as_deref(),
            Some("urn:ietf:params:xml:ns:xcon-conference-info")
        );
        assert_eq!(fragment.attributes.len(), 1);
        assert_eq!(fragment.attributes[0].value, "xcon:abc");
        let texts: Vec<_> = fragment
            .children
            .iter()
            .filter_map(|c| match c {
                FragmentNode::Element(e) => Some(e.text()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["staff meeting".to_string()]);
    }

    #[test]
    fn unmapped_namespace_gets_local_declaration() {
        let (_, out) = roundtrip(r#"<x:thing xmlns:x="urn:example:ext">value</x:thing>"#);
        assert!(out.contains(r#"<ns1:thing xmlns:ns1="urn:example:ext">"#));
        assert!(out.contains("value</ns1:thing>"));
    }

    #[test]
    fn xml_lang_needs_no_declaration() {
        let (fragment, out) = roundtrip(
            r#"<x:note xmlns:x="urn:example:ext" xml:lang="en">hello</x:note>"#,
        );
        assert!(out.contains(r#"xml:lang="en""#));
        assert!(!out.contains("xmlns:xml"));

        let doc = roxmltree::Document::parse(&out).unwrap();
        let reparsed = doc
            .root_element()
            .first_element_child()
            .map(Fragment::from_node)
            .unwrap();
        assert_eq!(fragment, reparsed);
    }

    #[test]
    fn wildcard_attributes_survive_qualification() {
        let doc = roxmltree::Document::parse(
            r#"<m xmlns:v="urn:example:vendor"
                  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                  xsi:type="ignored" v:tag="7" plain="yes"/>"#,
        )
        .unwrap();
        let attributes = wildcard_attributes(doc.root_element());
        // xsi:* is dispatch metadata, not wildcard content.
        assert_eq!(attributes.len(), 2);

        let w = XmlWriter::new(NamespaceMap::ccmp());
        let pairs = qualify_wildcard_attributes(&w, &attributes).unwrap();
        assert!(pairs.contains(&("xmlns:ns1".to_string(), "urn:example:vendor".to_string())));
        assert!(pairs.contains(&("ns1:tag".to_string(), "7".to_string())));
        assert!(pairs.contains(&("plain".to_string(), "yes".to_string())));
    }

    #[test]
    fn reemitted_fragment_parses_back_equal() {
        let (fragment, out) = roundtrip(
            r#"<x:outer xmlns:x="urn:example:ext" kind="a"><x:inner>1</x:inner></x:outer>"#,
        );
        let doc = roxmltree::Document::parse(&out).unwrap();
        let reparsed = doc
            .root_element()
            .first_element_child()
            .map(Fragment::from_node)
            .unwrap();
        assert_eq!(fragment, reparsed);
    }
}
