//! One-pass cursor over an element's child content.
//!
//! Every bound type consumes its children in the exact order the schema
//! declares them: named particles first, then the foreign-namespace wildcard
//! run, then (for message types) the element contributed by the concrete
//! subtype. There is no backtracking beyond that three-way alternation — an
//! unmatched same-namespace child stops the current routine and is left for
//! whoever continues on the same cursor, exactly like sequence extension in
//! complex-type derivation.

use roxmltree::Node;

use crate::container::Sequence;
use crate::error::CcmpError;
use crate::fragment::Fragment;
use crate::values::LexicalValue;
use crate::xstypes::QName;

pub struct ContentCursor<'a, 'input> {
    next: Option<Node<'a, 'input>>,
}

impl<'a, 'input> ContentCursor<'a, 'input> {
    /// A cursor over the element children of `parent`. Whitespace and
    /// comments between elements are not content and are skipped.
    pub fn new(parent: Node<'a, 'input>) -> Self {
        Self {
            next: parent.first_element_child(),
        }
    }

    pub fn peek(&self) -> Option<Node<'a, 'input>> {
        self.next
    }

    fn advance(&mut self) -> Option<Node<'a, 'input>> {
        let current = self.next;
        self.next = current.and_then(|n| n.next_sibling_element());
        current
    }

    fn matches(node: Node, namespace: &str, local: &str) -> bool {
        node.tag_name().namespace() == Some(namespace) && node.tag_name().name() == local
    }

    /// Consumes the next child only if it is `{namespace}local`.
    pub fn take_named(&mut self, namespace: &str, local: &str) -> Option<Node<'a, 'input>> {
        match self.next {
            Some(node) if Self::matches(node, namespace, local) => self.advance(),
            _ => None,
        }
    }

    /// Like [`take_named`](Self::take_named) for a required particle: running
    /// out of matching content is a missing-element error naming what was
    /// expected.
    pub fn expect_named(
        &mut self,
        namespace: &'static str,
        local: &'static str,
    ) -> Result<Node<'a, 'input>, CcmpError> {
        self.take_named(namespace, local)
            .ok_or(CcmpError::ExpectedElement { namespace, local })
    }

    /// The wildcard step: consumes the next child only if it lies outside
    /// `own_namespace`. Same-namespace content is never wildcard material
    /// here — it belongs to a declared particle further along the chain.
    pub fn take_foreign(&mut self, own_namespace: &str) -> Option<Node<'a, 'input>> {
        match self.next {
            Some(node) if node.tag_name().namespace() != Some(own_namespace) => self.advance(),
            _ => None,
        }
    }

    /// Drains the wildcard run into owned fragments.
    pub fn take_foreign_run(&mut self, own_namespace: &str) -> Sequence<Fragment> {
        let mut run = Sequence::new();
        while let Some(node) = self.take_foreign(own_namespace) {
            run.push(Fragment::from_node(node));
        }
        run
    }

    /// Asserts the content model is exhausted. Anything left over means the
    /// document does not match the declared sequence.
    pub fn finish(&self) -> Result<(), CcmpError> {
        match self.next {
            None => Ok(()),
            Some(node) => Err(CcmpError::UnexpectedElement {
                expected: "end of content".to_string(),
                actual: QName::of_node(node).to_string(),
            }),
        }
    }

    /// Consumes an optional simple-typed element, converting its text
    /// content.
    pub fn take_simple<T: LexicalValue>(
        &mut self,
        namespace: &str,
        local: &str,
    ) -> Result<Option<T>, CcmpError> {
        match self.take_named(namespace, local) {
            Some(node) => Ok(Some(T::from_lexical(&element_text(node))?)),
            None => Ok(None),
        }
    }

    /// Consumes a required simple-typed element.
    pub fn expect_simple<T: LexicalValue>(
        &mut self,
        namespace: &'static str,
        local: &'static str,
    ) -> Result<T, CcmpError> {
        let node = self.expect_named(namespace, local)?;
        T::from_lexical(&element_text(node))
    }
}

/// Concatenated text content of an element.
pub fn element_text(node: Node) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xstypes::XCON_CCMP_NAMESPACE;

    const DOC: &str = r#"
        <c:parent xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp" xmlns:e="urn:example:ext">
            <c:subject>weekly sync</c:subject>
            <e:extra>1</e:extra>
            <e:more>2</e:more>
            <c:confRequest/>
        </c:parent>"#;

    #[test]
    fn ordered_alternation() {
        let doc = roxmltree::Document::parse(DOC).unwrap();
        let mut cursor = ContentCursor::new(doc.root_element());

        // Optional named particle not present: no consumption.
        assert!(cursor.take_named(XCON_CCMP_NAMESPACE, "confUserID").is_none());

        let subject: Option<String> = cursor
            .take_simple(XCON_CCMP_NAMESPACE, "subject")
            .unwrap();
        assert_eq!(subject.as_deref(), Some("weekly sync"));

        // The wildcard run stops at the first same-namespace element.
        let run = cursor.take_foreign_run(XCON_CCMP_NAMESPACE);
        assert_eq!(run.len(), 2);
        assert!(cursor.take_foreign(XCON_CCMP_NAMESPACE).is_none());

        cursor
            .expect_named(XCON_CCMP_NAMESPACE, "confRequest")
            .unwrap();
        cursor.finish().unwrap();
    }

    #[test]
    fn expect_reports_missing_element() {
        let doc = roxmltree::Document::parse(DOC).unwrap();
        let mut cursor = ContentCursor::new(doc.root_element());
        let err = cursor
            .expect_named(XCON_CCMP_NAMESPACE, "response-code")
            .unwrap_err();
        assert!(matches!(
            err,
            CcmpError::ExpectedElement {
                local: "response-code",
                ..
            }
        ));
    }

    #[test]
    fn finish_reports_leftover_content() {
        let doc = roxmltree::Document::parse(DOC).unwrap();
        let cursor = ContentCursor::new(doc.root_element());
        let err = cursor.finish().unwrap_err();
        assert!(matches!(err, CcmpError::UnexpectedElement { .. }));
    }
}
