//! The message-type registries: static dispatch tables for the
//! `xsi:type`-polymorphic message slot in `ccmpRequest` / `ccmpResponse`
//! documents.
//!
//! Registration is purely static: the tables live in [`crate::request`] and
//! [`crate::response`], the lookup maps are built once on first access and
//! are read-only afterwards, so concurrent readers need no locking. Each
//! entry is symmetric — it knows how to parse its body out of a message
//! element and how to write it back, so the emitted `xsi:type` always names
//! the payload variant actually held.

use std::collections::HashMap;

use lazy_static::lazy_static;
use roxmltree::Node;

use crate::cursor::ContentCursor;
use crate::error::CcmpError;
use crate::request::RequestPayload;
use crate::response::ResponsePayload;
use crate::writer::XmlWriter;
use crate::xstypes::{QName, XCON_CCMP_NAMESPACE, XSI_NAMESPACE};

/// The CCMP message kinds (RFC 6503 §4), shared between the request and
/// response direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Options,
    Blueprints,
    Blueprint,
    Confs,
    Conf,
    Users,
    User,
    SidebarsByVal,
    SidebarsByRef,
    SidebarByVal,
    SidebarByRef,
    Extended,
}

/// One concrete message type: its `xsi:type` local name plus the paired
/// body parse/write routines.
pub struct MessageTypeEntry<P: 'static> {
    pub kind: MessageKind,
    /// Local name of the concrete type in the CCMP namespace, e.g.
    /// `ccmp-blueprints-request-message-type`.
    pub type_name: &'static str,
    /// Parses the subtype's contribution to the content model. The cursor is
    /// positioned just past the base message fields and the base wildcard
    /// run.
    pub parse_body: fn(&mut ContentCursor<'_, '_>) -> Result<P, CcmpError>,
    pub write_body: fn(&P, &mut XmlWriter) -> Result<(), CcmpError>,
}

fn build_index<P>(
    entries: &'static [MessageTypeEntry<P>],
    direction: &str,
) -> HashMap<&'static str, &'static MessageTypeEntry<P>> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        // Registering the same qualified name twice is a table-authoring
        // bug; fail loudly at initialization, before any parse can run.
        if index.insert(entry.type_name, entry).is_some() {
            panic!(
                "duplicate {direction} message type registration: {}",
                entry.type_name
            );
        }
    }
    index
}

lazy_static! {
    static ref REQUEST_INDEX: HashMap<&'static str, &'static MessageTypeEntry<RequestPayload>> =
        build_index(crate::request::MESSAGE_TYPES, "request");
    static ref RESPONSE_INDEX: HashMap<&'static str, &'static MessageTypeEntry<ResponsePayload>> =
        build_index(crate::response::MESSAGE_TYPES, "response");
}

pub fn lookup_request(type_name: &str) -> Option<&'static MessageTypeEntry<RequestPayload>> {
    REQUEST_INDEX.get(type_name).copied()
}

pub fn lookup_response(type_name: &str) -> Option<&'static MessageTypeEntry<ResponsePayload>> {
    RESPONSE_INDEX.get(type_name).copied()
}

/// Write-side selection: the entry whose kind matches the payload actually
/// held. The tables cover every kind; a gap is a construction bug caught by
/// the tests below.
pub(crate) fn entry_for_kind<P>(
    entries: &'static [MessageTypeEntry<P>],
    kind: MessageKind,
) -> &'static MessageTypeEntry<P> {
    entries
        .iter()
        .find(|entry| entry.kind == kind)
        .expect("message kind not registered")
}

/// Resolves the `xsi:type` of a message element to the local name of a CCMP
/// message type. A missing attribute, an unresolvable prefix or a type
/// outside the CCMP namespace all fail here — the slot is required, so
/// there is no wildcard fallback.
pub(crate) fn message_type_name(node: Node) -> Result<String, CcmpError> {
    let raw = node
        .attribute((XSI_NAMESPACE, "type"))
        .ok_or(CcmpError::ExpectedAttribute { local: "xsi:type" })?;
    let name = QName::parse(raw.trim(), node)?;
    if name.namespace_name.as_deref() != Some(XCON_CCMP_NAMESPACE) {
        return Err(CcmpError::UnknownMessageType {
            name: name.to_string(),
        });
    }
    Ok(name.local_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_duplicate_free() {
        assert_eq!(REQUEST_INDEX.len(), crate::request::MESSAGE_TYPES.len());
        assert_eq!(RESPONSE_INDEX.len(), crate::response::MESSAGE_TYPES.len());
    }

    #[test]
    fn every_kind_is_registered_in_both_directions() {
        for kind in [
            MessageKind::Options,
            MessageKind::Blueprints,
            MessageKind::Blueprint,
            MessageKind::Confs,
            MessageKind::Conf,
            MessageKind::Users,
            MessageKind::User,
            MessageKind::SidebarsByVal,
            MessageKind::SidebarsByRef,
            MessageKind::SidebarByVal,
            MessageKind::SidebarByRef,
            MessageKind::Extended,
        ] {
            entry_for_kind(crate::request::MESSAGE_TYPES, kind);
            entry_for_kind(crate::response::MESSAGE_TYPES, kind);
        }
    }

    #[test]
    fn request_and_response_types_do_not_mix() {
        assert!(lookup_request("ccmp-conf-request-message-type").is_some());
        assert!(lookup_request("ccmp-conf-response-message-type").is_none());
        assert!(lookup_response("ccmp-conf-response-message-type").is_some());
    }

    #[test]
    fn xsi_type_resolution() {
        let doc = roxmltree::Document::parse(
            r#"<m xmlns:ccmp="urn:ietf:params:xml:ns:xcon-ccmp"
                  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                  xsi:type="ccmp:ccmp-user-request-message-type"/>"#,
        )
        .unwrap();
        assert_eq!(
            message_type_name(doc.root_element()).unwrap(),
            "ccmp-user-request-message-type"
        );
    }

    #[test]
    fn xsi_type_outside_ccmp_namespace_is_unknown() {
        let doc = roxmltree::Document::parse(
            r#"<m xmlns:other="urn:example:ext"
                  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                  xsi:type="other:something"/>"#,
        )
        .unwrap();
        let err = message_type_name(doc.root_element()).unwrap_err();
        assert!(matches!(err, CcmpError::UnknownMessageType { .. }));
    }
}
