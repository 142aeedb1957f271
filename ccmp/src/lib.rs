//! Data binding for the Centralized Conferencing Manipulation Protocol
//! (CCMP, RFC 6503): typed, owned Rust values for `ccmpRequest` and
//! `ccmpResponse` documents in the `urn:ietf:params:xml:ns:xcon-ccmp`
//! namespace, bound from XML text and serialized back.
//!
//! The two directions share one shape: an envelope struct with the base
//! message fields, an enum-tagged payload for the concrete message type
//! selected by `xsi:type`, and opaque [`Fragment`] trees for the embedded
//! RFC 6501 conference documents and for wildcard extension content.
//!
//! ```no_run
//! use ccmp::{parse_request, NamespaceMap, RequestPayload};
//!
//! let request = parse_request(&std::fs::read_to_string("request.xml")?)?;
//! if let RequestPayload::Conf(body) = &request.payload {
//!     println!("conference document present: {}", body.conf_info.present());
//! }
//! let echoed = request.serialize(&NamespaceMap::ccmp())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod container;
mod cursor;
mod error;
mod fragment;
mod operation;
mod options;
mod registry;
mod request;
mod response;
mod response_code;
mod values;
mod writer;
mod xstypes;

pub use container::{Optional, Sequence};
pub use cursor::ContentCursor;
pub use error::CcmpError;
pub use fragment::{AnyAttribute, Fragment, FragmentNode};
pub use operation::OperationType;
pub use options::{
    ExtendedMessage, ExtendedMessageList, Operations, Options, StandardMessage,
    StandardMessageList, StandardMessageName,
};
pub use registry::{lookup_request, lookup_response, MessageKind, MessageTypeEntry};
pub use request::{
    BlueprintRequest, BlueprintsRequest, CcmpRequest, ConfRequest, ConfsRequest, ExtendedRequest,
    RequestPayload, SidebarByRefRequest, SidebarByValRequest, SidebarsByRefRequest,
    SidebarsByValRequest, UserRequest, UsersRequest,
};
pub use response::{
    BlueprintResponse, BlueprintsResponse, CcmpResponse, ConfResponse, ConfsResponse,
    ExtendedResponse, OptionsResponse, ResponsePayload, SidebarByRefResponse,
    SidebarByValResponse, SidebarsByRefResponse, SidebarsByValResponse, UserResponse,
    UsersResponse,
};
pub use response_code::ResponseCode;
pub use values::LexicalValue;
pub use writer::{NamespaceMap, XmlWriter};
pub use xstypes::{
    QName, CONFERENCE_INFO_NAMESPACE, XCON_CCMP_NAMESPACE, XCON_CONFERENCE_INFO_NAMESPACE,
    XSI_NAMESPACE,
};

/// Binds a `ccmpRequest` document from XML text.
pub fn parse_request(text: &str) -> Result<CcmpRequest, CcmpError> {
    let doc = roxmltree::Document::parse(text)?;
    CcmpRequest::from_document(&doc)
}

/// Binds a `ccmpRequest` from an already-parsed document.
pub fn parse_request_document(doc: &roxmltree::Document) -> Result<CcmpRequest, CcmpError> {
    CcmpRequest::from_document(doc)
}

/// Binds a `ccmpResponse` document from XML text.
pub fn parse_response(text: &str) -> Result<CcmpResponse, CcmpError> {
    let doc = roxmltree::Document::parse(text)?;
    CcmpResponse::from_document(&doc)
}

/// Binds a `ccmpResponse` from an already-parsed document.
pub fn parse_response_document(doc: &roxmltree::Document) -> Result<CcmpResponse, CcmpError> {
    CcmpResponse::from_document(doc)
}

/// Serializes a request under the given prefix bindings. The CCMP and
/// schema-instance namespaces are added if the map does not bind them.
pub fn serialize_request(
    request: &CcmpRequest,
    namespaces: &NamespaceMap,
) -> Result<String, CcmpError> {
    request.serialize(namespaces)
}

/// Serializes a request into an arbitrary byte sink.
pub fn serialize_request_into<W: std::io::Write>(
    mut sink: W,
    request: &CcmpRequest,
    namespaces: &NamespaceMap,
) -> Result<(), CcmpError> {
    sink.write_all(request.serialize(namespaces)?.as_bytes())?;
    Ok(())
}

/// Serializes a response under the given prefix bindings.
pub fn serialize_response(
    response: &CcmpResponse,
    namespaces: &NamespaceMap,
) -> Result<String, CcmpError> {
    response.serialize(namespaces)
}

/// Serializes a response into an arbitrary byte sink.
pub fn serialize_response_into<W: std::io::Write>(
    mut sink: W,
    response: &CcmpResponse,
    namespaces: &NamespaceMap,
) -> Result<(), CcmpError> {
    sink.write_all(response.serialize(namespaces)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parse_and_echo() {
        let text = r#"
<c:ccmpRequest xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp"
               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <c:ccmpRequest xsi:type="c:ccmp-blueprints-request-message-type">
    <c:confUserID>xcon-userid:alice@example.com</c:confUserID>
    <c:operation>retrieve</c:operation>
    <c:blueprintsRequest>
      <c:xpathFilter>/conference-info[@entity='blueprint1']</c:xpathFilter>
    </c:blueprintsRequest>
  </c:ccmpRequest>
</c:ccmpRequest>"#;
        let request = parse_request(text).unwrap();
        let echoed = serialize_request(&request, &NamespaceMap::ccmp()).unwrap();
        assert_eq!(parse_request(&echoed).unwrap(), request);

        let mut sink = Vec::new();
        serialize_request_into(&mut sink, &request, &NamespaceMap::ccmp()).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), echoed);
    }

    #[test]
    fn malformed_xml_surfaces_the_parser_error() {
        assert!(matches!(
            parse_request("<unclosed"),
            Err(CcmpError::Xml(_))
        ));
    }
}
