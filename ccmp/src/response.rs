//! The CCMP response surface: the `ccmpResponse` envelope and the twelve
//! concrete response message types (RFC 6503 §5.4).
//!
//! Structured like [`crate::request`]: one envelope struct for the fields of
//! `ccmp-response-message-type`, an enum-tagged payload for the concrete
//! subtype, and a static table driving the `xsi:type` dispatch both ways.

use roxmltree::{Document, Node};

use crate::container::{Optional, Sequence};
use crate::cursor::ContentCursor;
use crate::error::CcmpError;
use crate::fragment::{qualify_wildcard_attributes, wildcard_attributes, AnyAttribute, Fragment};
use crate::operation::OperationType;
use crate::options::Options;
use crate::registry::{self, MessageKind, MessageTypeEntry};
use crate::request::{
    parse_info_body, write_info_body, xsi_type_attribute, xsi_type_value,
};
use crate::response_code::ResponseCode;
use crate::writer::{NamespaceMap, XmlWriter};
use crate::xstypes::{QName, XCON_CCMP_NAMESPACE as NS, XSI_NAMESPACE};

/// A complete CCMP response. Unlike the request side, `confUserID` and
/// `response-code` are required by the schema; a response missing either
/// does not bind.
#[derive(Clone, Debug, PartialEq)]
pub struct CcmpResponse {
    pub conf_user_id: String,
    pub conf_obj_id: Optional<String>,
    pub operation: Optional<OperationType>,
    pub response_code: ResponseCode,
    /// Human-readable reason phrase accompanying the code.
    pub response_string: Optional<String>,
    /// Version of the conference object after the operation.
    pub version: Optional<u64>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
    pub payload: ResponsePayload,
}

/// The concrete message kind, one variant per `ccmp-*-response-message-type`.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponsePayload {
    Options(OptionsResponse),
    Blueprints(BlueprintsResponse),
    Blueprint(BlueprintResponse),
    Confs(ConfsResponse),
    Conf(ConfResponse),
    Users(UsersResponse),
    User(UserResponse),
    SidebarsByVal(SidebarsByValResponse),
    SidebarsByRef(SidebarsByRefResponse),
    SidebarByVal(SidebarByValResponse),
    SidebarByRef(SidebarByRefResponse),
    Extended(ExtendedResponse),
}

impl ResponsePayload {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Options(_) => MessageKind::Options,
            Self::Blueprints(_) => MessageKind::Blueprints,
            Self::Blueprint(_) => MessageKind::Blueprint,
            Self::Confs(_) => MessageKind::Confs,
            Self::Conf(_) => MessageKind::Conf,
            Self::Users(_) => MessageKind::Users,
            Self::User(_) => MessageKind::User,
            Self::SidebarsByVal(_) => MessageKind::SidebarsByVal,
            Self::SidebarsByRef(_) => MessageKind::SidebarsByRef,
            Self::SidebarByVal(_) => MessageKind::SidebarByVal,
            Self::SidebarByRef(_) => MessageKind::SidebarByRef,
            Self::Extended(_) => MessageKind::Extended,
        }
    }
}

/// `optionsResponseType`: the capability advertisement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsResponse {
    pub options: Optional<Options>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `blueprintsResponseType`: `blueprintsInfo` holds an RFC 6501
/// `urn:ietf:params:xml:ns:conference-info` document, preserved opaquely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintsResponse {
    pub blueprints_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `blueprintResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintResponse {
    pub blueprint_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `confsResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfsResponse {
    pub confs_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `confResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfResponse {
    pub conf_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `usersResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersResponse {
    pub users_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `userResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserResponse {
    pub user_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarsByValResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarsByValResponse {
    pub sidebars_by_val_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarsByRefResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarsByRefResponse {
    pub sidebars_by_ref_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarByValResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarByValResponse {
    pub sidebar_by_val_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarByRefResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarByRefResponse {
    pub sidebar_by_ref_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `extendedResponseType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedResponse {
    pub extension_name: String,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

impl CcmpResponse {
    /// Binds a whole `ccmpResponse` document.
    pub fn from_document(doc: &Document) -> Result<Self, CcmpError> {
        let root = doc.root_element();
        if root.tag_name().namespace() != Some(NS) || root.tag_name().name() != "ccmpResponse" {
            return Err(CcmpError::UnexpectedElement {
                expected: format!("{{{NS}}}ccmpResponse"),
                actual: QName::of_node(root).to_string(),
            });
        }
        let mut cursor = ContentCursor::new(root);
        let message = cursor.expect_named(NS, "ccmpResponse")?;
        cursor.finish()?;
        Self::from_element(message)
    }

    /// Binds the inner message element.
    pub fn from_element(node: Node) -> Result<Self, CcmpError> {
        let type_name = registry::message_type_name(node)?;
        let entry = registry::lookup_response(&type_name)
            .ok_or(CcmpError::UnknownMessageType { name: type_name })?;

        let mut cursor = ContentCursor::new(node);
        let conf_user_id = cursor.expect_simple::<String>(NS, "confUserID")?;
        let conf_obj_id = cursor.take_simple::<String>(NS, "confObjID")?.into();
        let operation = cursor.take_simple::<OperationType>(NS, "operation")?.into();
        let response_code = cursor.expect_simple::<ResponseCode>(NS, "response-code")?;
        let response_string = cursor.take_simple::<String>(NS, "response-string")?.into();
        let version = cursor.take_simple::<u64>(NS, "version")?.into();
        let any = cursor.take_foreign_run(NS);
        let payload = (entry.parse_body)(&mut cursor)?;
        cursor.finish()?;

        Ok(Self {
            conf_user_id,
            conf_obj_id,
            operation,
            response_code,
            response_string,
            version,
            any,
            any_attributes: wildcard_attributes(node),
            payload,
        })
    }

    /// Writes the inner message element.
    pub fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        let entry = registry::entry_for_kind(MESSAGE_TYPES, self.payload.kind());
        let mut attributes = vec![(xsi_type_attribute(w)?, xsi_type_value(w, entry.type_name)?)];
        attributes.extend(qualify_wildcard_attributes(w, &self.any_attributes)?);
        w.start_element_with(NS, "ccmpResponse", &attributes)?;

        w.simple_element(NS, "confUserID", &self.conf_user_id)?;
        if let Some(conf_obj_id) = self.conf_obj_id.value() {
            w.simple_element(NS, "confObjID", conf_obj_id)?;
        }
        if let Some(operation) = self.operation.value() {
            w.simple_element(NS, "operation", &operation.to_string())?;
        }
        w.simple_element(NS, "response-code", &self.response_code.to_string())?;
        if let Some(response_string) = self.response_string.value() {
            w.simple_element(NS, "response-string", response_string)?;
        }
        if let Some(version) = self.version.value() {
            w.simple_element(NS, "version", &version.to_string())?;
        }
        for fragment in &self.any {
            fragment.write(w)?;
        }
        (entry.write_body)(&self.payload, w)?;
        w.end_element()
    }

    /// Serializes the full document, wrapper element included.
    pub fn serialize(&self, namespaces: &NamespaceMap) -> Result<String, CcmpError> {
        let mut namespaces = namespaces.clone();
        namespaces.ensure("xcon-ccmp", NS);
        namespaces.ensure("xsi", XSI_NAMESPACE);
        let mut w = XmlWriter::new(namespaces);
        w.start_document_element(NS, "ccmpResponse")?;
        self.write(&mut w)?;
        w.end_element()?;
        Ok(w.into_string())
    }
}

macro_rules! unreachable_kind {
    () => {
        unreachable!("registry entry kind does not match payload variant")
    };
}

fn parse_options_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "optionsResponse")?;
    let mut inner = ContentCursor::new(body);
    let options = inner
        .take_named(NS, "options")
        .map(Options::from_element)
        .transpose()?
        .into();
    let any = inner.take_foreign_run(NS);
    inner.finish()?;
    Ok(ResponsePayload::Options(OptionsResponse {
        options,
        any,
        any_attributes: wildcard_attributes(body),
    }))
}

fn write_options_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Options(body) => {
            let attributes = qualify_wildcard_attributes(w, &body.any_attributes)?;
            w.start_element_with(NS, "optionsResponse", &attributes)?;
            if let Some(options) = body.options.value() {
                options.write(w)?;
            }
            for fragment in &body.any {
                fragment.write(w)?;
            }
            w.end_element()
        }
        _ => unreachable_kind!(),
    }
}

fn parse_blueprints_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "blueprintsResponse")?;
    let (blueprints_info, any, any_attributes) = parse_info_body(body, "blueprintsInfo")?;
    Ok(ResponsePayload::Blueprints(BlueprintsResponse {
        blueprints_info,
        any,
        any_attributes,
    }))
}

fn write_blueprints_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Blueprints(body) => write_info_body(
            w,
            "blueprintsResponse",
            &body.blueprints_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_blueprint_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "blueprintResponse")?;
    let (blueprint_info, any, any_attributes) = parse_info_body(body, "blueprintInfo")?;
    Ok(ResponsePayload::Blueprint(BlueprintResponse {
        blueprint_info,
        any,
        any_attributes,
    }))
}

fn write_blueprint_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Blueprint(body) => write_info_body(
            w,
            "blueprintResponse",
            &body.blueprint_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_confs_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "confsResponse")?;
    let (confs_info, any, any_attributes) = parse_info_body(body, "confsInfo")?;
    Ok(ResponsePayload::Confs(ConfsResponse {
        confs_info,
        any,
        any_attributes,
    }))
}

fn write_confs_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Confs(body) => write_info_body(
            w,
            "confsResponse",
            &body.confs_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_conf_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "confResponse")?;
    let (conf_info, any, any_attributes) = parse_info_body(body, "confInfo")?;
    Ok(ResponsePayload::Conf(ConfResponse {
        conf_info,
        any,
        any_attributes,
    }))
}

fn write_conf_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Conf(body) => write_info_body(
            w,
            "confResponse",
            &body.conf_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_users_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "usersResponse")?;
    let (users_info, any, any_attributes) = parse_info_body(body, "usersInfo")?;
    Ok(ResponsePayload::Users(UsersResponse {
        users_info,
        any,
        any_attributes,
    }))
}

fn write_users_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Users(body) => write_info_body(
            w,
            "usersResponse",
            &body.users_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_user_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "userResponse")?;
    let (user_info, any, any_attributes) = parse_info_body(body, "userInfo")?;
    Ok(ResponsePayload::User(UserResponse {
        user_info,
        any,
        any_attributes,
    }))
}

fn write_user_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::User(body) => write_info_body(
            w,
            "userResponse",
            &body.user_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebars_by_val_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarsByValResponse")?;
    let (sidebars_by_val_info, any, any_attributes) = parse_info_body(body, "sidebarsByValInfo")?;
    Ok(ResponsePayload::SidebarsByVal(SidebarsByValResponse {
        sidebars_by_val_info,
        any,
        any_attributes,
    }))
}

fn write_sidebars_by_val_body(
    payload: &ResponsePayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::SidebarsByVal(body) => write_info_body(
            w,
            "sidebarsByValResponse",
            &body.sidebars_by_val_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebars_by_ref_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarsByRefResponse")?;
    let (sidebars_by_ref_info, any, any_attributes) = parse_info_body(body, "sidebarsByRefInfo")?;
    Ok(ResponsePayload::SidebarsByRef(SidebarsByRefResponse {
        sidebars_by_ref_info,
        any,
        any_attributes,
    }))
}

fn write_sidebars_by_ref_body(
    payload: &ResponsePayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::SidebarsByRef(body) => write_info_body(
            w,
            "sidebarsByRefResponse",
            &body.sidebars_by_ref_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebar_by_val_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarByValResponse")?;
    let (sidebar_by_val_info, any, any_attributes) = parse_info_body(body, "sidebarByValInfo")?;
    Ok(ResponsePayload::SidebarByVal(SidebarByValResponse {
        sidebar_by_val_info,
        any,
        any_attributes,
    }))
}

fn write_sidebar_by_val_body(
    payload: &ResponsePayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::SidebarByVal(body) => write_info_body(
            w,
            "sidebarByValResponse",
            &body.sidebar_by_val_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebar_by_ref_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarByRefResponse")?;
    let (sidebar_by_ref_info, any, any_attributes) = parse_info_body(body, "sidebarByRefInfo")?;
    Ok(ResponsePayload::SidebarByRef(SidebarByRefResponse {
        sidebar_by_ref_info,
        any,
        any_attributes,
    }))
}

fn write_sidebar_by_ref_body(
    payload: &ResponsePayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::SidebarByRef(body) => write_info_body(
            w,
            "sidebarByRefResponse",
            &body.sidebar_by_ref_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_extended_body(cursor: &mut ContentCursor<'_, '_>) -> Result<ResponsePayload, CcmpError> {
    let body = cursor.expect_named(NS, "extendedResponse")?;
    let mut inner = ContentCursor::new(body);
    let extension_name = inner.expect_simple::<String>(NS, "extensionName")?;
    let any = inner.take_foreign_run(NS);
    inner.finish()?;
    Ok(ResponsePayload::Extended(ExtendedResponse {
        extension_name,
        any,
        any_attributes: wildcard_attributes(body),
    }))
}

fn write_extended_body(payload: &ResponsePayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        ResponsePayload::Extended(body) => {
            let attributes = qualify_wildcard_attributes(w, &body.any_attributes)?;
            w.start_element_with(NS, "extendedResponse", &attributes)?;
            w.simple_element(NS, "extensionName", &body.extension_name)?;
            for fragment in &body.any {
                fragment.write(w)?;
            }
            w.end_element()
        }
        _ => unreachable_kind!(),
    }
}

pub(crate) static MESSAGE_TYPES: &[MessageTypeEntry<ResponsePayload>] = &[
    MessageTypeEntry {
        kind: MessageKind::Options,
        type_name: "ccmp-options-response-message-type",
        parse_body: parse_options_body,
        write_body: write_options_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Blueprints,
        type_name: "ccmp-blueprints-response-message-type",
        parse_body: parse_blueprints_body,
        write_body: write_blueprints_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Blueprint,
        type_name: "ccmp-blueprint-response-message-type",
        parse_body: parse_blueprint_body,
        write_body: write_blueprint_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Confs,
        type_name: "ccmp-confs-response-message-type",
        parse_body: parse_confs_body,
        write_body: write_confs_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Conf,
        type_name: "ccmp-conf-response-message-type",
        parse_body: parse_conf_body,
        write_body: write_conf_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Users,
        type_name: "ccmp-users-response-message-type",
        parse_body: parse_users_body,
        write_body: write_users_body,
    },
    MessageTypeEntry {
        kind: MessageKind::User,
        type_name: "ccmp-user-response-message-type",
        parse_body: parse_user_body,
        write_body: write_user_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarsByVal,
        type_name: "ccmp-sidebarsByVal-response-message-type",
        parse_body: parse_sidebars_by_val_body,
        write_body: write_sidebars_by_val_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarsByRef,
        type_name: "ccmp-sidebarsByRef-response-message-type",
        parse_body: parse_sidebars_by_ref_body,
        write_body: write_sidebars_by_ref_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarByVal,
        type_name: "ccmp-sidebarByVal-response-message-type",
        parse_body: parse_sidebar_by_val_body,
        write_body: write_sidebar_by_val_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarByRef,
        type_name: "ccmp-sidebarByRef-response-message-type",
        parse_body: parse_sidebar_by_ref_body,
        write_body: write_sidebar_by_ref_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Extended,
        type_name: "ccmp-extended-response-message-type",
        parse_body: parse_extended_body,
        write_body: write_extended_body,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const CONF_CREATED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xcon-ccmp:ccmpResponse xmlns:xcon-ccmp="urn:ietf:params:xml:ns:xcon-ccmp"
                        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                        xmlns:info="urn:ietf:params:xml:ns:conference-info">
  <xcon-ccmp:ccmpResponse xsi:type="xcon-ccmp:ccmp-conf-response-message-type">
    <xcon-ccmp:confUserID>xcon-userid:alice@example.com</xcon-ccmp:confUserID>
    <xcon-ccmp:confObjID>xcon:8977878@example.com</xcon-ccmp:confObjID>
    <xcon-ccmp:operation>create</xcon-ccmp:operation>
    <xcon-ccmp:response-code>200</xcon-ccmp:response-code>
    <xcon-ccmp:response-string>success</xcon-ccmp:response-string>
    <xcon-ccmp:version>1</xcon-ccmp:version>
    <xcon-ccmp:confResponse>
      <xcon-ccmp:confInfo entity="xcon:8977878@example.com">
        <info:conference-description>
          <info:subject>weekly staff meeting</info:subject>
        </info:conference-description>
      </xcon-ccmp:confInfo>
    </xcon-ccmp:confResponse>
  </xcon-ccmp:ccmpResponse>
</xcon-ccmp:ccmpResponse>"#;

    fn parse(text: &str) -> Result<CcmpResponse, CcmpError> {
        let doc = roxmltree::Document::parse(text).unwrap();
        CcmpResponse::from_document(&doc)
    }

    #[test]
    fn binds_a_conference_create_response() {
        let response = parse(CONF_CREATED).unwrap();
        assert_eq!(response.conf_user_id, "xcon-userid:alice@example.com");
        assert_eq!(response.response_code, ResponseCode::SUCCESS);
        assert!(response.response_code.is_success());
        assert_eq!(response.version.get().copied().unwrap(), 1);

        let ResponsePayload::Conf(body) = &response.payload else {
            panic!("expected a conf response payload");
        };
        let info = body.conf_info.get().unwrap();
        assert_eq!(info.attributes[0].value, "xcon:8977878@example.com");
    }

    #[test]
    fn round_trips_through_the_writer() {
        let response = parse(CONF_CREATED).unwrap();
        let out = response.serialize(&NamespaceMap::ccmp()).unwrap();
        let reparsed = parse(&out).unwrap();
        assert_eq!(response, reparsed);
    }

    #[test]
    fn binds_an_options_response() {
        let response = parse(
            r#"<c:ccmpResponse xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp"
                               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                 <c:ccmpResponse xsi:type="c:ccmp-options-response-message-type">
                   <c:confUserID>xcon-userid:alice@example.com</c:confUserID>
                   <c:response-code>200</c:response-code>
                   <c:optionsResponse>
                     <c:options>
                       <c:standard-message-list>
                         <c:standard-message>
                           <c:name>confRequest</c:name>
                         </c:standard-message>
                       </c:standard-message-list>
                     </c:options>
                   </c:optionsResponse>
                 </c:ccmpResponse>
               </c:ccmpResponse>"#,
        )
        .unwrap();
        let ResponsePayload::Options(body) = &response.payload else {
            panic!("expected an options response payload");
        };
        let options = body.options.get().unwrap();
        assert_eq!(options.standard_message_list.standard_messages.len(), 1);
    }

    #[test]
    fn missing_conf_user_id_is_rejected() {
        let err = parse(
            r#"<c:ccmpResponse xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp"
                               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                 <c:ccmpResponse xsi:type="c:ccmp-blueprints-response-message-type">
                   <c:response-code>200</c:response-code>
                   <c:blueprintsResponse/>
                 </c:ccmpResponse>
               </c:ccmpResponse>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CcmpError::ExpectedElement {
                local: "confUserID",
                ..
            }
        ));
    }

    #[test]
    fn missing_response_code_is_rejected() {
        let err = parse(
            r#"<c:ccmpResponse xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp"
                               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                 <c:ccmpResponse xsi:type="c:ccmp-blueprints-response-message-type">
                   <c:confUserID>xcon-userid:bob@example.com</c:confUserID>
                   <c:blueprintsResponse/>
                 </c:ccmpResponse>
               </c:ccmpResponse>"#,
        )
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
    fn request_type_in_the_response_slot_is_unknown() {
        let err = parse(
            r#"<c:ccmpResponse xmlns:c="urn:ietf:params:xml:ns:xcon-ccmp"
                               xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                 <c:ccmpResponse xsi:type="c:ccmp-conf-request-message-type">
                   <c:confUserID>xcon-userid:bob@example.com</c:confUserID>
                   <c:response-code>200</c:response-code>
                 </c:ccmpResponse>
               </c:ccmpResponse>"#,
        )
        .unwrap_err();
        assert!(matches!(err, CcmpError::UnknownMessageType { .. }));
    }
}
