//! The CCMP request surface: the `ccmpRequest` envelope and the twelve
//! concrete request message types (RFC 6503 §5.3).
//!
//! The schema models requests as extensions of an abstract
//! `ccmp-request-message-type`, concretized per document via `xsi:type`.
//! Here the base/derived split becomes one envelope struct carrying the
//! shared fields plus an enum-tagged payload, and the `xsi:type` dispatch
//! goes through the [registry](crate::registry) tables below.

use roxmltree::{Document, Node};

use crate::container::{Optional, Sequence};
use crate::cursor::ContentCursor;
use crate::error::CcmpError;
use crate::fragment::{qualify_wildcard_attributes, wildcard_attributes, AnyAttribute, Fragment};
use crate::operation::OperationType;
use crate::registry::{self, MessageKind, MessageTypeEntry};
use crate::writer::{NamespaceMap, XmlWriter};
use crate::xstypes::{QName, XCON_CCMP_NAMESPACE as NS, XSI_NAMESPACE};

/// A complete CCMP request: the fields shared by every request message
/// (`ccmp-request-message-type`) plus the kind-specific payload.
///
/// `confUserID` identifies the requesting user, `confObjID` the target
/// conference object; both are optional at the schema level (a first create
/// has no object yet, blueprint queries have no user context).
#[derive(Clone, Debug, PartialEq)]
pub struct CcmpRequest {
    pub subject: Optional<String>,
    pub conf_user_id: Optional<String>,
    pub conf_obj_id: Optional<String>,
    pub operation: Optional<OperationType>,
    pub conference_password: Optional<String>,
    /// Foreign-namespace extension content from the base type's wildcard.
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
    pub payload: RequestPayload,
}

/// The concrete message kind, one variant per `ccmp-*-request-message-type`.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestPayload {
    /// An options request contributes no body of its own; the `xsi:type`
    /// alone selects it.
    Options,
    Blueprints(BlueprintsRequest),
    Blueprint(BlueprintRequest),
    Confs(ConfsRequest),
    Conf(ConfRequest),
    Users(UsersRequest),
    User(UserRequest),
    SidebarsByVal(SidebarsByValRequest),
    SidebarsByRef(SidebarsByRefRequest),
    SidebarByVal(SidebarByValRequest),
    SidebarByRef(SidebarByRefRequest),
    Extended(ExtendedRequest),
}

impl RequestPayload {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Options => MessageKind::Options,
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

/// `blueprintsRequestType`: a collection query, optionally narrowed by an
/// XPath filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintsRequest {
    pub xpath_filter: Optional<String>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `blueprintRequestType`: the `blueprintInfo` child carries an RFC 6501
/// conference document, preserved opaquely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintRequest {
    pub blueprint_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `confsRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfsRequest {
    pub xpath_filter: Optional<String>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `confRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfRequest {
    pub conf_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `usersRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersRequest {
    pub users_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `userRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRequest {
    pub user_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarsByValRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarsByValRequest {
    pub xpath_filter: Optional<String>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarsByRefRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarsByRefRequest {
    pub xpath_filter: Optional<String>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarByValRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarByValRequest {
    pub sidebar_by_val_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `sidebarByRefRequestType`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarByRefRequest {
    pub sidebar_by_ref_info: Optional<Fragment>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `extendedRequestType`: a vendor extension named by `extensionName`, with
/// the actual extension content in the wildcard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedRequest {
    pub extension_name: String,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

impl CcmpRequest {
    /// Binds a whole `ccmpRequest` document.
    pub fn from_document(doc: &Document) -> Result<Self, CcmpError> {
        let root = doc.root_element();
        if root.tag_name().namespace() != Some(NS) || root.tag_name().name() != "ccmpRequest" {
            return Err(CcmpError::UnexpectedElement {
                expected: format!("{{{NS}}}ccmpRequest"),
                actual: QName::of_node(root).to_string(),
            });
        }
        // ccmp-request-type is a pure wrapper around the one message element.
        let mut cursor = ContentCursor::new(root);
        let message = cursor.expect_named(NS, "ccmpRequest")?;
        cursor.finish()?;
        Self::from_element(message)
    }

    /// Binds the inner message element ("object ← element").
    pub fn from_element(node: Node) -> Result<Self, CcmpError> {
        let type_name = registry::message_type_name(node)?;
        let entry = registry::lookup_request(&type_name)
            .ok_or(CcmpError::UnknownMessageType { name: type_name })?;

        let mut cursor = ContentCursor::new(node);
        let subject = cursor.take_simple::<String>(NS, "subject")?.into();
        let conf_user_id = cursor.take_simple::<String>(NS, "confUserID")?.into();
        let conf_obj_id = cursor.take_simple::<String>(NS, "confObjID")?.into();
        let operation = cursor.take_simple::<OperationType>(NS, "operation")?.into();
        let conference_password = cursor
            .take_simple::<String>(NS, "conference-password")?
            .into();
        // The base wildcard run ends at the subtype's own element.
        let any = cursor.take_foreign_run(NS);
        let payload = (entry.parse_body)(&mut cursor)?;
        cursor.finish()?;

        Ok(Self {
            subject,
            conf_user_id,
            conf_obj_id,
            operation,
            conference_password,
            any,
            any_attributes: wildcard_attributes(node),
            payload,
        })
    }

    /// Writes the inner message element ("element ← object").
    pub fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        let entry = registry::entry_for_kind(MESSAGE_TYPES, self.payload.kind());
        let mut attributes = vec![(xsi_type_attribute(w)?, xsi_type_value(w, entry.type_name)?)];
        attributes.extend(qualify_wildcard_attributes(w, &self.any_attributes)?);
        w.start_element_with(NS, "ccmpRequest", &attributes)?;

        if let Some(subject) = self.subject.value() {
            w.simple_element(NS, "subject", subject)?;
        }
        if let Some(conf_user_id) = self.conf_user_id.value() {
            w.simple_element(NS, "confUserID", conf_user_id)?;
        }
        if let Some(conf_obj_id) = self.conf_obj_id.value() {
            w.simple_element(NS, "confObjID", conf_obj_id)?;
        }
        if let Some(operation) = self.operation.value() {
            w.simple_element(NS, "operation", &operation.to_string())?;
        }
        if let Some(password) = self.conference_password.value() {
            w.simple_element(NS, "conference-password", password)?;
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
        w.start_document_element(NS, "ccmpRequest")?;
        self.write(&mut w)?;
        w.end_element()?;
        Ok(w.into_string())
    }
}

/// The qualified `xsi:type` attribute name under the writer's map.
pub(crate) fn xsi_type_attribute(w: &XmlWriter) -> Result<String, CcmpError> {
    w.prefixed_name(XSI_NAMESPACE, "type")
}

/// The `xsi:type` value naming a CCMP message type.
pub(crate) fn xsi_type_value(w: &XmlWriter, type_name: &str) -> Result<String, CcmpError> {
    let prefix = w
        .namespaces()
        .prefix_for(NS)
        .ok_or_else(|| CcmpError::NamespaceNotBound {
            namespace: NS.to_string(),
        })?;
    Ok(format!("{prefix}:{type_name}"))
}

// Shared body shapes: the collection queries carry an optional xpathFilter,
// the object requests an optional opaque conference document.

type BodyParts<T> = (Optional<T>, Sequence<Fragment>, Sequence<AnyAttribute>);

pub(crate) fn parse_filter_body(node: Node) -> Result<BodyParts<String>, CcmpError> {
    let mut cursor = ContentCursor::new(node);
    let xpath_filter = cursor.take_simple::<String>(NS, "xpathFilter")?.into();
    let any = cursor.take_foreign_run(NS);
    cursor.finish()?;
    Ok((xpath_filter, any, wildcard_attributes(node)))
}

pub(crate) fn parse_info_body(
    node: Node,
    info_local: &'static str,
) -> Result<BodyParts<Fragment>, CcmpError> {
    let mut cursor = ContentCursor::new(node);
    let info = cursor
        .take_named(NS, info_local)
        .map(Fragment::from_node)
        .into();
    let any = cursor.take_foreign_run(NS);
    cursor.finish()?;
    Ok((info, any, wildcard_attributes(node)))
}

pub(crate) fn write_filter_body(
    w: &mut XmlWriter,
    body_local: &str,
    xpath_filter: &Optional<String>,
    any: &Sequence<Fragment>,
    any_attributes: &Sequence<AnyAttribute>,
) -> Result<(), CcmpError> {
    let attributes = qualify_wildcard_attributes(w, any_attributes)?;
    w.start_element_with(NS, body_local, &attributes)?;
    if let Some(filter) = xpath_filter.value() {
        w.simple_element(NS, "xpathFilter", filter)?;
    }
    for fragment in any {
        fragment.write(w)?;
    }
    w.end_element()
}

pub(crate) fn write_info_body(
    w: &mut XmlWriter,
    body_local: &str,
    info: &Optional<Fragment>,
    any: &Sequence<Fragment>,
    any_attributes: &Sequence<AnyAttribute>,
) -> Result<(), CcmpError> {
    let attributes = qualify_wildcard_attributes(w, any_attributes)?;
    w.start_element_with(NS, body_local, &attributes)?;
    if let Some(info) = info.value() {
        info.write(w)?;
    }
    for fragment in any {
        fragment.write(w)?;
    }
    w.end_element()
}

macro_rules! unreachable_kind {
    () => {
        unreachable!("registry entry kind does not match payload variant")
    };
}

fn parse_options_body(_cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    Ok(RequestPayload::Options)
}

fn write_options_body(_payload: &RequestPayload, _w: &mut XmlWriter) -> Result<(), CcmpError> {
    Ok(())
}

fn parse_blueprints_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "blueprintsRequest")?;
    let (xpath_filter, any, any_attributes) = parse_filter_body(body)?;
    Ok(RequestPayload::Blueprints(BlueprintsRequest {
        xpath_filter,
        any,
        any_attributes,
    }))
}

fn write_blueprints_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Blueprints(body) => write_filter_body(
            w,
            "blueprintsRequest",
            &body.xpath_filter,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_blueprint_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "blueprintRequest")?;
    let (blueprint_info, any, any_attributes) = parse_info_body(body, "blueprintInfo")?;
    Ok(RequestPayload::Blueprint(BlueprintRequest {
        blueprint_info,
        any,
        any_attributes,
    }))
}

fn write_blueprint_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Blueprint(body) => write_info_body(
            w,
            "blueprintRequest",
            &body.blueprint_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_confs_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "confsRequest")?;
    let (xpath_filter, any, any_attributes) = parse_filter_body(body)?;
    Ok(RequestPayload::Confs(ConfsRequest {
        xpath_filter,
        any,
        any_attributes,
    }))
}

fn write_confs_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Confs(body) => write_filter_body(
            w,
            "confsRequest",
            &body.xpath_filter,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_conf_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "confRequest")?;
    let (conf_info, any, any_attributes) = parse_info_body(body, "confInfo")?;
    Ok(RequestPayload::Conf(ConfRequest {
        conf_info,
        any,
        any_attributes,
    }))
}

fn write_conf_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Conf(body) => write_info_body(
            w,
            "confRequest",
            &body.conf_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_users_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "usersRequest")?;
    let (users_info, any, any_attributes) = parse_info_body(body, "usersInfo")?;
    Ok(RequestPayload::Users(UsersRequest {
        users_info,
        any,
        any_attributes,
    }))
}

fn write_users_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Users(body) => write_info_body(
            w,
            "usersRequest",
            &body.users_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_user_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "userRequest")?;
    let (user_info, any, any_attributes) = parse_info_body(body, "userInfo")?;
    Ok(RequestPayload::User(UserRequest {
        user_info,
        any,
        any_attributes,
    }))
}

fn write_user_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::User(body) => write_info_body(
            w,
            "userRequest",
            &body.user_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebars_by_val_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarsByValRequest")?;
    let (xpath_filter, any, any_attributes) = parse_filter_body(body)?;
    Ok(RequestPayload::SidebarsByVal(SidebarsByValRequest {
        xpath_filter,
        any,
        any_attributes,
    }))
}

fn write_sidebars_by_val_body(
    payload: &RequestPayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::SidebarsByVal(body) => write_filter_body(
            w,
            "sidebarsByValRequest",
            &body.xpath_filter,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebars_by_ref_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarsByRefRequest")?;
    let (xpath_filter, any, any_attributes) = parse_filter_body(body)?;
    Ok(RequestPayload::SidebarsByRef(SidebarsByRefRequest {
        xpath_filter,
        any,
        any_attributes,
    }))
}

fn write_sidebars_by_ref_body(
    payload: &RequestPayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::SidebarsByRef(body) => write_filter_body(
            w,
            "sidebarsByRefRequest",
            &body.xpath_filter,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebar_by_val_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarByValRequest")?;
    let (sidebar_by_val_info, any, any_attributes) = parse_info_body(body, "sidebarByValInfo")?;
    Ok(RequestPayload::SidebarByVal(SidebarByValRequest {
        sidebar_by_val_info,
        any,
        any_attributes,
    }))
}

fn write_sidebar_by_val_body(
    payload: &RequestPayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::SidebarByVal(body) => write_info_body(
            w,
            "sidebarByValRequest",
            &body.sidebar_by_val_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_sidebar_by_ref_body(
    cursor: &mut ContentCursor<'_, '_>,
) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "sidebarByRefRequest")?;
    let (sidebar_by_ref_info, any, any_attributes) = parse_info_body(body, "sidebarByRefInfo")?;
    Ok(RequestPayload::SidebarByRef(SidebarByRefRequest {
        sidebar_by_ref_info,
        any,
        any_attributes,
    }))
}

fn write_sidebar_by_ref_body(
    payload: &RequestPayload,
    w: &mut XmlWriter,
) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::SidebarByRef(body) => write_info_body(
            w,
            "sidebarByRefRequest",
            &body.sidebar_by_ref_info,
            &body.any,
            &body.any_attributes,
        ),
        _ => unreachable_kind!(),
    }
}

fn parse_extended_body(cursor: &mut ContentCursor<'_, '_>) -> Result<RequestPayload, CcmpError> {
    let body = cursor.expect_named(NS, "extendedRequest")?;
    let mut inner = ContentCursor::new(body);
    let extension_name = inner.expect_simple::<String>(NS, "extensionName")?;
    let any = inner.take_foreign_run(NS);
    inner.finish()?;
    Ok(RequestPayload::Extended(ExtendedRequest {
        extension_name,
        any,
        any_attributes: wildcard_attributes(body),
    }))
}

fn write_extended_body(payload: &RequestPayload, w: &mut XmlWriter) -> Result<(), CcmpError> {
    match payload {
        RequestPayload::Extended(body) => {
            let attributes = qualify_wildcard_attributes(w, &body.any_attributes)?;
            w.start_element_with(NS, "extendedRequest", &attributes)?;
            w.simple_element(NS, "extensionName", &body.extension_name)?;
            for fragment in &body.any {
                fragment.write(w)?;
            }
            w.end_element()
        }
        _ => unreachable_kind!(),
    }
}

pub(crate) static MESSAGE_TYPES: &[MessageTypeEntry<RequestPayload>] = &[
    MessageTypeEntry {
        kind: MessageKind::Options,
        type_name: "ccmp-options-request-message-type",
        parse_body: parse_options_body,
        write_body: write_options_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Blueprints,
        type_name: "ccmp-blueprints-request-message-type",
        parse_body: parse_blueprints_body,
        write_body: write_blueprints_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Blueprint,
        type_name: "ccmp-blueprint-request-message-type",
        parse_body: parse_blueprint_body,
        write_body: write_blueprint_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Confs,
        type_name: "ccmp-confs-request-message-type",
        parse_body: parse_confs_body,
        write_body: write_confs_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Conf,
        type_name: "ccmp-conf-request-message-type",
        parse_body: parse_conf_body,
        write_body: write_conf_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Users,
        type_name: "ccmp-users-request-message-type",
        parse_body: parse_users_body,
        write_body: write_users_body,
    },
    MessageTypeEntry {
        kind: MessageKind::User,
        type_name: "ccmp-user-request-message-type",
        parse_body: parse_user_body,
        write_body: write_user_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarsByVal,
        type_name: "ccmp-sidebarsByVal-request-message-type",
        parse_body: parse_sidebars_by_val_body,
        write_body: write_sidebars_by_val_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarsByRef,
        type_name: "ccmp-sidebarsByRef-request-message-type",
        parse_body: parse_sidebars_by_ref_body,
        write_body: write_sidebars_by_ref_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarByVal,
        type_name: "ccmp-sidebarByVal-request-message-type",
        parse_body: parse_sidebar_by_val_body,
        write_body: write_sidebar_by_val_body,
    },
    MessageTypeEntry {
        kind: MessageKind::SidebarByRef,
        type_name: "ccmp-sidebarByRef-request-message-type",
        parse_body: parse_sidebar_by_ref_body,
        write_body: write_sidebar_by_ref_body,
    },
    MessageTypeEntry {
        kind: MessageKind::Extended,
        type_name: "ccmp-extended-request-message-type",
        parse_body: parse_extended_body,
        write_body: write_extended_body,
    },
];
