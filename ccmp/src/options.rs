//! Server capability advertisement: the `options` structure returned by an
//! options response (RFC 6503 §9.9).

use roxmltree::Node;

use crate::container::{Optional, Sequence};
use crate::cursor::ContentCursor;
use crate::error::CcmpError;
use crate::fragment::{qualify_wildcard_attributes, wildcard_attributes, AnyAttribute, Fragment};
use crate::operation::OperationType;
use crate::values::{collapse, LexicalValue};
use crate::writer::XmlWriter;
use crate::xstypes::XCON_CCMP_NAMESPACE as NS;

/// `options-type`: which messages and operations the server implements.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub standard_message_list: StandardMessageList,
    pub extended_message_list: Optional<ExtendedMessageList>,
    pub any: Sequence<Fragment>,
    pub any_attributes: Sequence<AnyAttribute>,
}

/// `standard-message-list-type`: one entry per supported standard message.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMessageList {
    pub standard_messages: Sequence<StandardMessage>,
}

/// `standard-message-type`
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMessage {
    pub name: StandardMessageName,
    pub operations: Optional<Operations>,
    pub schema_def: Optional<String>,
    pub description: Optional<String>,
    pub any: Sequence<Fragment>,
}

/// `standard-message-name-type`: the eleven standard request names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StandardMessageName {
    OptionsRequest,
    ConfsRequest,
    ConfRequest,
    BlueprintsRequest,
    BlueprintRequest,
    UsersRequest,
    UserRequest,
    SidebarsByValRequest,
    SidebarByValRequest,
    SidebarsByRefRequest,
    SidebarByRefRequest,
}

impl LexicalValue for StandardMessageName {
    const TYPE_NAME: &'static str = "standard-message-name-type";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        match collapse(src).as_str() {
            "optionsRequest" => Ok(Self::OptionsRequest),
            "confsRequest" => Ok(Self::ConfsRequest),
            "confRequest" => Ok(Self::ConfRequest),
            "blueprintsRequest" => Ok(Self::BlueprintsRequest),
            "blueprintRequest" => Ok(Self::BlueprintRequest),
            "usersRequest" => Ok(Self::UsersRequest),
            "userRequest" => Ok(Self::UserRequest),
            "sidebarsByValRequest" => Ok(Self::SidebarsByValRequest),
            "sidebarByValRequest" => Ok(Self::SidebarByValRequest),
            "sidebarsByRefRequest" => Ok(Self::SidebarsByRefRequest),
            "sidebarByRefRequest" => Ok(Self::SidebarByRefRequest),
            other => Err(CcmpError::UnexpectedEnumerator {
                type_name: Self::TYPE_NAME,
                value: other.to_string(),
            }),
        }
    }

    fn to_lexical(&self) -> String {
        match self {
            Self::OptionsRequest => "optionsRequest",
            Self::ConfsRequest => "confsRequest",
            Self::ConfRequest => "confRequest",
            Self::BlueprintsRequest => "blueprintsRequest",
            Self::BlueprintRequest => "blueprintRequest",
            Self::UsersRequest => "usersRequest",
            Self::UserRequest => "userRequest",
            Self::SidebarsByValRequest => "sidebarsByValRequest",
            Self::SidebarByValRequest => "sidebarByValRequest",
            Self::SidebarsByRefRequest => "sidebarsByRefRequest",
            Self::SidebarByRefRequest => "sidebarByRefRequest",
        }
        .to_string()
    }
}

/// `operations-type`: at least one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Operations {
    pub operations: Sequence<OperationType>,
}

/// `extended-message-list-type`
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedMessageList {
    pub extended_messages: Sequence<ExtendedMessage>,
    pub any: Sequence<Fragment>,
}

/// `extended-message-type`: like a standard message, but named freely and
/// with a required schema reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedMessage {
    pub name: String,
    pub operations: Optional<Operations>,
    pub schema_def: String,
    pub description: Optional<String>,
    pub any: Sequence<Fragment>,
}

impl Options {
    pub fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let standard_message_list =
            StandardMessageList::from_element(cursor.expect_named(NS, "standard-message-list")?)?;
        let extended_message_list = cursor
            .take_named(NS, "extended-message-list")
            .map(ExtendedMessageList::from_element)
            .transpose()?
            .into();
        let any = cursor.take_foreign_run(NS);
        cursor.finish()?;
        Ok(Self {
            standard_message_list,
            extended_message_list,
            any,
            any_attributes: wildcard_attributes(node),
        })
    }

    pub fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        let attributes = qualify_wildcard_attributes(w, &self.any_attributes)?;
        w.start_element_with(NS, "options", &attributes)?;
        self.standard_message_list.write(w)?;
        if let Some(list) = self.extended_message_list.value() {
            list.write(w)?;
        }
        for fragment in &self.any {
            fragment.write(w)?;
        }
        w.end_element()
    }
}

impl StandardMessageList {
    fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let mut standard_messages = Sequence::new();
        while let Some(message) = cursor.take_named(NS, "standard-message") {
            standard_messages.push(StandardMessage::from_element(message)?);
        }
        // minOccurs="1": an empty list is not a valid advertisement.
        if standard_messages.is_empty() {
            return Err(CcmpError::ExpectedElement {
                namespace: NS,
                local: "standard-message",
            });
        }
        cursor.finish()?;
        Ok(Self { standard_messages })
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        w.start_element(NS, "standard-message-list")?;
        for message in &self.standard_messages {
            message.write(w)?;
        }
        w.end_element()
    }
}

impl StandardMessage {
    fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let name = cursor.expect_simple::<StandardMessageName>(NS, "name")?;
        let operations = cursor
            .take_named(NS, "operations")
            .map(Operations::from_element)
            .transpose()?
            .into();
        let schema_def = cursor.take_simple::<String>(NS, "schema-def")?.into();
        let description = cursor.take_simple::<String>(NS, "description")?.into();
        let any = cursor.take_foreign_run(NS);
        cursor.finish()?;
        Ok(Self {
            name,
            operations,
            schema_def,
            description,
            any,
        })
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        w.start_element(NS, "standard-message")?;
        w.simple_element(NS, "name", &self.name.to_lexical())?;
        if let Some(operations) = self.operations.value() {
            operations.write(w)?;
        }
        if let Some(schema_def) = self.schema_def.value() {
            w.simple_element(NS, "schema-def", schema_def)?;
        }
        if let Some(description) = self.description.value() {
            w.simple_element(NS, "description", description)?;
        }
        for fragment in &self.any {
            fragment.write(w)?;
        }
        w.end_element()
    }
}

impl Operations {
    fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let mut operations = Sequence::new();
        while let Some(operation) = cursor.take_named(NS, "operation") {
            operations.push(OperationType::from_lexical(&crate::cursor::element_text(
                operation,
            ))?);
        }
        if operations.is_empty() {
            return Err(CcmpError::ExpectedElement {
                namespace: NS,
                local: "operation",
            });
        }
        cursor.finish()?;
        Ok(Self { operations })
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        w.start_element(NS, "operations")?;
        for operation in &self.operations {
            w.simple_element(NS, "operation", &operation.to_lexical())?;
        }
        w.end_element()
    }
}

impl ExtendedMessageList {
    fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let mut extended_messages = Sequence::new();
        while let Some(message) = cursor.take_named(NS, "extended-message") {
            extended_messages.push(ExtendedMessage::from_element(message)?);
        }
        let any = cursor.take_foreign_run(NS);
        cursor.finish()?;
        Ok(Self {
            extended_messages,
            any,
        })
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        w.start_element(NS, "extended-message-list")?;
        for message in &self.extended_messages {
            message.write(w)?;
        }
        for fragment in &self.any {
            fragment.write(w)?;
        }
        w.end_element()
    }
}

impl ExtendedMessage {
    fn from_element(node: Node) -> Result<Self, CcmpError> {
        let mut cursor = ContentCursor::new(node);
        let name = cursor.expect_simple::<String>(NS, "name")?;
        let operations = cursor
            .take_named(NS, "operations")
            .map(Operations::from_element)
            .transpose()?
            .into();
        let schema_def = cursor.expect_simple::<String>(NS, "schema-def")?;
        let description = cursor.take_simple::<String>(NS, "description")?.into();
        let any = cursor.take_foreign_run(NS);
        cursor.finish()?;
        Ok(Self {
            name,
            operations,
            schema_def,
            description,
            any,
        })
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), CcmpError> {
        w.start_element(NS, "extended-message")?;
        w.simple_element(NS, "name", &self.name)?;
        if let Some(operations) = self.operations.value() {
            operations.write(w)?;
        }
        w.simple_element(NS, "schema-def", &self.schema_def)?;
        if let Some(description) = self.description.value() {
            w.simple_element(NS, "description", description)?;
        }
        for fragment in &self.any {
            fragment.write(w)?;
        }
        w.end_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::NamespaceMap;

    const OPTIONS: &str = r#"
        <ccmp:options xmlns:ccmp="urn:ietf:params:xml:ns:xcon-ccmp">
          <ccmp:standard-message-list>
            <ccmp:standard-message>
              <ccmp:name>confRequest</ccmp:name>
              <ccmp:operations>
                <ccmp:operation>retrieve</ccmp:operation>
                <ccmp:operation>create</ccmp:operation>
              </ccmp:operations>
              <ccmp:description>conference object manipulation</ccmp:description>
            </ccmp:standard-message>
            <ccmp:standard-message>
              <ccmp:name>blueprintsRequest</ccmp:name>
            </ccmp:standard-message>
          </ccmp:standard-message-list>
        </ccmp:options>"#;

    fn parse_options(text: &str) -> Result<Options, CcmpError> {
        let doc = roxmltree::Document::parse(text).unwrap();
        Options::from_element(doc.root_element())
    }

    #[test]
    fn parses_standard_message_list() {
        let options = parse_options(OPTIONS).unwrap();
        let messages = &options.standard_message_list.standard_messages;
        assert_eq!(messages.len(), 2);
        let first = messages.iter().next().unwrap();
        assert_eq!(first.name, StandardMessageName::ConfRequest);
        assert_eq!(
            first
                .operations
                .get()
                .unwrap()
                .operations
                .iter()
                .copied()
                .collect::<Vec<_>>(),
            vec![OperationType::Retrieve, OperationType::Create]
        );
    }

    #[test]
    fn options_round_trip() {
        let options = parse_options(OPTIONS).unwrap();
        let mut w = XmlWriter::new(NamespaceMap::ccmp());
        w.start_document_element(NS, "ccmpResponse").unwrap();
        options.write(&mut w).unwrap();
        w.end_element().unwrap();
        let out = w.into_string();

        let doc = roxmltree::Document::parse(&out).unwrap();
        let reparsed =
            Options::from_element(doc.root_element().first_element_child().unwrap()).unwrap();
        assert_eq!(options, reparsed);
    }

    #[test]
    fn unknown_standard_message_name_is_rejected() {
        let err = parse_options(
            r#"<ccmp:options xmlns:ccmp="urn:ietf:params:xml:ns:xcon-ccmp">
                 <ccmp:standard-message-list>
                   <ccmp:standard-message><ccmp:name>frobnicateRequest</ccmp:name></ccmp:standard-message>
                 </ccmp:standard-message-list>
               </ccmp:options>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CcmpError::UnexpectedEnumerator {
                type_name: "standard-message-name-type",
                ..
            }
        ));
    }

    #[test]
    fn empty_standard_message_list_is_rejected() {
        let err = parse_options(
            r#"<ccmp:options xmlns:ccmp="urn:ietf:params:xml:ns:xcon-ccmp">
                 <ccmp:standard-message-list/>
               </ccmp:options>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CcmpError::ExpectedElement {
                local: "standard-message",
                ..
            }
        ));
    }
}
