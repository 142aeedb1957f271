use thiserror::Error;

/// Errors produced while binding CCMP documents to the typed model or while
/// writing the model back out.
///
/// Every failure aborts the whole parse or serialize operation; there is no
/// recovery or partial-result semantics at this layer. Correctness of the
/// document is a precondition, not something the binding negotiates.
#[derive(Debug, Error)]
pub enum CcmpError {
    /// A schema-required child element was not found where the content model
    /// expects it.
    #[error("expected element {{{namespace}}}{local}")]
    ExpectedElement {
        namespace: &'static str,
        local: &'static str,
    },

    /// The document supplied an element where the content model allows none,
    /// or a different one than declared (e.g. a wrong document root).
    #[error("unexpected element {actual} (expected {expected})")]
    UnexpectedElement { expected: String, actual: String },

    /// A schema-required attribute was not found.
    #[error("expected attribute {local}")]
    ExpectedAttribute { local: &'static str },

    /// The `xsi:type` of a message slot resolved to no registered concrete
    /// message type. The slot is required, so a registry miss is terminal
    /// here, unlike the wildcard alternation inside content models.
    #[error("unknown CCMP message type {name:?}")]
    UnknownMessageType { name: String },

    /// A token fell outside the literal set of a restricted simple type.
    #[error("unexpected enumerator {value:?} for {type_name}")]
    UnexpectedEnumerator {
        type_name: &'static str,
        value: String,
    },

    /// [`Optional::get`](crate::container::Optional::get) on an empty
    /// container.
    #[error("optional value accessed while absent")]
    AbsentOptional,

    /// A simple-typed value failed lexical conversion (bad integer, bad
    /// boolean, response code out of range, ...).
    #[error("invalid lexical value {value:?} for {type_name}")]
    InvalidLexicalValue {
        type_name: &'static str,
        value: String,
    },

    /// A namespace prefix was used without an in-scope declaration.
    #[error("failed to resolve prefix {prefix:?} to a namespace URI")]
    PrefixNotResolved { prefix: String },

    /// A namespace URI has no prefix binding in the serializer's namespace
    /// map.
    #[error("no prefix bound for namespace {namespace:?}")]
    NamespaceNotBound { namespace: String },

    /// The underlying XML parser rejected the input.
    #[error("malformed XML document")]
    Xml(#[from] roxmltree::Error),

    /// The underlying XML writer failed.
    #[error("XML serialization failed")]
    Serialization(#[from] quick_xml::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
