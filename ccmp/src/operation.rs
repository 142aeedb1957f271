use std::fmt;

use crate::error::CcmpError;
use crate::values::{collapse, LexicalValue};

/// The four CCMP operations (RFC 6503 §5.1, `operationType`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    Retrieve,
    Create,
    Update,
    Delete,
}

impl LexicalValue for OperationType {
    const TYPE_NAME: &'static str = "operationType";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        match collapse(src).as_str() {
            "retrieve" => Ok(Self::Retrieve),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(CcmpError::UnexpectedEnumerator {
                type_name: Self::TYPE_NAME,
                value: other.to_string(),
            }),
        }
    }

    fn to_lexical(&self) -> String {
        match self {
            Self::Retrieve => "retrieve",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
        .to_string()
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lexical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_four_literals_round_trip() {
        for literal in ["retrieve", "create", "update", "delete"] {
            let op = OperationType::from_lexical(literal).unwrap();
            assert_eq!(op.to_lexical(), literal);
        }
    }

    #[test]
    fn anything_else_is_rejected() {
        for bad in ["Retrieve", "remove", "", "create "] {
            // Whitespace collapse makes "create " valid; everything else fails.
            let result = OperationType::from_lexical(bad);
            if bad.trim() == "create" {
                assert!(result.is_ok());
            } else {
                assert!(matches!(
                    result,
                    Err(CcmpError::UnexpectedEnumerator {
                        type_name: "operationType",
                        ..
                    })
                ));
            }
        }
    }
}
