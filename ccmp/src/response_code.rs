use std::fmt;

use crate::error::CcmpError;
use crate::values::{collapse, LexicalValue};

/// A CCMP response code: a three-digit status in the HTTP style
/// (RFC 6503 §5.4).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResponseCode(u16);

impl ResponseCode {
    pub const SUCCESS: ResponseCode = ResponseCode(200);
    pub const BAD_REQUEST: ResponseCode = ResponseCode(400);
    pub const UNAUTHORIZED: ResponseCode = ResponseCode(401);
    pub const FORBIDDEN: ResponseCode = ResponseCode(403);
    pub const OBJECT_NOT_FOUND: ResponseCode = ResponseCode(404);
    pub const CONFLICT: ResponseCode = ResponseCode(409);
    pub const SERVER_INTERNAL_ERROR: ResponseCode = ResponseCode(500);
    pub const NOT_IMPLEMENTED: ResponseCode = ResponseCode(501);

    pub fn new(code: u16) -> Result<Self, CcmpError> {
        if (100..=999).contains(&code) {
            Ok(Self(code))
        } else {
            Err(CcmpError::InvalidLexicalValue {
                type_name: Self::TYPE_NAME,
                value: code.to_string(),
            })
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl LexicalValue for ResponseCode {
    const TYPE_NAME: &'static str = "response-code-type";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        let src = collapse(src);
        let code: u16 = src.parse().map_err(|_| CcmpError::InvalidLexicalValue {
            type_name: Self::TYPE_NAME,
            value: src.clone(),
        })?;
        Self::new(code)
    }

    fn to_lexical(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digit_range() {
        assert_eq!(ResponseCode::from_lexical("200").unwrap(), ResponseCode::SUCCESS);
        assert!(ResponseCode::from_lexical("99").is_err());
        assert!(ResponseCode::from_lexical("1000").is_err());
        assert!(ResponseCode::from_lexical("ok").is_err());
    }

    #[test]
    fn success_classification() {
        assert!(ResponseCode::SUCCESS.is_success());
        assert!(!ResponseCode::BAD_REQUEST.is_success());
        assert!(!ResponseCode::SERVER_INTERNAL_ERROR.is_success());
    }
}
