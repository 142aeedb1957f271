use crate::error::CcmpError;

/// Conversion between the lexical space of a simple type and its value space.
///
/// Unlike attribute access on the raw tree, conversion failures are surfaced
/// as structured errors so a malformed document aborts the parse instead of
/// producing defaults.
pub trait LexicalValue: Sized {
    /// The schema type name used in error messages.
    const TYPE_NAME: &'static str;

    fn from_lexical(src: &str) -> Result<Self, CcmpError>;

    fn to_lexical(&self) -> String;
}

impl LexicalValue for String {
    const TYPE_NAME: &'static str = "xs:string";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        Ok(src.to_string())
    }

    fn to_lexical(&self) -> String {
        self.clone()
    }
}

impl LexicalValue for bool {
    const TYPE_NAME: &'static str = "xs:boolean";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        match src.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(CcmpError::InvalidLexicalValue {
                type_name: Self::TYPE_NAME,
                value: other.to_string(),
            }),
        }
    }

    fn to_lexical(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl LexicalValue for u64 {
    const TYPE_NAME: &'static str = "xs:positiveInteger";

    fn from_lexical(src: &str) -> Result<Self, CcmpError> {
        let invalid = || CcmpError::InvalidLexicalValue {
            type_name: Self::TYPE_NAME,
            value: src.trim().to_string(),
        };
        // positiveInteger starts at 1; zero belongs to nonNegativeInteger.
        match src.trim().parse() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(value) => Ok(value),
        }
    }

    fn to_lexical(&self) -> String {
        self.to_string()
    }
}

/// Whitespace collapse (`whiteSpace="collapse"`): leading/trailing whitespace
/// removed, internal runs folded to a single space.
pub fn collapse(src: &str) -> String {
    src.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_lexical_space() {
        assert!(bool::from_lexical(" true ").unwrap());
        assert!(!bool::from_lexical("0").unwrap());
        assert!(bool::from_lexical("yes").is_err());
    }

    #[test]
    fn positive_integer_rejects_garbage_and_zero() {
        assert_eq!(u64::from_lexical("42").unwrap(), 42);
        assert_eq!(u64::from_lexical(" 1 ").unwrap(), 1);
        for bad in ["fortytwo", "0", "-3"] {
            assert!(matches!(
                u64::from_lexical(bad),
                Err(CcmpError::InvalidLexicalValue { .. })
            ));
        }
    }

    #[test]
    fn collapse_folds_internal_runs() {
        assert_eq!(collapse("  a \n b\t\tc "), "a b c");
    }
}
