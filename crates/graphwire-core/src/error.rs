use crate::value::ValueTag;
use std::fmt;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Coercion and validation failures raised by the value codecs. Every
/// variant is detected synchronously at the offending call; a failed write
/// leaves the owning tree untouched.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ValueError {
    /// Enum membership failure: the stringified value is not a declared choice.
    #[error("expected one of [{}] (got {value:?} instead)", .choices.join(", "))]
    NotInChoices { value: String, choices: Vec<String> },

    /// Pattern-constrained field failure: the stringified value does not
    /// fully match the declared pattern.
    #[error("failed match for {value:?}, expected pattern {pattern:?} instead")]
    PatternMismatch { value: String, pattern: String },

    /// Structurally wrong value variant for the field's declared kind.
    #[error("expected {expected} value (got {got} instead)")]
    TypeMismatch {
        expected: &'static str,
        got: ValueTag,
    },

    /// Stored text does not parse under the kind's fixed wire format.
    #[error("malformed {expected} text: {text:?}")]
    Format { expected: &'static str, text: String },
}

impl ValueError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotInChoices { .. } | Self::PatternMismatch { .. } => ErrorClass::Validation,
            Self::TypeMismatch { .. } => ErrorClass::TypeMismatch,
            Self::Format { .. } => ErrorClass::Format,
        }
    }
}

///
/// SchemaError
///
/// Definition-time failures from composing field declarations, plus the
/// lookup failure of the dynamic accessor surface.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    /// A field declaration with no wire name cannot be compiled.
    #[error("field declaration requires a wire name")]
    MissingName,

    /// Two declarations in one table compose to the same accessor name.
    #[error("duplicate field accessor {accessor:?}")]
    DuplicateAccessor { accessor: String },

    /// Dynamic lookup of an accessor that was never composed.
    #[error("no field accessor named {accessor:?}")]
    UnknownAccessor { accessor: String },
}

impl SchemaError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::Schema
    }
}

///
/// ErrorClass
/// Coarse taxonomy used by callers that only branch on failure shape.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Validation,
    TypeMismatch,
    Format,
    Schema,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validation => "validation",
            Self::TypeMismatch => "type_mismatch",
            Self::Format => "format",
            Self::Schema => "schema",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_classes() {
        let err = ValueError::NotInChoices {
            value: "x".to_string(),
            choices: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.class(), ErrorClass::Validation);
        assert_eq!(err.to_string(), "expected one of [a, b] (got \"x\" instead)");

        let err = ValueError::Format {
            expected: "date",
            text: "nope".to_string(),
        };
        assert_eq!(err.class(), ErrorClass::Format);
    }

    #[test]
    fn error_class_labels_are_lowercase() {
        assert_eq!(ErrorClass::Validation.to_string(), "validation");
        assert_eq!(ErrorClass::TypeMismatch.to_string(), "type_mismatch");
        assert_eq!(ErrorClass::Schema.to_string(), "schema");
    }
}
