//! Parsing Error Types
//!
//! Crate-specific error variants mapped onto `kernel::error::kind::ErrorKind`.

use std::fmt;

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Parsing-specific result type alias
pub type TextResult<T> = Result<T, TextError>;

/// Numeric type a parse was attempting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Int,
    Double,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Int => f.write_str("an integer"),
            NumericKind::Double => f.write_str("a double"),
        }
    }
}

/// Parsing and text-primitive errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The input string was absent
    #[error("Input value is missing")]
    NullInput,

    /// Text could not be parsed as the requested numeric type
    ///
    /// `value` is the input as the caller supplied it, before normalization.
    #[error("The value '{value}' can not be parsed to {kind}")]
    Format { value: String, kind: NumericKind },

    /// A required argument other than the input string was absent
    #[error("Argument '{name}' is missing")]
    NullArgument { name: &'static str },

    /// Decimal separator that would collide with digits, signs or whitespace
    #[error("'{0}' can not be used as a decimal separator")]
    InvalidSeparator(char),
}

impl TextError {
    pub(crate) fn format(value: &str, kind: NumericKind) -> Self {
        TextError::Format {
            value: value.to_owned(),
            kind,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TextError::NullInput => ErrorKind::NullInput,
            TextError::Format { .. } | TextError::InvalidSeparator(_) => ErrorKind::Format,
            TextError::NullArgument { .. } => ErrorKind::NullArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_keeps_original_value() {
        let err = TextError::format("1 234.5x", NumericKind::Double);
        assert_eq!(
            err.to_string(),
            "The value '1 234.5x' can not be parsed to a double"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(TextError::NullInput.kind(), ErrorKind::NullInput);
        assert_eq!(
            TextError::format("x", NumericKind::Int).kind(),
            ErrorKind::Format
        );
        assert_eq!(
            TextError::NullArgument { name: "target" }.kind(),
            ErrorKind::NullArgument
        );
        assert_eq!(TextError::InvalidSeparator('1').kind(), ErrorKind::Format);
    }
}
