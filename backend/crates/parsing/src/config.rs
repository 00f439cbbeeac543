//! Parser Configuration
//!
//! The decimal separator is explicit configuration rather than ambient
//! locale state.

use crate::error::{TextError, TextResult};

/// Numeric parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Single decimal separator both `,` and `.` are rewritten to
    decimal_separator: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl ParserConfig {
    /// Create config with a custom decimal separator
    ///
    /// Digits, signs and whitespace are rejected because normalization or the
    /// strict parser already give them a meaning.
    pub fn new(decimal_separator: char) -> TextResult<Self> {
        if decimal_separator.is_ascii_digit()
            || decimal_separator == '-'
            || decimal_separator == '+'
            || decimal_separator.is_whitespace()
        {
            return Err(TextError::InvalidSeparator(decimal_separator));
        }
        Ok(Self { decimal_separator })
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator_is_period() {
        assert_eq!(ParserConfig::default().decimal_separator(), '.');
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(ParserConfig::new(',').unwrap().decimal_separator(), ',');
    }

    #[test]
    fn test_rejects_conflicting_separators() {
        for c in ['0', '9', '-', '+', ' ', '\u{00A0}', '\t'] {
            assert_eq!(ParserConfig::new(c), Err(TextError::InvalidSeparator(c)));
        }
    }
}
