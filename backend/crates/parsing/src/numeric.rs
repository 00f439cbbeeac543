//! Numeric Parser
//!
//! Lenient front end, strict back end: input is normalized first, then must
//! be a plain integer or a plain decimal number.
//!
//! ## Defaults
//! Every entry point takes an optional default. With a default, any format
//! failure silently resolves to it; without one, a [`TextError::Format`]
//! carrying the caller's original input is returned. An absent input is
//! always [`TextError::NullInput`], default or not.
//!
//! ## Nullable variants
//! `parse_nullable_*` return the default (or `None`) for input that is
//! blank after normalization, without attempting a parse.

use crate::config::ParserConfig;
use crate::error::{NumericKind, TextError, TextResult};
use crate::normalize::{NormalizedText, STANDARD_NOISE_PATTERNS};

/// Numeric parser bound to one decimal separator
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericParser {
    config: ParserConfig,
}

impl NumericParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an `i32`
    ///
    /// Decimal content (`"1234.12"`, `"1234,12"`) is a format failure, never
    /// rounded or truncated.
    pub fn parse_int<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
        default: Option<i32>,
    ) -> TextResult<i32> {
        let raw = value.into().ok_or(TextError::NullInput)?;
        let normalized = normalize_standard(raw);
        resolve(raw, parse_strict_int(&normalized), default, NumericKind::Int)
    }

    /// Parse an `i32`, treating blank input as "no value"
    pub fn parse_nullable_int<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
        default: Option<i32>,
    ) -> TextResult<Option<i32>> {
        let raw = value.into().ok_or(TextError::NullInput)?;
        let normalized = normalize_standard(raw);
        if normalized.is_blank() {
            return Ok(default);
        }
        resolve(raw, parse_strict_int(&normalized), default, NumericKind::Int).map(Some)
    }

    /// Parse an `f64`
    ///
    /// Both `,` and `.` are read as the configured decimal separator, so at
    /// most one of them may appear in the input.
    pub fn parse_double<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
        default: Option<f64>,
    ) -> TextResult<f64> {
        let raw = value.into().ok_or(TextError::NullInput)?;
        let normalized = self.normalize_decimal(raw);
        let parsed = parse_strict_decimal(&normalized, self.config.decimal_separator());
        resolve(raw, parsed, default, NumericKind::Double)
    }

    /// Parse an `f64`, treating blank input as "no value"
    pub fn parse_nullable_double<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
        default: Option<f64>,
    ) -> TextResult<Option<f64>> {
        let raw = value.into().ok_or(TextError::NullInput)?;
        let normalized = self.normalize_decimal(raw);
        if normalized.is_blank() {
            return Ok(default);
        }
        let parsed = parse_strict_decimal(&normalized, self.config.decimal_separator());
        resolve(raw, parsed, default, NumericKind::Double).map(Some)
    }

    /// Whether `value` would parse as an `i32`
    pub fn is_int(&self, value: &str) -> bool {
        parse_strict_int(&normalize_standard(value)).is_some()
    }

    /// Whether `value` would parse as an `f64`
    pub fn is_double(&self, value: &str) -> bool {
        let separator = self.config.decimal_separator();
        parse_strict_decimal(&self.normalize_decimal(value), separator).is_some()
    }

    fn normalize_decimal(&self, raw: &str) -> NormalizedText {
        let separator = self.config.decimal_separator();
        let rewritten: String = raw
            .to_lowercase()
            .chars()
            .map(|c| if c == ',' || c == '.' { separator } else { c })
            .collect();
        NormalizedText::from_lowercase(&rewritten, STANDARD_NOISE_PATTERNS)
    }
}

fn normalize_standard(raw: &str) -> NormalizedText {
    NormalizedText::from_lowercase(&raw.to_lowercase(), STANDARD_NOISE_PATTERNS)
}

fn resolve<T>(raw: &str, parsed: Option<T>, default: Option<T>, kind: NumericKind) -> TextResult<T> {
    match (parsed, default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default),
        (None, None) => {
            tracing::debug!(kind = %kind, "Numeric parse failed with no default");
            Err(TextError::format(raw, kind))
        }
    }
}

/// Optional `-`, then ASCII digits only, within `i32` range
fn parse_strict_int(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Optional `-`, ASCII digits, at most one separator, at least one digit
///
/// Exponents, `inf` and `nan` are rejected; so is anything that overflows to
/// infinity.
fn parse_strict_decimal(text: &str, separator: char) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);

    let mut digits = 0usize;
    let mut separators = 0usize;
    for ch in unsigned.chars() {
        if ch.is_ascii_digit() {
            digits += 1;
        } else if ch == separator {
            separators += 1;
        } else {
            return None;
        }
    }
    if digits == 0 || separators > 1 {
        return None;
    }

    let canonical: String = text
        .chars()
        .map(|c| if c == separator { '.' } else { c })
        .collect();
    canonical.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// Default-configuration shortcuts
// ============================================================================

/// [`NumericParser::parse_int`] with the default configuration
pub fn parse_int<'a>(value: impl Into<Option<&'a str>>, default: Option<i32>) -> TextResult<i32> {
    NumericParser::default().parse_int(value, default)
}

/// [`NumericParser::parse_nullable_int`] with the default configuration
pub fn parse_nullable_int<'a>(
    value: impl Into<Option<&'a str>>,
    default: Option<i32>,
) -> TextResult<Option<i32>> {
    NumericParser::default().parse_nullable_int(value, default)
}

/// [`NumericParser::parse_double`] with the default configuration
pub fn parse_double<'a>(value: impl Into<Option<&'a str>>, default: Option<f64>) -> TextResult<f64> {
    NumericParser::default().parse_double(value, default)
}

/// [`NumericParser::parse_nullable_double`] with the default configuration
pub fn parse_nullable_double<'a>(
    value: impl Into<Option<&'a str>>,
    default: Option<f64>,
) -> TextResult<Option<f64>> {
    NumericParser::default().parse_nullable_double(value, default)
}

/// [`NumericParser::is_int`] with the default configuration
pub fn is_int(value: &str) -> bool {
    NumericParser::default().is_int(value)
}

/// [`NumericParser::is_double`] with the default configuration
pub fn is_double(value: &str) -> bool {
    NumericParser::default().is_double(value)
}
