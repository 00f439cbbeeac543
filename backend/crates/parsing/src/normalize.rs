//! Text Normalizer
//!
//! Strips noise substrings from human-entered numeric text so the strict
//! parsers only ever see sign, digits and separator.

use std::fmt;
use std::ops::Deref;

use crate::error::{TextError, TextResult};
use crate::replace::cleanup;

/// Noise removed before numeric parsing, in removal order
pub const STANDARD_NOISE_PATTERNS: &[&str] = &[
    " ",        // Regular space
    "\u{00A0}", // Non-breaking space
    "&nbsp;",   // HTML non-breaking space (matched in any case)
    "+",        // Plus signs
];

/// Lower-cased text with noise patterns removed and whitespace trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Build from already lower-cased text
    pub(crate) fn from_lowercase(lowered: &str, noise_patterns: &[&str]) -> Self {
        Self(cleanup(lowered, noise_patterns))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw numeric input
///
/// Lower-cases `raw`, removes each noise pattern (all occurrences,
/// case-insensitive, in the given order) and trims the result. An absent
/// input is an error; an empty one normalizes to empty.
///
/// ## Examples
/// ```rust
/// use parsing::{STANDARD_NOISE_PATTERNS, normalize};
///
/// let text = normalize("+1&NBSP;234 ", STANDARD_NOISE_PATTERNS)?;
/// assert_eq!(text.as_str(), "1234");
/// # Ok::<(), parsing::TextError>(())
/// ```
pub fn normalize<'a>(
    raw: impl Into<Option<&'a str>>,
    noise_patterns: &[&str],
) -> TextResult<NormalizedText> {
    let raw = raw.into().ok_or(TextError::NullInput)?;
    Ok(NormalizedText::from_lowercase(
        &raw.to_lowercase(),
        noise_patterns,
    ))
}
