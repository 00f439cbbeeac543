//! Substring Replacement Primitives
//!
//! Literal (non-regex) replacement with optional case folding, and the
//! ordered `cleanup` built on top of it.

use crate::error::{TextError, TextResult};

/// Replace every non-overlapping occurrence of `target` in `value`
///
/// ## Arguments
/// * `target` - Literal to search for; `None` is an error, `Some("")` is a no-op
/// * `replacement` - Text to insert; `None` means the empty string
/// * `ignore_case` - Compare with per-character lower-case folding
///
/// The scan resumes after the matched span of `value`, so inserted text is
/// never searched again. Unmatched text keeps its original case.
///
/// ## Examples
/// ```rust
/// use parsing::replace_all;
///
/// let value = "Hello WORLD! There are many worlds out there";
/// assert_eq!(
///     replace_all(value, Some("WORLD"), Some("people"), true)?,
///     "Hello people! There are many peoples out there"
/// );
/// # Ok::<(), parsing::TextError>(())
/// ```
pub fn replace_all(
    value: &str,
    target: Option<&str>,
    replacement: Option<&str>,
    ignore_case: bool,
) -> TextResult<String> {
    let target = target.ok_or(TextError::NullArgument { name: "target" })?;
    Ok(replace_str(value, target, replacement.unwrap_or_default(), ignore_case))
}

/// Remove each pattern (case-insensitive) in the given order, then trim
///
/// Every occurrence of a pattern is removed before the next pattern is
/// applied. Empty patterns are skipped.
///
/// ## Examples
/// ```rust
/// use parsing::cleanup;
///
/// assert_eq!(cleanup("Hello world!", &["World"]), "Hello !");
/// assert_eq!(cleanup("Hello world!", &["!", "World"]), "Hello");
/// ```
pub fn cleanup(value: &str, patterns: &[&str]) -> String {
    let mut current = value.to_owned();
    for pattern in patterns {
        current = replace_str(&current, pattern, "", true);
    }
    current.trim().to_owned()
}

pub(crate) fn replace_str(value: &str, target: &str, replacement: &str, ignore_case: bool) -> String {
    if target.is_empty() {
        return value.to_owned();
    }

    let folded_target: String;
    let matcher = if ignore_case {
        folded_target = target.to_lowercase();
        Matcher::Folded(&folded_target)
    } else {
        Matcher::Exact(target)
    };

    let mut out = String::with_capacity(value.len());
    let mut cursor = 0;

    while let Some(rest) = value.get(cursor..).filter(|rest| !rest.is_empty()) {
        if let Some(matched_len) = matcher.prefix_len(rest) {
            out.push_str(replacement);
            cursor += matched_len;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        cursor += ch.len_utf8();
    }

    out
}

enum Matcher<'a> {
    Exact(&'a str),
    /// Holds the already lower-cased target
    Folded(&'a str),
}

impl Matcher<'_> {
    /// Byte length of the prefix of `haystack` that matches, if any
    fn prefix_len(&self, haystack: &str) -> Option<usize> {
        match self {
            Matcher::Exact(target) => haystack.starts_with(target).then_some(target.len()),
            Matcher::Folded(target) => folded_prefix_len(haystack, target),
        }
    }
}

/// Match `folded_target` against the lower-cased start of `haystack`
///
/// A haystack character must fold completely inside the target; a match that
/// would end halfway through one character's folding is rejected.
fn folded_prefix_len(haystack: &str, folded_target: &str) -> Option<usize> {
    let mut expected = folded_target.chars();
    let mut next = expected.next();

    for (index, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            match next {
                Some(c) if c == lower => next = expected.next(),
                _ => return None,
            }
        }
        if next.is_none() {
            return Some(index + ch.len_utf8());
        }
    }

    None
}
