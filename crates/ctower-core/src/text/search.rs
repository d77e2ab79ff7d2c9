//! Line, label, and delimiter based lookups.

use regex::Regex;

use super::patterns::{CLIENT_MARKER, PAYMENT_TERMS, VALUE_MARKER};

/// A literal substring or a compiled regex.
#[derive(Debug, Clone, Copy)]
pub enum TextPattern<'a> {
    Literal(&'a str),
    Regex(&'a Regex),
}

impl TextPattern<'_> {
    /// Whether the pattern occurs in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            TextPattern::Literal(s) => haystack.contains(s),
            TextPattern::Regex(re) => re.is_match(haystack),
        }
    }

    /// Split `haystack` on every occurrence of the pattern.
    pub fn split<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        match self {
            // An empty literal would split between every character
            TextPattern::Literal("") => vec![haystack],
            TextPattern::Literal(s) => haystack.split(s).collect(),
            TextPattern::Regex(re) => re.split(haystack).collect(),
        }
    }
}

impl<'a> From<&'a str> for TextPattern<'a> {
    fn from(s: &'a str) -> Self {
        TextPattern::Literal(s)
    }
}

impl<'a> From<&'a Regex> for TextPattern<'a> {
    fn from(re: &'a Regex) -> Self {
        TextPattern::Regex(re)
    }
}

/// Every line matching `pattern`, in order, duplicates included.
pub fn extract_lines_containing<'t, 'p>(
    text: &'t str,
    pattern: impl Into<TextPattern<'p>>,
) -> Vec<&'t str> {
    let pattern: TextPattern = pattern.into();
    text.lines().filter(|line| pattern.is_match(line)).collect()
}

/// Trimmed rest of the line after the first `label:`.
pub fn extract_after_label(text: &str, label: &str) -> Option<String> {
    extract_after_label_with(text, label, ":")
}

/// Trimmed rest of the line after the first `label` + `delimiter`.
///
/// The label is matched case-insensitively and may be separated from the
/// delimiter by whitespace.
pub fn extract_after_label_with(text: &str, label: &str, delimiter: &str) -> Option<String> {
    let pattern = format!(
        r"(?i){}\s*{}[ \t]*([^\r\n]*)",
        regex::escape(label),
        regex::escape(delimiter)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(text).map(|caps| caps[1].trim().to_string())
}

/// Split on `separator`, dropping whitespace-only segments. Kept segments are returned as-is.
pub fn split_into_blocks<'t, 'p>(
    text: &'t str,
    separator: impl Into<TextPattern<'p>>,
) -> Vec<&'t str> {
    let separator: TextPattern = separator.into();
    separator
        .split(text)
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Text strictly between the first `start_marker` and the next `end_marker`.
pub fn extract_between<'t>(text: &'t str, start_marker: &str, end_marker: &str) -> Option<&'t str> {
    let start = text.find(start_marker)? + start_marker.len();
    let rest = &text[start..];
    let end = rest.find(end_marker)?;
    Some(&rest[..end])
}

/// Raw payment terms following a payment-terms label.
pub fn extract_payment_terms(text: &str) -> Option<String> {
    PAYMENT_TERMS
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .find(|terms| !terms.is_empty())
}

/// Cheap pre-check that a cell looks like an operation block.
///
/// Requires a client label and a value label.
pub fn is_valid_operation_text(text: &str) -> bool {
    CLIENT_MARKER.is_match(text) && VALUE_MARKER.is_match(text)
}
