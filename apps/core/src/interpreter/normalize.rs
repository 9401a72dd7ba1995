//! Text normalization and the loose matching rule shared by both resolvers.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: the pattern is a literal and compiling it cannot fail at runtime
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+").expect("Invalid regex: non-letter pattern"));

/// Lowercases and strips every character that is not an ASCII letter.
///
/// `"Bluefin Tuna!"` and `"bluefintuna"` normalize identically.
pub fn normalize_key(text: &str) -> String {
    NON_LETTERS.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Lowercases and trims, keeping inner whitespace so the query can still be
/// tokenized.
pub fn normalize_query(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Symmetric containment on already-normalized strings.
pub fn loosely_matches(needle: &str, form: &str) -> bool {
    needle.contains(form) || form.contains(needle)
}

/// Pre-normalized matching forms for an ordered reference table.
///
/// Each row holds the entry key followed by its synonyms, in table order.
#[derive(Debug, Clone, Default)]
pub(crate) struct MatchForms {
    rows: Vec<Vec<String>>,
}

impl MatchForms {
    pub(crate) fn new<'a, I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a String>,
    {
        let rows = rows
            .into_iter()
            .map(|(key, synonyms)| {
                std::iter::once(normalize_key(key))
                    .chain(synonyms.into_iter().map(|s| normalize_key(s)))
                    .filter(|form| !form.is_empty())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Index of the first row with a form that loosely matches `needle`.
    pub(crate) fn first_match(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.rows
            .iter()
            .position(|forms| forms.iter().any(|form| loosely_matches(needle, form)))
    }
}
