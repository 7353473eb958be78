//! Joining sequences into text and splitting text into sequences.

use seqkit_foundation::{Sequence, TextForm};

/// Concatenates the text forms of the elements, separated by `separator`.
///
/// Absent values (`None`, `Undefined`, `Null`) contribute empty text.
pub fn join<T>(sequence: &Sequence<T>, separator: &str) -> String
where
    T: Clone + TextForm,
{
    let mut out = String::new();
    for (i, item) in sequence.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_text());
    }
    out
}

/// Splits `text` on every occurrence of `separator`.
///
/// An empty separator splits into individual characters. Splitting empty
/// text on a non-empty separator yields one empty string.
pub fn split_text(text: &str, separator: &str) -> Sequence<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(separator).map(str::to_string).collect()
}
