//! Description handling shared by all producers.

use textwrap::{Options, WordSplitter};

/// Maximum width of a wrapped description line.
pub const DESCRIPTION_WIDTH: usize = 90;

/// Collapse whitespace runs (including newlines) into single spaces and trim.
pub fn extract_description(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Wrap a description into lines of at most [`DESCRIPTION_WIDTH`] characters.
///
/// Lines break only at spaces, never inside a word or at its hyphens. A word
/// longer than the width stays whole on its own line. Empty or whitespace-only text yields no lines.
pub fn wrap_description(text: &str) -> Vec<String> {
    let text = extract_description(text);
    if text.is_empty() {
        return Vec::new();
    }
    let options = Options::new(DESCRIPTION_WIDTH)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);
    textwrap::wrap(&text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Wrap an optional description, returning `None` when nothing remains.
pub fn wrapped(description: Option<&str>) -> Option<Vec<String>> {
    let lines = wrap_description(description?);
    if lines.is_empty() { None } else { Some(lines) }
}
