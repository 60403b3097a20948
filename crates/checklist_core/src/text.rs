//! Entry text helpers shared by the model and panel layers.

/// Combining long stroke overlay appended after each char for done items.
const STRIKE_OVERLAY: char = '\u{0336}';

/// Renders `text` with a combining strike overlay after every char.
///
/// Works on any terminal or widget that composes combining marks, so hosts
/// need no rich-text support to show completed entries.
pub fn strike_through(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        out.push(ch);
        out.push(STRIKE_OVERLAY);
    }
    out
}

/// Drops line breaks from new-entry input.
pub fn strip_newlines(text: &str) -> String {
    text.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect()
}

/// Returns whether `text` would produce an empty entry once newlines are gone.
///
/// Whitespace-only input is still a valid entry; only zero length is rejected.
pub fn is_blank_entry(text: &str) -> bool {
    !text.chars().any(|ch| !matches!(ch, '\n' | '\r'))
}
