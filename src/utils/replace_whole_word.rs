/// ASCII word characters, matching the `\b` boundary of common regex engines.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces every occurrence of `word` in `text` that is bounded on both sides by a
/// non-word character (or the start/end of the string).
///
/// Note: `word` is matched case-sensitively.
pub fn replace_whole_word(text: &str, word: &str, replacement: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for (start, matched) in text.match_indices(word) {
        let end = start + matched.len();

        let bounded_before = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let bounded_after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));

        if bounded_before && bounded_after {
            result.push_str(&text[last_end..start]);
            result.push_str(replacement);
            last_end = end;
        }
    }

    result.push_str(&text[last_end..]);
    result
}
