use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]*[.!?]").expect("sentence pattern compiles"));

/// Splits raw text into sentences terminated by `.`, `!` or `?`.
///
/// Trailing text without a terminator is dropped. Pieces are trimmed and
/// empty ones discarded.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

/// Wraps every literal occurrence of `matched` in `<mark>` tags.
pub fn highlight_match(sentence: &str, matched: &str) -> String {
    if matched.is_empty() {
        return sentence.to_string();
    }
    sentence.replace(matched, &format!("<mark>{}</mark>", matched))
}
