//! Response Normalizer: raw completion text in, lists or strings out.
//!
//! Purely syntactic. A reply with fewer usable lines than requested yields a
//! shorter list, never an error.

/// Lines of `text`, trimmed, with blank lines dropped.
pub fn usable_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Normalizes one hashtag: no whitespace, exactly one leading `#`.
/// Returns `None` when nothing but `#` and whitespace remains.
pub fn normalize_hashtag(line: &str) -> Option<String> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let body = compact.trim_start_matches('#');
    if body.is_empty() {
        return None;
    }
    Some(format!("#{body}"))
}

pub fn normalize_hashtags(text: &str, count: usize) -> Vec<String> {
    usable_lines(text)
        .filter_map(normalize_hashtag)
        .take(count)
        .collect()
}

pub fn normalize_ideas(text: &str, count: usize) -> Vec<String> {
    usable_lines(text).map(str::to_string).take(count).collect()
}

/// Video tags are plain keywords: every `#` is removed.
pub fn normalize_tags(text: &str, count: usize) -> Vec<String> {
    usable_lines(text)
        .map(|line| line.replace('#', "").trim().to_string())
        .filter(|tag| !tag.is_empty())
        .take(count)
        .collect()
}
