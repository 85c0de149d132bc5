// src/util/text.rs
use regex::Regex;
use std::cmp::Ordering;

/// Locale-style title ordering.
///
/// Letters compare case-insensitively first so "algebra" sorts next to
/// "Algebra" rather than after every capitalised title; exact text breaks ties.
///
/// This approximates locale collation only for ASCII. Folded titles are
/// compared by code point, so accented letters sort after `z`
/// ("Économie" comes after "Zoology").
pub fn collate(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| -> Vec<char> { s.chars().flat_map(char::to_lowercase).collect() };
    fold(a).cmp(&fold(b)).then_with(|| b.cmp(a))
}

/// Human-readable size with two decimals in MB, e.g. `2.40 MB`.
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Greedy word wrap at `width` columns; whitespace runs collapse to one space.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let word_re = Regex::new(r"\S+").unwrap();
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in word_re.find_iter(text).map(|m| m.as_str()) {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
