use std::cmp::Ordering;

/// Compares two strings lexicographically, ignoring ASCII case.
///
/// Non-ASCII characters are compared as-is, so the result never depends on
/// the current locale.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}
