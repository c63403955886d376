// src/core/sanitize.rs

/// Drop every Latin letter (either case). Arabic text, digits, punctuation
/// and whitespace are kept as-is.
pub fn strip_latin(s: &str) -> String {
    s.chars()
        .filter(|ch| !ch.to_lowercase().all(|lc| lc.is_ascii_lowercase()))
        .collect()
}

/// Remove the first whitespace-delimited token; the rest is re-joined with single spaces.
pub fn drop_first_token(s: &str) -> String {
    s.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}
