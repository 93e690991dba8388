//! Text helper functions

/// Assumed reading speed, in words per minute
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes
///
/// Punctuation and line breaks are stripped before counting words, and the
/// result is rounded up. Every post shows at least "1 min read", so the
/// floor is 1 even for empty input.
pub fn reading_time(text: &str) -> usize {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let words = cleaned.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
