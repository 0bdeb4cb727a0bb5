// src/core/hash.rs
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Eight hex digits plus the one character that follows them, usually the
/// dot before the extension. The trailing character is stripped along with
/// the hash. It never spans a line break.
static HASH_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}[^\n\r]").expect("Invalid hash segment regex")
});

#[inline]
#[must_use]
pub fn contains_hash(text: &str) -> bool {
    HASH_SEGMENT.is_match(text)
}

/// Number of non-overlapping hash segments in `text`.
#[inline]
#[must_use]
pub fn count_hashes(text: &str) -> usize {
    HASH_SEGMENT.find_iter(text).count()
}

/// Removes every hash segment from a file name, the same way references to
/// it are stripped from HTML.
///
/// Returns `None` when the name carries no hash.
#[inline]
#[must_use]
pub fn strip_name_hashes(name: &str) -> Option<String> {
    match strip_all_hashes(name) {
        Cow::Borrowed(_) => None,
        Cow::Owned(stripped) => Some(stripped),
    }
}

/// Removes every hash segment from `text`, borrowing when nothing matched.
#[inline]
#[must_use]
pub fn strip_all_hashes(text: &str) -> Cow<'_, str> {
    HASH_SEGMENT.replace_all(text, "")
}
